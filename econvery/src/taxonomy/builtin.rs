//! Built-in taxonomy contents.
//!
//! Keyword lists are written in plain English and normalized at match time, so
//! hyphenation and capitalization here are cosmetic.

use super::{Discipline, Journal, KeywordCluster, TaxonomyData};
use crate::models::JournalTier;
use std::collections::BTreeMap;

/// Version tag of the built-in taxonomy.
pub(crate) const BUILTIN_VERSION: &str = "2024.2";

struct ClusterDef {
    label: &'static str,
    canonical: &'static str,
    weight: f64,
    synonyms: &'static [&'static str],
    concepts: &'static [&'static str],
    aliases: &'static [&'static str],
}

impl ClusterDef {
    fn to_cluster(&self) -> KeywordCluster {
        KeywordCluster {
            label: self.label.to_string(),
            canonical: self.canonical.to_string(),
            synonyms: owned(self.synonyms),
            weight: self.weight,
            concepts: owned(self.concepts),
            aliases: owned(self.aliases),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

const ACADEMIC_LEVELS: &[&str] = &[
    "Undergraduate",
    "Masters Student",
    "PhD Student (Early)",
    "PhD Student (ABD)",
    "Postdoctoral Fellow",
    "Assistant Professor",
    "Associate Professor",
    "Full Professor",
    "Industry Researcher",
    "Policy Analyst",
    "Think Tank Researcher",
    "Government Economist",
];

const FIELDS: &[ClusterDef] = &[
    ClusterDef {
        label: "Microeconomics",
        canonical: "microeconomics",
        weight: 0.9,
        synonyms: &["microeconomic", "consumer behavior", "price theory", "market equilibrium", "demand elasticity", "utility maximization", "firm behavior"],
        concepts: &["Microeconomics"],
        aliases: &[],
    },
    ClusterDef {
        label: "Macroeconomics",
        canonical: "macroeconomics",
        weight: 1.0,
        synonyms: &["macroeconomic", "business cycle", "business cycles", "economic growth", "inflation", "output gap", "aggregate demand", "gdp", "recession"],
        concepts: &["Macroeconomics", "Business cycle"],
        aliases: &[],
    },
    ClusterDef {
        label: "Econometrics",
        canonical: "econometrics",
        weight: 0.8,
        synonyms: &["econometric", "estimator", "estimators", "estimation", "identification", "standard errors", "asymptotic", "inference"],
        concepts: &["Econometrics", "Estimator"],
        aliases: &[],
    },
    ClusterDef {
        label: "Labor Economics",
        canonical: "labor economics",
        weight: 1.0,
        synonyms: &["labour economics", "labor market", "labour market", "employment", "unemployment", "wage", "wages", "minimum wage", "earnings", "workers", "labor supply"],
        concepts: &["Labour economics", "Unemployment", "Wage"],
        aliases: &["Labour Economics"],
    },
    ClusterDef {
        label: "Public Economics",
        canonical: "public economics",
        weight: 1.0,
        synonyms: &["public finance", "taxation", "tax", "tax policy", "public goods", "social insurance", "transfer programs", "government spending"],
        concepts: &["Public economics", "Taxation"],
        aliases: &[],
    },
    ClusterDef {
        label: "International Economics",
        canonical: "international economics",
        weight: 1.0,
        synonyms: &["international trade", "exports", "imports", "tariff", "tariffs", "exchange rate", "trade policy", "foreign direct investment"],
        concepts: &["International economics", "International trade"],
        aliases: &[],
    },
    ClusterDef {
        label: "Development Economics",
        canonical: "development economics",
        weight: 1.0,
        synonyms: &["developing countries", "poverty", "microfinance", "low income countries", "economic development", "smallholder", "villages"],
        concepts: &["Development economics", "Poverty"],
        aliases: &[],
    },
    ClusterDef {
        label: "Financial Economics",
        canonical: "financial economics",
        weight: 1.0,
        synonyms: &["finance", "asset pricing", "stock returns", "corporate finance", "banking", "banks", "financial markets", "credit", "portfolio"],
        concepts: &["Financial economics", "Finance"],
        aliases: &["Finance"],
    },
    ClusterDef {
        label: "Industrial Organization",
        canonical: "industrial organization",
        weight: 1.0,
        synonyms: &["industrial organisation", "market power", "competition", "antitrust", "mergers", "oligopoly", "market structure", "markups"],
        concepts: &["Industrial organization", "Market power"],
        aliases: &["IO"],
    },
    ClusterDef {
        label: "Behavioral Economics",
        canonical: "behavioral economics",
        weight: 1.0,
        synonyms: &["behavioural economics", "nudge", "nudges", "present bias", "loss aversion", "bounded rationality", "heuristics", "biases"],
        concepts: &["Behavioral economics"],
        aliases: &["Behavioural Economics"],
    },
    ClusterDef {
        label: "Health Economics",
        canonical: "health economics",
        weight: 1.0,
        synonyms: &["health insurance", "healthcare", "health care", "hospital", "hospitals", "medicaid", "medicare", "mortality"],
        concepts: &["Health economics", "Health care"],
        aliases: &[],
    },
    ClusterDef {
        label: "Environmental Economics",
        canonical: "environmental economics",
        weight: 1.0,
        synonyms: &["pollution", "emissions", "carbon tax", "environmental regulation", "air quality", "natural resources", "externality", "externalities"],
        concepts: &["Environmental economics", "Pollution"],
        aliases: &[],
    },
    ClusterDef {
        label: "Urban Economics",
        canonical: "urban economics",
        weight: 1.0,
        synonyms: &["cities", "urban", "agglomeration", "housing", "neighborhood", "neighborhoods", "commuting", "spatial"],
        concepts: &["Urban economics"],
        aliases: &[],
    },
    ClusterDef {
        label: "Economic History",
        canonical: "economic history",
        weight: 1.0,
        synonyms: &["historical", "nineteenth century", "colonial", "industrial revolution", "archival", "long run", "persistence"],
        concepts: &["Economic history"],
        aliases: &[],
    },
    ClusterDef {
        label: "Political Economy",
        canonical: "political economy",
        weight: 1.0,
        synonyms: &["institutions", "politicians", "lobbying", "redistribution", "political", "democracy", "corruption"],
        concepts: &["Political economy"],
        aliases: &[],
    },
    ClusterDef {
        label: "Comparative Politics",
        canonical: "comparative politics",
        weight: 1.0,
        synonyms: &["political regimes", "authoritarian", "autocracy", "democratization", "party systems", "political parties", "regime"],
        concepts: &["Comparative politics"],
        aliases: &[],
    },
    ClusterDef {
        label: "International Relations",
        canonical: "international relations",
        weight: 1.0,
        synonyms: &["foreign policy", "interstate", "alliances", "diplomacy", "international organizations", "sanctions", "international cooperation"],
        concepts: &["International relations"],
        aliases: &["IR"],
    },
    ClusterDef {
        label: "American Politics",
        canonical: "american politics",
        weight: 1.0,
        synonyms: &["congress", "congressional", "partisan", "partisanship", "polarization", "supreme court", "presidential"],
        concepts: &["American politics"],
        aliases: &[],
    },
    ClusterDef {
        label: "Political Theory",
        canonical: "political theory",
        weight: 0.9,
        synonyms: &["political philosophy", "justice", "legitimacy", "liberalism", "democratic theory", "sovereignty", "normative"],
        concepts: &["Political philosophy"],
        aliases: &[],
    },
    ClusterDef {
        label: "Public Policy",
        canonical: "public policy",
        weight: 0.8,
        synonyms: &["policy", "policymakers", "government programs", "regulation", "policy design", "implementation", "public administration"],
        concepts: &["Public policy", "Public administration"],
        aliases: &[],
    },
    ClusterDef {
        label: "Political Methodology",
        canonical: "political methodology",
        weight: 0.9,
        synonyms: &["measurement", "survey methodology", "ideal points", "text as data", "statistical methods", "causal inference"],
        concepts: &["Political methodology", "Statistics"],
        aliases: &[],
    },
    ClusterDef {
        label: "Security Studies",
        canonical: "security studies",
        weight: 1.0,
        synonyms: &["civil war", "terrorism", "insurgency", "military", "armed conflict", "deterrence", "national security"],
        concepts: &["Security studies", "Terrorism"],
        aliases: &[],
    },
    ClusterDef {
        label: "Electoral Politics",
        canonical: "electoral politics",
        weight: 1.0,
        synonyms: &["elections", "voters", "voting", "turnout", "campaigns", "electoral", "candidates"],
        concepts: &["Electoral politics", "Voting"],
        aliases: &[],
    },
];

const INTERESTS: &[ClusterDef] = &[
    ClusterDef {
        label: "Causal Inference",
        canonical: "causal inference",
        weight: 0.9,
        synonyms: &["causal effect", "causal effects", "causal", "identification strategy", "treatment effect", "treatment effects", "counterfactual", "exogenous variation", "treatment group", "quasi experimental"],
        concepts: &["Causal inference", "Counterfactual thinking"],
        aliases: &[],
    },
    ClusterDef {
        label: "Machine Learning/AI",
        canonical: "machine learning",
        weight: 0.9,
        synonyms: &["artificial intelligence", "deep learning", "neural network", "neural networks", "random forest", "prediction", "algorithm", "algorithms", "large language models"],
        concepts: &["Machine learning", "Artificial intelligence"],
        aliases: &["Machine Learning", "AI"],
    },
    ClusterDef {
        label: "Field Experiments (RCTs)",
        canonical: "field experiment",
        weight: 1.0,
        synonyms: &["field experiments", "randomized", "randomised", "rct", "rcts", "random assignment", "randomized controlled trial"],
        concepts: &["Field experiment", "Randomized controlled trial"],
        aliases: &["Field Experiments", "RCTs"],
    },
    ClusterDef {
        label: "Natural Experiments",
        canonical: "natural experiment",
        weight: 1.0,
        synonyms: &["natural experiments", "quasi experiment", "quasi experimental", "exogenous shock", "as good as random", "lottery"],
        concepts: &["Natural experiment"],
        aliases: &[],
    },
    ClusterDef {
        label: "Structural Estimation",
        canonical: "structural estimation",
        weight: 1.0,
        synonyms: &["structural model", "structural models", "counterfactual simulations", "estimated model", "maximum likelihood", "method of moments"],
        concepts: &["Structural estimation"],
        aliases: &[],
    },
    ClusterDef {
        label: "Theory/Mechanism Design",
        canonical: "mechanism design",
        weight: 0.9,
        synonyms: &["game theory", "equilibrium", "auction", "auctions", "contract theory", "incentive compatible", "theoretical model"],
        concepts: &["Mechanism design", "Game theory"],
        aliases: &["Mechanism Design", "Theory"],
    },
    ClusterDef {
        label: "Survey Experiments",
        canonical: "survey experiment",
        weight: 1.0,
        synonyms: &["survey experiments", "conjoint", "vignette", "list experiment", "respondents", "survey"],
        concepts: &["Survey experiment", "Survey research"],
        aliases: &[],
    },
    ClusterDef {
        label: "Policy Evaluation",
        canonical: "policy evaluation",
        weight: 0.9,
        synonyms: &["program evaluation", "impact evaluation", "policy impact", "reform", "intervention", "cost benefit"],
        concepts: &["Program evaluation", "Impact evaluation"],
        aliases: &[],
    },
    ClusterDef {
        label: "Inequality & Redistribution",
        canonical: "inequality",
        weight: 1.0,
        synonyms: &["income inequality", "wealth inequality", "redistribution", "top incomes", "gini", "distributional"],
        concepts: &["Economic inequality", "Income distribution"],
        aliases: &["Inequality"],
    },
    ClusterDef {
        label: "Climate & Energy",
        canonical: "climate change",
        weight: 1.0,
        synonyms: &["climate", "energy", "carbon", "emissions", "renewable", "electricity", "fossil fuels", "global warming"],
        concepts: &["Climate change", "Renewable energy"],
        aliases: &["Climate"],
    },
    ClusterDef {
        label: "Education Policy",
        canonical: "education policy",
        weight: 1.0,
        synonyms: &["education", "schools", "students", "teachers", "test scores", "school choice", "college"],
        concepts: &["Education"],
        aliases: &["Education"],
    },
    ClusterDef {
        label: "Housing Markets",
        canonical: "housing market",
        weight: 1.0,
        synonyms: &["housing", "house prices", "rent", "rents", "mortgage", "mortgages", "homeownership", "real estate"],
        concepts: &["Housing", "Real estate"],
        aliases: &["Housing"],
    },
    ClusterDef {
        label: "Trade & Globalization",
        canonical: "globalization",
        weight: 1.0,
        synonyms: &["trade", "tariffs", "exports", "imports", "offshoring", "global value chains", "trade liberalization"],
        concepts: &["Globalization", "International trade"],
        aliases: &["Trade"],
    },
    ClusterDef {
        label: "Monetary Policy",
        canonical: "monetary policy",
        weight: 1.0,
        synonyms: &["central bank", "interest rates", "interest rate", "inflation", "federal reserve", "quantitative easing"],
        concepts: &["Monetary policy", "Central bank"],
        aliases: &[],
    },
    ClusterDef {
        label: "Fiscal Policy",
        canonical: "fiscal policy",
        weight: 1.0,
        synonyms: &["government spending", "fiscal multiplier", "public debt", "austerity", "taxes", "budget deficit", "stimulus"],
        concepts: &["Fiscal policy"],
        aliases: &[],
    },
    ClusterDef {
        label: "Innovation & Technology",
        canonical: "innovation",
        weight: 0.9,
        synonyms: &["technology", "patents", "patent", "technological change", "research and development", "automation", "productivity"],
        concepts: &["Innovation", "Technological change"],
        aliases: &["Innovation"],
    },
    ClusterDef {
        label: "Gender & Discrimination",
        canonical: "discrimination",
        weight: 1.0,
        synonyms: &["gender", "gender gap", "women", "female", "racial", "bias", "stereotypes"],
        concepts: &["Discrimination", "Gender gap"],
        aliases: &["Gender"],
    },
    ClusterDef {
        label: "Crime & Justice",
        canonical: "crime",
        weight: 1.0,
        synonyms: &["criminal", "policing", "police", "incarceration", "prison", "justice", "recidivism"],
        concepts: &["Criminology", "Criminal justice"],
        aliases: &["Crime"],
    },
    ClusterDef {
        label: "Health & Healthcare",
        canonical: "healthcare",
        weight: 1.0,
        synonyms: &["health", "health care", "health insurance", "mortality", "hospital", "physicians", "public health"],
        concepts: &["Health care", "Public health"],
        aliases: &["Health"],
    },
    ClusterDef {
        label: "Immigration",
        canonical: "immigration",
        weight: 1.0,
        synonyms: &["immigrants", "migrants", "migration", "refugees", "asylum", "foreign born"],
        concepts: &["Immigration", "Human migration"],
        aliases: &[],
    },
    ClusterDef {
        label: "Democratic Institutions",
        canonical: "democratic institutions",
        weight: 1.0,
        synonyms: &["democracy", "institutions", "checks and balances", "rule of law", "legislature", "courts", "accountability"],
        concepts: &["Democracy", "Institution"],
        aliases: &[],
    },
    ClusterDef {
        label: "Voting & Elections",
        canonical: "elections",
        weight: 1.0,
        synonyms: &["election", "voting", "voters", "turnout", "electoral", "ballot", "referendum"],
        concepts: &["Voting", "Election"],
        aliases: &["Elections"],
    },
    ClusterDef {
        label: "Conflict & Security",
        canonical: "conflict",
        weight: 1.0,
        synonyms: &["civil war", "violence", "terrorism", "war", "armed conflict", "peace", "insurgency"],
        concepts: &["War", "Terrorism"],
        aliases: &["Conflict"],
    },
    ClusterDef {
        label: "Media & Information",
        canonical: "media",
        weight: 0.9,
        synonyms: &["news", "misinformation", "social media", "newspapers", "television", "information", "propaganda"],
        concepts: &["Mass media", "Social media"],
        aliases: &["Media"],
    },
    ClusterDef {
        label: "Social Mobility",
        canonical: "social mobility",
        weight: 1.0,
        synonyms: &["intergenerational mobility", "economic mobility", "upward mobility", "intergenerational", "opportunity", "mobility"],
        concepts: &["Social mobility"],
        aliases: &[],
    },
    ClusterDef {
        label: "Poverty & Welfare",
        canonical: "poverty",
        weight: 1.0,
        synonyms: &["welfare", "social assistance", "cash transfers", "safety net", "low income", "food stamps", "snap"],
        concepts: &["Poverty", "Welfare"],
        aliases: &["Poverty"],
    },
    ClusterDef {
        label: "Regulation",
        canonical: "regulation",
        weight: 0.9,
        synonyms: &["regulatory", "regulators", "deregulation", "compliance", "licensing", "rules"],
        concepts: &["Regulation"],
        aliases: &[],
    },
];

const METHODS: &[ClusterDef] = &[
    ClusterDef {
        label: "Difference-in-Differences",
        canonical: "difference-in-differences",
        weight: 1.0,
        synonyms: &["differences-in-differences", "diff-in-diff", "parallel trends", "event study", "event studies", "two-way fixed effects", "staggered adoption", "treatment group", "control group"],
        concepts: &["Difference in differences"],
        aliases: &["DiD", "Diff-in-Diff"],
    },
    ClusterDef {
        label: "Regression Discontinuity",
        canonical: "regression discontinuity",
        weight: 1.0,
        synonyms: &["discontinuity design", "rdd", "running variable", "cutoff", "threshold", "bandwidth", "close elections"],
        concepts: &["Regression discontinuity design"],
        aliases: &["RDD", "RD"],
    },
    ClusterDef {
        label: "Instrumental Variables",
        canonical: "instrumental variables",
        weight: 1.0,
        synonyms: &["instrumental variable", "instrument", "instruments", "2sls", "two stage least squares", "exclusion restriction", "first stage"],
        concepts: &["Instrumental variable"],
        aliases: &["IV", "2SLS"],
    },
    ClusterDef {
        label: "Randomized Controlled Trials",
        canonical: "randomized controlled trial",
        weight: 1.0,
        synonyms: &["randomized controlled trials", "rct", "rcts", "randomized", "randomised", "random assignment", "field experiment"],
        concepts: &["Randomized controlled trial"],
        aliases: &["RCT", "RCTs"],
    },
    ClusterDef {
        label: "Structural Models",
        canonical: "structural model",
        weight: 0.9,
        synonyms: &["structural models", "structural estimation", "dynamic model", "general equilibrium", "calibrated", "simulation"],
        concepts: &[],
        aliases: &[],
    },
    ClusterDef {
        label: "Theoretical Models",
        canonical: "theoretical model",
        weight: 0.7,
        synonyms: &["theory", "model", "equilibrium", "proposition", "proof", "game theoretic"],
        concepts: &[],
        aliases: &[],
    },
    ClusterDef {
        label: "Machine Learning Methods",
        canonical: "machine learning",
        weight: 0.9,
        synonyms: &["lasso", "random forest", "neural network", "cross validation", "prediction", "classifier", "supervised learning"],
        concepts: &["Machine learning"],
        aliases: &["ML"],
    },
    ClusterDef {
        label: "Survey/Experimental Data",
        canonical: "survey data",
        weight: 0.8,
        synonyms: &["survey", "questionnaire", "respondents", "experimental data", "lab experiment", "laboratory experiment", "panel survey"],
        concepts: &[],
        aliases: &["Survey Data"],
    },
    ClusterDef {
        label: "Administrative Data",
        canonical: "administrative data",
        weight: 1.0,
        synonyms: &["administrative records", "registry data", "register data", "tax records", "linked data", "census"],
        concepts: &[],
        aliases: &[],
    },
    ClusterDef {
        label: "Time Series Analysis",
        canonical: "time series",
        weight: 1.0,
        synonyms: &["var", "vector autoregression", "cointegration", "forecasting", "autoregressive", "impulse response", "stationarity"],
        concepts: &["Time series"],
        aliases: &["Time Series"],
    },
    ClusterDef {
        label: "Panel Data Methods",
        canonical: "panel data",
        weight: 0.9,
        synonyms: &["fixed effects", "random effects", "longitudinal", "panel", "within estimator", "dynamic panel"],
        concepts: &["Panel data"],
        aliases: &["Panel Data"],
    },
    ClusterDef {
        label: "Text Analysis/NLP",
        canonical: "text analysis",
        weight: 1.0,
        synonyms: &["natural language processing", "nlp", "text as data", "topic model", "topic models", "sentiment analysis", "word embeddings", "corpus"],
        concepts: &["Natural language processing"],
        aliases: &["NLP", "Text Analysis"],
    },
    ClusterDef {
        label: "Network Analysis",
        canonical: "network analysis",
        weight: 0.9,
        synonyms: &["social network", "social networks", "network", "networks", "centrality", "ties", "peer effects"],
        concepts: &["Social network analysis"],
        aliases: &[],
    },
    ClusterDef {
        label: "Bayesian Methods",
        canonical: "bayesian",
        weight: 1.0,
        synonyms: &["posterior", "prior", "mcmc", "markov chain monte carlo", "hierarchical model", "bayes"],
        concepts: &["Bayesian probability", "Bayesian inference"],
        aliases: &["Bayesian"],
    },
    ClusterDef {
        label: "Qualitative Methods",
        canonical: "qualitative",
        weight: 0.9,
        synonyms: &["qualitative methods", "interviews", "ethnography", "ethnographic", "fieldwork", "focus groups", "thematic analysis"],
        concepts: &["Qualitative research"],
        aliases: &["Qualitative"],
    },
    ClusterDef {
        label: "Case Studies",
        canonical: "case study",
        weight: 0.9,
        synonyms: &["case studies", "comparative case", "single case", "within case", "historical case"],
        concepts: &["Case study"],
        aliases: &["Case Study"],
    },
    ClusterDef {
        label: "Process Tracing",
        canonical: "process tracing",
        weight: 1.0,
        synonyms: &["causal mechanisms", "causal mechanism", "within case analysis", "sequence of events", "historical analysis"],
        concepts: &[],
        aliases: &[],
    },
];

const REGIONS: &[ClusterDef] = &[
    ClusterDef {
        label: "Global/Comparative",
        canonical: "global",
        weight: 0.8,
        synonyms: &["comparative", "cross country", "cross national", "international", "worldwide", "countries", "multinational"],
        concepts: &[],
        aliases: &["Global", "Comparative"],
    },
    ClusterDef {
        label: "United States",
        canonical: "united states",
        weight: 1.0,
        synonyms: &["american", "america", "usa", "federal", "state level", "counties", "county"],
        concepts: &["United States"],
        aliases: &["US", "USA"],
    },
    ClusterDef {
        label: "European Union",
        canonical: "european union",
        weight: 1.0,
        synonyms: &["europe", "european", "eurozone", "euro area", "member states"],
        concepts: &["European union"],
        aliases: &["EU", "Europe"],
    },
    ClusterDef {
        label: "United Kingdom",
        canonical: "united kingdom",
        weight: 1.0,
        synonyms: &["britain", "british", "england", "scotland", "wales"],
        concepts: &["United Kingdom"],
        aliases: &["UK"],
    },
    ClusterDef {
        label: "China",
        canonical: "china",
        weight: 1.0,
        synonyms: &["chinese", "beijing", "shanghai", "prc"],
        concepts: &["China"],
        aliases: &[],
    },
    ClusterDef {
        label: "India",
        canonical: "india",
        weight: 1.0,
        synonyms: &["indian", "delhi", "mumbai", "bihar", "gujarat"],
        concepts: &["India"],
        aliases: &[],
    },
    ClusterDef {
        label: "Latin America",
        canonical: "latin america",
        weight: 1.0,
        synonyms: &["latin american", "brazil", "mexico", "argentina", "chile", "colombia", "peru"],
        concepts: &["Latin Americans"],
        aliases: &[],
    },
    ClusterDef {
        label: "Sub-Saharan Africa",
        canonical: "sub-saharan africa",
        weight: 1.0,
        synonyms: &["africa", "african", "kenya", "nigeria", "ghana", "ethiopia", "uganda", "tanzania"],
        concepts: &["Sub saharan"],
        aliases: &["Africa"],
    },
    ClusterDef {
        label: "Middle East & North Africa",
        canonical: "middle east",
        weight: 1.0,
        synonyms: &["north africa", "mena", "arab", "egypt", "iran", "turkey", "israel"],
        concepts: &["Middle East"],
        aliases: &["MENA", "Middle East"],
    },
    ClusterDef {
        label: "Southeast Asia",
        canonical: "southeast asia",
        weight: 1.0,
        synonyms: &["indonesia", "vietnam", "philippines", "thailand", "malaysia", "asean"],
        concepts: &["Southeast asia"],
        aliases: &[],
    },
    ClusterDef {
        label: "Global South",
        canonical: "global south",
        weight: 0.9,
        synonyms: &["developing countries", "low income countries", "developing world", "emerging economies"],
        concepts: &["Developing country"],
        aliases: &[],
    },
    ClusterDef {
        label: "OECD Countries",
        canonical: "oecd",
        weight: 0.9,
        synonyms: &["oecd countries", "advanced economies", "developed countries", "high income countries"],
        concepts: &[],
        aliases: &["OECD"],
    },
    ClusterDef {
        label: "Emerging Markets",
        canonical: "emerging markets",
        weight: 1.0,
        synonyms: &["emerging market", "emerging economies", "brics", "frontier markets"],
        concepts: &["Emerging markets"],
        aliases: &[],
    },
];

const SEED_AUTHORS: &[(&str, &[&str])] = &[
    ("Labor Economics", &["David Card", "Raj Chetty", "Lawrence Katz", "Claudia Goldin", "David Autor"]),
    ("Development Economics", &["Esther Duflo", "Abhijit Banerjee", "Michael Kremer", "Nathan Nunn"]),
    ("Public Economics", &["Emmanuel Saez", "Gabriel Zucman", "Raj Chetty", "Amy Finkelstein"]),
    ("Macroeconomics", &["Lawrence Summers", "Olivier Blanchard", "John Cochrane"]),
    ("Behavioral Economics", &["Richard Thaler", "Sendhil Mullainathan", "Stefano DellaVigna"]),
    ("Political Economy", &["Daron Acemoglu", "James Robinson", "Alberto Alesina"]),
    ("International Relations", &["Robert Keohane", "John Mearsheimer", "Beth Simmons"]),
    ("Comparative Politics", &["Theda Skocpol", "Robert Putnam", "Anna Grzymala-Busse"]),
    ("American Politics", &["Gary King", "Brandice Canes-Wrone", "Larry Bartels"]),
];

const JOURNALS: &[(&str, &str, Discipline, JournalTier)] = &[
    ("American Economic Review", "0002-8282", Discipline::Economics, JournalTier::Top),
    ("Quarterly Journal of Economics", "0033-5533", Discipline::Economics, JournalTier::Top),
    ("Journal of Political Economy", "0022-3808", Discipline::Economics, JournalTier::Top),
    ("Econometrica", "0012-9682", Discipline::Economics, JournalTier::Top),
    ("Review of Economic Studies", "0034-6527", Discipline::Economics, JournalTier::Top),
    ("Journal of Finance", "0022-1082", Discipline::Economics, JournalTier::Excellent),
    ("Review of Financial Studies", "0893-9454", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Financial Economics", "0304-405X", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Monetary Economics", "0304-3932", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Economic Theory", "0022-0531", Discipline::Economics, JournalTier::Excellent),
    ("AEJ: Applied Economics", "1945-7782", Discipline::Economics, JournalTier::Excellent),
    ("AEJ: Economic Policy", "1945-7731", Discipline::Economics, JournalTier::Excellent),
    ("AEJ: Macroeconomics", "1945-7707", Discipline::Economics, JournalTier::Excellent),
    ("AEJ: Microeconomics", "1945-7669", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Labor Economics", "0734-306X", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Public Economics", "0047-2727", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Human Resources", "0022-166X", Discipline::Economics, JournalTier::Excellent),
    ("Journal of Economic Perspectives", "0895-3309", Discipline::Economics, JournalTier::Excellent),
    ("Review of Economics and Statistics", "0034-6535", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of the European Economic Association", "1542-4766", Discipline::Economics, JournalTier::VeryGood),
    ("Economic Journal", "0013-0133", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of Development Economics", "0304-3878", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of International Economics", "0022-1996", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of Economic Growth", "1381-4338", Discipline::Economics, JournalTier::VeryGood),
    ("American Economic Journal: Applied Economics", "1945-7782", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of Applied Econometrics", "0883-7252", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of Business & Economic Statistics", "0735-0015", Discipline::Economics, JournalTier::VeryGood),
    ("Economic Policy", "0266-4658", Discipline::Economics, JournalTier::VeryGood),
    ("Journal of Economic Literature", "0022-0515", Discipline::Economics, JournalTier::VeryGood),
    ("American Political Science Review", "0003-0554", Discipline::Polisci, JournalTier::Top),
    ("American Journal of Political Science", "0092-5853", Discipline::Polisci, JournalTier::Top),
    ("Journal of Politics", "0022-3816", Discipline::Polisci, JournalTier::Top),
    ("Quarterly Journal of Political Science", "1554-0626", Discipline::Polisci, JournalTier::Excellent),
    ("British Journal of Political Science", "0007-1234", Discipline::Polisci, JournalTier::Excellent),
    ("World Politics", "0043-8871", Discipline::Polisci, JournalTier::Excellent),
    ("Comparative Political Studies", "0010-4140", Discipline::Polisci, JournalTier::Excellent),
    ("International Organization", "0020-8183", Discipline::Polisci, JournalTier::Excellent),
    ("Political Analysis", "1047-1987", Discipline::Polisci, JournalTier::Excellent),
    ("Annual Review of Political Science", "1094-2939", Discipline::Polisci, JournalTier::Excellent),
    ("Political Science Research and Methods", "2049-8470", Discipline::Polisci, JournalTier::Excellent),
    ("Journal of Conflict Resolution", "0022-0027", Discipline::Polisci, JournalTier::Excellent),
    ("International Security", "0162-2889", Discipline::Polisci, JournalTier::Excellent),
    ("International Studies Quarterly", "0020-8833", Discipline::Polisci, JournalTier::VeryGood),
    ("Comparative Politics", "0010-4159", Discipline::Polisci, JournalTier::VeryGood),
    ("Political Behavior", "0190-9320", Discipline::Polisci, JournalTier::VeryGood),
    ("Public Opinion Quarterly", "0033-362X", Discipline::Polisci, JournalTier::VeryGood),
    ("Legislative Studies Quarterly", "0362-9805", Discipline::Polisci, JournalTier::VeryGood),
    ("European Journal of Political Research", "0304-4130", Discipline::Polisci, JournalTier::VeryGood),
    ("Journal of Peace Research", "0022-3433", Discipline::Polisci, JournalTier::VeryGood),
    ("Political Science Quarterly", "0032-3195", Discipline::Polisci, JournalTier::VeryGood),
    ("Perspectives on Politics", "1537-5927", Discipline::Polisci, JournalTier::VeryGood),
];

pub(crate) fn taxonomy_data() -> TaxonomyData {
    TaxonomyData {
        version: BUILTIN_VERSION.to_string(),
        academic_levels: owned(ACADEMIC_LEVELS),
        fields: FIELDS.iter().map(ClusterDef::to_cluster).collect(),
        interests: INTERESTS.iter().map(ClusterDef::to_cluster).collect(),
        methods: METHODS.iter().map(ClusterDef::to_cluster).collect(),
        regions: REGIONS.iter().map(ClusterDef::to_cluster).collect(),
        seed_authors: SEED_AUTHORS
            .iter()
            .map(|(field, authors)| (field.to_string(), owned(authors)))
            .collect::<BTreeMap<_, _>>(),
        journals: JOURNALS
            .iter()
            .map(|(name, issn, discipline, tier)| Journal {
                name: name.to_string(),
                issn: issn.to_string(),
                discipline: *discipline,
                tier: *tier,
            })
            .collect(),
    }
}
