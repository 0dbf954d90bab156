use colored::*;
use econvery::EconveryError;
use econvery::models::ProfileError;
use econvery::prelude::*;
use econvery::taxonomy::{Discipline, Journal, ProfileOptions};
use serde::Serialize;
use serde_json::{Value, json};

/// Longest title shown in the ranked table before truncation.
const TITLE_WIDTH: usize = 60;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn essential() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn moderate() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn tangential() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }
}

/// Structured form of an error: `(code, message, details)`.
pub fn error_code(error: &EconveryError) -> (&'static str, String, Option<Value>) {
    match error {
        EconveryError::Taxonomy(msg) => ("TAXONOMY_ERROR", msg.clone(), None),
        EconveryError::Configuration(msg) => ("CONFIGURATION_ERROR", msg.clone(), None),
        EconveryError::Profile(e) => {
            let details = match e {
                ProfileError::TooManyInterests { count, max }
                | ProfileError::TooManyMethods { count, max } => {
                    Some(json!({ "count": count, "max": max }))
                }
                ProfileError::InvalidLean(lean) => Some(json!({
                    "value": lean,
                    "hint": "Use a number between 0 (qualitative) and 1 (quantitative)"
                })),
            };
            ("PROFILE_ERROR", e.to_string(), details)
        }
        EconveryError::Logging(e) => ("LOGGING_ERROR", e.to_string(), None),
        EconveryError::Scoring(msg) => ("SCORING_ERROR", msg.clone(), None),
        EconveryError::Io(e) => ("IO_ERROR", e.to_string(), None),
        EconveryError::Json(e) => (
            "JSON_ERROR",
            e.to_string(),
            Some(json!({
                "line": e.line(),
                "column": e.column()
            })),
        ),
        EconveryError::Other(msg) => ("OTHER_ERROR", msg.clone(), None),
    }
}

pub fn error_response(error: &EconveryError) -> Value {
    let (code, message, details) = error_code(error);
    let mut response = json!({
        "error": true,
        "code": code,
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    if let Some(details) = details {
        response["details"] = details;
    }
    response
}

/// Report an error on stderr, as JSON when that output format is selected.
pub fn output_error_json(error: &EconveryError, output_format: &str) {
    if output_format == "json" {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response(error))
                .unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn print_json<T: Serialize>(value: &T) -> econvery::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

pub fn format_level(level: RelevanceLevel) -> ColoredString {
    match level {
        RelevanceLevel::Essential => "Essential".color(CliColors::essential()).bold(),
        RelevanceLevel::Moderate => "Moderate".color(CliColors::moderate()),
        RelevanceLevel::Tangential => "Tangential".color(CliColors::tangential()),
        RelevanceLevel::Weak => "Weak".color(CliColors::muted()).dimmed(),
    }
}

pub fn format_score(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    match RelevanceLevel::from_score(score) {
        RelevanceLevel::Essential => text.color(CliColors::essential()).bold(),
        RelevanceLevel::Moderate => text.color(CliColors::moderate()),
        RelevanceLevel::Tangential => text.color(CliColors::tangential()),
        RelevanceLevel::Weak => text.color(CliColors::muted()),
    }
}

pub fn format_discipline(discipline: Discipline) -> &'static str {
    match discipline {
        Discipline::Economics => "economics",
        Discipline::Polisci => "polisci",
    }
}

/// Shorten `text` to at most `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

pub fn print_ranked_list(papers: &[ScoredPaper], details: bool) {
    if papers.is_empty() {
        println!("{}", format_info("No papers matched the profile."));
        return;
    }

    println!(
        "{}",
        format_info(&format!("Ranked {} papers:", papers.len()))
    );
    println!();

    println!(
        "{:<4} {:<6} {:<11} {:<62} {}",
        "#".color(CliColors::muted()).bold(),
        "Score".color(CliColors::muted()).bold(),
        "Level".color(CliColors::muted()).bold(),
        "Title".color(CliColors::muted()).bold(),
        "Citations".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(92).color(CliColors::muted()));

    for (position, scored) in papers.iter().enumerate() {
        println!(
            "{:<4} {:<6} {:<11} {:<62} {}",
            (position + 1).to_string().color(CliColors::muted()),
            format_score(scored.score()),
            format_level(scored.level()),
            truncate(scored.paper.label(), TITLE_WIDTH).color(CliColors::primary()),
            scored.paper.cited_by_count
        );
        println!(
            "     {}",
            scored.result.explanation.color(CliColors::muted()).italic()
        );
        if details {
            print_components(&scored.result, "     ");
        }
    }
}

fn print_components(result: &MatchResult, indent: &str) {
    println!(
        "{}{} field {:.2}  interests {:.2}  methods {:.2}  region {:.2}  concepts {:.2}",
        indent,
        "▸".color(CliColors::accent()),
        result.field_score,
        result.interest_score,
        result.method_score,
        result.region_score,
        result.concept_score
    );
    println!(
        "{}{} raw {:.3}  quality bonus {:.3}{}",
        indent,
        "▸".color(CliColors::accent()),
        result.raw_score,
        result.quality_bonus,
        if result.author_match {
            "  followed author"
        } else {
            ""
        }
    );
}

pub fn print_match_result(paper: &PaperRecord, result: &MatchResult) {
    println!(
        "{}",
        "━━━ Relevance ━━━".color(CliColors::accent()).bold()
    );
    println!(
        "{}: {}",
        "Paper".color(CliColors::muted()),
        paper.label().color(CliColors::primary()).bold()
    );
    if let Some(journal) = &paper.journal {
        println!("{}: {}", "Journal".color(CliColors::muted()), journal);
    }
    println!(
        "{}: {} ({})",
        "Score".color(CliColors::muted()),
        format_score(result.relevance_score),
        format_level(result.relevance_level)
    );
    println!(
        "{}: {}",
        "Why".color(CliColors::muted()),
        result.explanation
    );
    if !result.matched_interests.is_empty() {
        println!(
            "{}: {}",
            "Interests".color(CliColors::muted()),
            result.matched_interests.join(", ")
        );
    }
    if !result.matched_methods.is_empty() {
        println!(
            "{}: {}",
            "Methods".color(CliColors::muted()),
            result.matched_methods.join(", ")
        );
    }
    print_components(result, "");
}

pub fn print_summary(summary: &RankingSummary) {
    println!();
    println!("{}", "━━━ Summary ━━━".color(CliColors::accent()).bold());
    println!("{}: {}", "Papers".color(CliColors::muted()), summary.total);
    for (level, count) in [
        (RelevanceLevel::Essential, summary.essential),
        (RelevanceLevel::Moderate, summary.moderate),
        (RelevanceLevel::Tangential, summary.tangential),
        (RelevanceLevel::Weak, summary.weak),
    ] {
        println!("  {:<20} {}", format_level(level), count);
    }
    println!(
        "{}: {:.2}",
        "Average score".color(CliColors::muted()),
        summary.average_score
    );
    if let Some(top) = summary.top_score {
        println!("{}: {}", "Top score".color(CliColors::muted()), format_score(top));
    }
}

pub fn print_profile(profile: &UserProfile) {
    println!("{}", format_success("Profile is valid"));
    println!();
    println!("{}", profile.to_text());
}

pub fn print_options(sections: &[(&str, &[String])]) {
    for (position, (title, values)) in sections.iter().enumerate() {
        if position > 0 {
            println!();
        }
        println!("{}", title.color(CliColors::accent()).bold());
        for value in values.iter() {
            println!("  • {}", value);
        }
    }
}

/// Sections of the options listing, optionally limited to one category.
pub fn option_sections<'a>(
    options: &'a ProfileOptions,
    category: Option<&str>,
) -> econvery::Result<Vec<(&'static str, &'a [String])>> {
    let all = [
        ("levels", "Academic levels", options.academic_levels.as_slice()),
        ("fields", "Primary fields", options.primary_fields.as_slice()),
        ("interests", "Research interests", options.interests.as_slice()),
        ("methods", "Methods", options.methods.as_slice()),
        ("regions", "Regions", options.regions.as_slice()),
    ];

    match category {
        None => Ok(all.iter().map(|(_, title, values)| (*title, *values)).collect()),
        Some(name) => {
            let wanted = name.to_lowercase();
            all.iter()
                .find(|(key, _, _)| *key == wanted || key.trim_end_matches('s') == wanted)
                .map(|(_, title, values)| vec![(*title, *values)])
                .ok_or_else(|| {
                    EconveryError::Other(format!(
                        "Unknown option category '{}'. Use levels, fields, interests, methods or regions",
                        name
                    ))
                })
        }
    }
}

pub fn print_authors(field: &str, authors: &[String]) {
    if authors.is_empty() {
        println!(
            "{}",
            format_warning(&format!("No suggested authors for '{}'", field))
        );
        return;
    }

    println!(
        "{}",
        format_info(&format!("Suggested authors for {}:", field))
    );
    for author in authors {
        println!("  • {}", author);
    }
}

pub fn print_journals(journals: &[&Journal]) {
    if journals.is_empty() {
        println!("{}", format_info("No journals found."));
        return;
    }

    println!(
        "{:<6} {:<10} {:<11} {}",
        "Tier".color(CliColors::muted()).bold(),
        "ISSN".color(CliColors::muted()).bold(),
        "Discipline".color(CliColors::muted()).bold(),
        "Journal".color(CliColors::muted()).bold()
    );
    println!("{}", "─".repeat(70).color(CliColors::muted()));

    for journal in journals {
        println!(
            "{:<6} {:<10} {:<11} {}",
            journal.tier.rank().to_string().color(CliColors::accent()),
            journal.issn.color(CliColors::muted()),
            format_discipline(journal.discipline),
            journal.name.color(CliColors::primary())
        );
    }
}
