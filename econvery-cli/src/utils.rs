use econvery::EconveryError;
use econvery::prelude::*;
use econvery::taxonomy::Discipline;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> econvery::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).map_err(|e| {
        EconveryError::Other(format!("Failed to read '{}': {}", path.display(), e))
    })
}

pub fn read_profile(path: &Path) -> econvery::Result<UserProfile> {
    parse_profile(&read_input(path)?)
}

pub fn parse_profile(text: &str) -> econvery::Result<UserProfile> {
    Ok(serde_json::from_str(text)?)
}

pub fn read_papers(path: &Path) -> econvery::Result<Vec<PaperRecord>> {
    parse_papers(&read_input(path)?)
}

/// Accepts a JSON array of records, an API page with a `results` array, or a
/// single record.
pub fn parse_papers(text: &str) -> econvery::Result<Vec<PaperRecord>> {
    let value: Value = serde_json::from_str(text)?;
    let papers = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(mut object) => match object.remove("results") {
            Some(results @ Value::Array(_)) => serde_json::from_value(results)?,
            Some(_) => {
                return Err(EconveryError::Other(
                    "\"results\" must be an array of paper records".to_string(),
                ));
            }
            None => vec![serde_json::from_value(Value::Object(object))?],
        },
        _ => {
            return Err(EconveryError::Other(
                "Expected a paper record or an array of paper records".to_string(),
            ));
        }
    };
    Ok(papers)
}

pub fn read_paper(path: &Path) -> econvery::Result<PaperRecord> {
    Ok(serde_json::from_str(&read_input(path)?)?)
}

pub fn parse_sort_order(sort: &str) -> econvery::Result<SortOrder> {
    sort.parse().map_err(EconveryError::Other)
}

pub fn parse_preset(name: &str) -> econvery::Result<ScoringConfig> {
    ScoringConfig::preset(name).ok_or_else(|| {
        EconveryError::Other(format!(
            "Unknown scoring preset '{}'. Use balanced, method_focused or topic_focused",
            name
        ))
    })
}

pub fn parse_tier(tier: u8) -> econvery::Result<JournalTier> {
    match tier {
        1 => Ok(JournalTier::Top),
        2 => Ok(JournalTier::Excellent),
        3 => Ok(JournalTier::VeryGood),
        _ => Err(EconveryError::Other(format!(
            "Invalid journal tier: {} (expected 1, 2 or 3)",
            tier
        ))),
    }
}

pub fn parse_discipline(discipline: &str) -> econvery::Result<Discipline> {
    match discipline.to_lowercase().as_str() {
        "economics" | "econ" => Ok(Discipline::Economics),
        "polisci" | "political science" | "politics" => Ok(Discipline::Polisci),
        _ => Err(EconveryError::Other(format!(
            "Invalid discipline: {} (expected economics or polisci)",
            discipline
        ))),
    }
}

/// Apply command-line overrides on top of the configured ranking options.
pub fn ranking_overrides(
    base: &RankingConfig,
    limit: Option<usize>,
    min_score: Option<f64>,
    sort: Option<&str>,
) -> econvery::Result<RankingConfig> {
    let mut ranking = base.clone();
    if let Some(limit) = limit {
        ranking.limit = Some(limit);
    }
    if let Some(min_score) = min_score {
        ranking.min_score = min_score;
    }
    if let Some(sort) = sort {
        ranking.sort_by = parse_sort_order(sort)?;
    }
    ranking.validate().map_err(EconveryError::Configuration)?;
    Ok(ranking)
}
