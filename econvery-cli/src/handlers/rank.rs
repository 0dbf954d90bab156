//! Ranking, scoring and profile command handlers

use crate::args::*;
use crate::context::CliContext;
use crate::output::*;
use crate::utils::*;
use econvery::EconveryError;
use econvery::prelude::*;
use econvery::scoring::ResolvedProfile;
use serde_json::json;
use std::path::Path;

pub fn handle_rank_command(
    args: RankArgs,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    let (ranked, engine) = rank_papers(&args, ctx)?;

    if output_format == "json" {
        if args.summary {
            print_json(&json!({
                "papers": ranked,
                "summary": engine.summary(&ranked),
            }))?;
        } else {
            print_json(&ranked)?;
        }
    } else {
        print_ranked_list(&ranked, args.details);
        if args.summary {
            print_summary(&engine.summary(&ranked));
        }
    }
    Ok(())
}

/// Read the inputs named by `args` and rank them with the command's overrides.
pub fn rank_papers(
    args: &RankArgs,
    ctx: &CliContext,
) -> econvery::Result<(Vec<ScoredPaper>, RelevanceEngine)> {
    ensure_single_stdin(&args.profile, &args.papers)?;

    let scoring = args.preset.as_deref().map(parse_preset).transpose()?;
    let ranking = ranking_overrides(
        ctx.engine.ranking_config(),
        args.limit,
        args.min_score,
        args.sort.as_deref(),
    )?;
    let engine = ctx.engine_with(scoring, ranking)?;

    let profile = read_profile(&args.profile)?;
    let papers = read_papers(&args.papers)?;
    tracing::debug!(papers = papers.len(), "Loaded papers");

    let ranked = engine.rank(&profile, papers);
    Ok((ranked, engine))
}

pub fn handle_score_command(
    args: ScoreArgs,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    let scored = score_paper(&args, ctx)?;

    if output_format == "json" {
        print_json(&scored)?;
    } else {
        print_match_result(&scored.paper, &scored.result);
    }
    Ok(())
}

pub fn score_paper(args: &ScoreArgs, ctx: &CliContext) -> econvery::Result<ScoredPaper> {
    ensure_single_stdin(&args.profile, &args.paper)?;

    let scoring = args.preset.as_deref().map(parse_preset).transpose()?;
    let engine = ctx.engine_with(scoring, ctx.engine.ranking_config().clone())?;

    let profile = read_profile(&args.profile)?;
    let paper = engine.prepare(read_paper(&args.paper)?);
    let result = engine.score(&profile, &paper);
    Ok(ScoredPaper::new(paper, result))
}

pub fn handle_profile_command(
    args: ProfileArgs,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    let profile = read_profile(&args.profile)?;
    let unknown = unknown_labels(ctx.engine.taxonomy(), &profile);

    if output_format == "json" {
        let unknown: Vec<_> = unknown
            .iter()
            .map(|(category, label)| json!({ "category": category.to_string(), "label": label }))
            .collect();
        print_json(&json!({
            "profile": profile,
            "text": profile.to_text(),
            "unknown_labels": unknown,
        }))?;
    } else {
        print_profile(&profile);
        if !unknown.is_empty() {
            println!();
            for (category, label) in &unknown {
                println!(
                    "{}",
                    format_warning(&format!(
                        "Unknown {} '{}' will not contribute to scores",
                        category, label
                    ))
                );
            }
        }
    }
    Ok(())
}

/// Profile labels the taxonomy has no entry for.
pub fn unknown_labels(
    taxonomy: &TaxonomyStore,
    profile: &UserProfile,
) -> Vec<(TaxonomyCategory, String)> {
    ResolvedProfile::resolve(taxonomy, profile)
        .unresolved()
        .into_iter()
        .map(|(category, label)| (category, label.to_string()))
        .collect()
}

fn ensure_single_stdin(first: &Path, second: &Path) -> econvery::Result<()> {
    if first.as_os_str() == "-" && second.as_os_str() == "-" {
        return Err(EconveryError::Other(
            "Only one input can be read from stdin".to_string(),
        ));
    }
    Ok(())
}
