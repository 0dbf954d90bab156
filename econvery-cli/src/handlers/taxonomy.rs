//! Taxonomy listing handlers

use crate::args::*;
use crate::context::CliContext;
use crate::output::*;
use crate::utils::*;
use econvery::prelude::*;
use econvery::taxonomy::Journal;
use serde_json::json;

pub fn handle_options_command(
    args: OptionsArgs,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    let options = ctx.engine.taxonomy().options();

    if output_format == "json" {
        match args.category.as_deref() {
            None => print_json(options)?,
            Some(category) => {
                let sections = option_sections(options, Some(category))?;
                print_json(&sections[0].1)?;
            }
        }
    } else {
        print_options(&option_sections(options, args.category.as_deref())?);
    }
    Ok(())
}

pub fn handle_authors_command(
    args: AuthorsArgs,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    let authors = ctx.engine.taxonomy().suggested_authors(&args.field);

    if output_format == "json" {
        print_json(&json!({
            "field": args.field,
            "authors": authors,
        }))?;
    } else {
        print_authors(&args.field, authors);
    }
    Ok(())
}

pub fn handle_journals_command(
    args: JournalsArgs,
    ctx: &CliContext,
    output_format: &str,
) -> econvery::Result<()> {
    let journals = select_journals(&args, ctx.engine.taxonomy())?;

    if output_format == "json" {
        print_json(&journals)?;
    } else {
        print_journals(&journals);
    }
    Ok(())
}

/// Journals matching the tier and discipline filters, best tier first.
pub fn select_journals<'a>(
    args: &JournalsArgs,
    taxonomy: &'a TaxonomyStore,
) -> econvery::Result<Vec<&'a Journal>> {
    let tier = args.tier.map(parse_tier).transpose()?;
    let discipline = args.discipline.as_deref().map(parse_discipline).transpose()?;

    let mut journals: Vec<&Journal> = taxonomy
        .journals()
        .iter()
        .filter(|journal| tier.is_none_or(|tier| journal.tier == tier))
        .filter(|journal| discipline.is_none_or(|discipline| journal.discipline == discipline))
        .collect();
    journals.sort_by_key(|journal| journal.tier);
    Ok(journals)
}
