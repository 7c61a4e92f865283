use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{debug, info_span};

use cfgm_cli::input::read_declarations;
use cfgm_cli::report::{apply_table_style, header_cell, print_results, render_json, render_text};
use cfgm_match::{MatchOutcome, VocabularyMatcher};
use cfgm_model::{AttributeGroup, ConventionVersion, ValidationResult};
use cfgm_standards::RuleRegistry;
use cfgm_validate::GridMappingValidator;

use crate::cli::{CheckArgs, MappingsArgs, ReportFormatArg, VocabArgs};

/// Validate every declaration in the input file and print the report.
pub fn run_check(args: &CheckArgs) -> Result<Vec<ValidationResult>> {
    let span = info_span!("check", file = %args.file.display());
    let _guard = span.enter();

    let inputs = read_declarations(&args.file)?;
    debug!(declarations = inputs.len(), "Loaded declarations");

    let registry = RuleRegistry::load().context("load CF grid mapping tables")?;
    let results = GridMappingValidator::new(&registry).validate_many(&args.convention, &inputs);

    match args.format {
        ReportFormatArg::Table => print_results(&results),
        ReportFormatArg::Text => println!("{}", render_text(&results)),
        ReportFormatArg::Json => println!("{}", render_json(&results).context("encode report")?),
    }
    Ok(results)
}

/// List grid mappings with their required and optional attributes.
pub fn run_mappings(args: &MappingsArgs) -> Result<()> {
    let version = parse_convention(&args.convention)?;
    let registry = RuleRegistry::load().context("load CF grid mapping tables")?;
    let rule_set = registry
        .rule_set(version)
        .with_context(|| format!("no tables for {version}"))?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grid mapping"),
        header_cell("Required"),
        header_cell("Optional"),
        header_cell("Coordinates"),
    ]);
    apply_table_style(&mut table);
    for rule in rule_set.rules() {
        let required: Vec<String> = rule
            .required
            .iter()
            .map(|group| match group {
                AttributeGroup::AllOf(names) => names.join("\n"),
                AttributeGroup::ExactlyOneOf(names) => format!("one of: {}", names.join(" | ")),
            })
            .collect();
        table.add_row(vec![
            Cell::new(&rule.name),
            Cell::new(required.join("\n")),
            Cell::new(rule.optional.join("\n")),
            Cell::new(rule.coordinate_standard_names.join("\n")),
        ]);
    }
    println!("{version}");
    println!("{table}");
    Ok(())
}

/// Look up a vocabulary value. Returns whether it matched exactly.
pub fn run_vocab(args: &VocabArgs) -> Result<bool> {
    let version = parse_convention(&args.convention)?;
    let registry = RuleRegistry::load().context("load CF grid mapping tables")?;
    let vocabulary = registry
        .vocabulary(version, args.kind)
        .with_context(|| format!("no tables for {version}"))?;
    if vocabulary.is_empty() {
        println!("{version} publishes no {} names", args.kind);
        return Ok(false);
    }

    let matcher = VocabularyMatcher::default();
    debug!(
        threshold = matcher.config().threshold,
        entries = vocabulary.len(),
        "Matching vocabulary value"
    );
    match matcher.match_value(&args.value, vocabulary) {
        MatchOutcome::Exact => {
            println!("'{}' is a {} name", args.value, args.kind);
            Ok(true)
        }
        MatchOutcome::Suggest(candidates) => {
            println!("'{}' is not a {} name. Did you mean:", args.value, args.kind);
            for candidate in candidates {
                println!(
                    "  {} ({:.0}% similar)",
                    candidate.value,
                    candidate.similarity * 100.0
                );
            }
            Ok(false)
        }
        MatchOutcome::NoMatch => {
            println!("'{}' is not a {} name", args.value, args.kind);
            Ok(false)
        }
    }
}

fn parse_convention(value: &str) -> Result<ConventionVersion> {
    ConventionVersion::parse(value).with_context(|| format!("convention '{value}'"))
}
