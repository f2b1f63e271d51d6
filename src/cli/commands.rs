//! Command implementations for the kwexpand CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};

use crate::catalog::{DEFAULT_CATALOG, ModifierCatalog, Scope};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::expansion::{ExpansionResult, KeywordExpander};
use crate::request::{DEFAULT_INDUSTRIES, ExpansionRequest};

/// Execute a CLI command.
pub fn execute_command(args: KwexpandArgs) -> Result<()> {
    match &args.command {
        Command::Expand(expand_args) => expand(expand_args, &args),
        Command::Batch(batch_args) => batch(batch_args, &args),
        Command::Catalog(catalog_args) => show_catalog(catalog_args, &args),
        Command::Industries => output_result(
            "Industries",
            &IndustriesOutput(&DEFAULT_INDUSTRIES),
            &args,
        ),
    }
}

/// Load the catalog named on the command line, or the built-in one.
fn load_catalog(cli_args: &KwexpandArgs) -> Result<Arc<ModifierCatalog>> {
    match &cli_args.catalog {
        Some(path) => {
            info!("loading modifier catalog from {}", path.display());
            Ok(Arc::new(ModifierCatalog::load_from_file(path)?))
        }
        None => Ok(Arc::clone(&DEFAULT_CATALOG)),
    }
}

/// Expand seeds given on the command line.
fn expand(args: &ExpandArgs, cli_args: &KwexpandArgs) -> Result<()> {
    let mut request = ExpansionRequest::new(args.seeds.clone(), args.scope.clone());
    if let Some(industry) = &args.industry {
        request = request.with_industry(industry.clone());
    }
    let resolved = request.resolve(&DEFAULT_INDUSTRIES)?;

    let expander = KeywordExpander::new(load_catalog(cli_args)?);
    let result = expander.expand(&resolved.seeds, resolved.scope);

    output_result(
        &format!(
            "Expanded {} seeds for scope {}",
            resolved.seeds.len(),
            resolved.scope
        ),
        &ExpansionOutput {
            result: &result,
            only: args.only.map(Into::into),
        },
        cli_args,
    )
}

/// Expand every request of a JSON-lines file.
fn batch(args: &BatchArgs, cli_args: &KwexpandArgs) -> Result<()> {
    let start_time = Instant::now();
    let expander = KeywordExpander::new(load_catalog(cli_args)?);

    let reader = BufReader::new(File::open(&args.input)?);
    let (requests, rejected) = read_requests(reader)?;
    for (line_num, error) in &rejected {
        warn!("skipping request on line {line_num}: {error}");
        if cli_args.verbosity() > 0 {
            eprintln!("Skipping request on line {line_num}: {error}");
        }
    }

    let results = expander.expand_batch(&requests);

    match &args.output {
        Some(path) => write_results(BufWriter::new(File::create(path)?), &results)?,
        None => write_results(io::stdout().lock(), &results)?,
    }

    let summary = BatchSummary {
        requests: requests.len() + rejected.len(),
        expanded: results.len(),
        rejected: rejected.len(),
        total_candidates: results.iter().map(|r| r.stats().total()).sum(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    info!(
        "batch finished: {} expanded, {} rejected, {} candidates in {}ms",
        summary.expanded, summary.rejected, summary.total_candidates, summary.duration_ms
    );

    // stdout already carries the result stream
    if args.output.is_some() {
        output_result("Batch finished", &summary, cli_args)?;
    }

    Ok(())
}

/// Parse and validate requests, one JSON object per non-blank line.
///
/// Returns the valid requests and the `(line number, error)` pairs of the
/// rejected ones. Line numbers are 1-based.
pub fn read_requests<R: BufRead>(
    reader: R,
) -> Result<(Vec<(Vec<String>, Scope)>, Vec<(usize, String)>)> {
    let mut requests = Vec::new();
    let mut rejected = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let resolved = serde_json::from_str::<ExpansionRequest>(&line)
            .map_err(Into::into)
            .and_then(|request| request.resolve(&DEFAULT_INDUSTRIES));

        match resolved {
            Ok(resolved) => requests.push((resolved.seeds, resolved.scope)),
            Err(e) => rejected.push((index + 1, e.to_string())),
        }
    }

    Ok((requests, rejected))
}

/// Write results as JSON lines.
pub fn write_results<W: Write>(mut writer: W, results: &[ExpansionResult]) -> Result<()> {
    for result in results {
        serde_json::to_writer(&mut writer, result)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Show the modifier catalog.
fn show_catalog(args: &CatalogArgs, cli_args: &KwexpandArgs) -> Result<()> {
    let catalog = load_catalog(cli_args)?;
    let scope = args.scope.as_deref().map(str::parse::<Scope>).transpose()?;

    output_result(
        "Modifier catalog",
        &CatalogOutput {
            catalog: &catalog,
            scope,
        },
        cli_args,
    )
}
