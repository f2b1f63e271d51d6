//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::catalog::{ModifierCatalog, Scope};
use crate::cli::args::{KwexpandArgs, OutputFormat};
use crate::error::Result;
use crate::expansion::{ExpansionResult, MatchType};
use crate::request::IndustryCatalog;

/// Something a command can print in every output format.
pub trait CliOutput {
    /// JSON representation.
    fn to_json(&self) -> Result<Value>;

    /// Human-readable representation.
    fn to_human(&self) -> String;

    /// CSV header and rows.
    fn to_csv(&self) -> (Vec<&'static str>, Vec<Vec<String>>);
}

/// An expansion result, optionally restricted to one match type.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionOutput<'a> {
    pub result: &'a ExpansionResult,
    pub only: Option<MatchType>,
}

impl ExpansionOutput<'_> {
    fn match_types(&self) -> Vec<MatchType> {
        match self.only {
            Some(match_type) => vec![match_type],
            None => MatchType::ALL.to_vec(),
        }
    }
}

impl CliOutput for ExpansionOutput<'_> {
    fn to_json(&self) -> Result<Value> {
        if self.only.is_none() {
            return Ok(serde_json::to_value(self.result)?);
        }

        let mut object = serde_json::Map::new();
        for match_type in self.match_types() {
            object.insert(
                match_type.as_str().to_string(),
                json!(self.result.category(match_type)),
            );
        }
        object.insert("stats".to_string(), serde_json::to_value(self.result.stats())?);
        Ok(Value::Object(object))
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        for match_type in self.match_types() {
            let candidates = self.result.category(match_type);
            let title = category_title(match_type);
            let _ = writeln!(out, "{title} ({})", candidates.len());
            let _ = writeln!(out, "{}", "─".repeat(title.chars().count()));
            for candidate in candidates {
                let _ = writeln!(out, "  {candidate}");
            }
            out.push('\n');
        }

        let stats = self.result.stats();
        let _ = writeln!(
            out,
            "Total: {} (exact {}, phrase {}, broad modifier {}, long tail {})",
            stats.total(),
            stats.exact_count(),
            stats.phrase_count(),
            stats.broad_modifier_count(),
            stats.long_tail_count()
        );
        out
    }

    fn to_csv(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let rows = self
            .result
            .iter()
            .filter(|(match_type, _)| self.only.is_none_or(|only| only == *match_type))
            .map(|(match_type, candidate)| {
                vec![match_type.as_str().to_string(), candidate.to_string()]
            })
            .collect();
        (vec!["category", "keyword"], rows)
    }
}

fn category_title(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Exact => "Exact match",
        MatchType::Phrase => "Phrase match",
        MatchType::BroadModifier => "Broad match modifier",
        MatchType::LongTail => "Long tail",
    }
}

/// The modifier catalog, optionally restricted to one scope's locations.
#[derive(Debug, Clone, Copy)]
pub struct CatalogOutput<'a> {
    pub catalog: &'a ModifierCatalog,
    pub scope: Option<Scope>,
}

impl CatalogOutput<'_> {
    fn scopes(&self) -> Vec<Scope> {
        match self.scope {
            Some(scope) => vec![scope],
            None => Scope::ALL.to_vec(),
        }
    }

    fn modifier_lists(&self) -> [(&'static str, &[String]); 3] {
        [
            ("intent", self.catalog.intent_modifiers()),
            ("quality", self.catalog.quality_modifiers()),
            ("action", self.catalog.action_modifiers()),
        ]
    }
}

impl CliOutput for CatalogOutput<'_> {
    fn to_json(&self) -> Result<Value> {
        let mut locations = serde_json::Map::new();
        for scope in self.scopes() {
            locations.insert(
                scope.as_str().to_string(),
                json!(self.catalog.locations_for(scope)),
            );
        }

        let mut object = serde_json::Map::new();
        object.insert("locations".to_string(), Value::Object(locations));
        for (name, terms) in self.modifier_lists() {
            object.insert(name.to_string(), json!(terms));
        }
        Ok(Value::Object(object))
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Locations:");
        for scope in self.scopes() {
            let _ = writeln!(
                out,
                "  {scope}: {}",
                self.catalog.locations_for(scope).join(", ")
            );
        }
        for (name, terms) in self.modifier_lists() {
            let _ = writeln!(out, "{name}: {}", terms.join(", "));
        }
        out
    }

    fn to_csv(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let mut rows = Vec::new();
        for scope in self.scopes() {
            for term in self.catalog.locations_for(scope) {
                rows.push(vec![format!("location:{scope}"), term.clone()]);
            }
        }
        for (name, terms) in self.modifier_lists() {
            for term in terms {
                rows.push(vec![name.to_string(), term.clone()]);
            }
        }
        (vec!["list", "term"], rows)
    }
}

/// Industry keys with their default seeds.
#[derive(Debug, Clone, Copy)]
pub struct IndustriesOutput<'a>(pub &'a IndustryCatalog);

impl CliOutput for IndustriesOutput<'_> {
    fn to_json(&self) -> Result<Value> {
        let mut object = serde_json::Map::new();
        for (key, seeds) in self.0.iter() {
            object.insert(key.to_string(), json!(seeds));
        }
        Ok(Value::Object(object))
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        for (key, seeds) in self.0.iter() {
            let _ = writeln!(out, "{key}: {}", seeds.join(", "));
        }
        out
    }

    fn to_csv(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let rows = self
            .0
            .iter()
            .flat_map(|(key, seeds)| {
                seeds
                    .iter()
                    .map(move |seed| vec![key.to_string(), seed.clone()])
            })
            .collect();
        (vec!["industry", "seed"], rows)
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub requests: usize,
    pub expanded: usize,
    pub rejected: usize,
    pub total_candidates: usize,
    pub duration_ms: u64,
}

impl CliOutput for BatchSummary {
    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn to_human(&self) -> String {
        format!(
            "Requests: {}\nExpanded: {}\nRejected: {}\nCandidates: {}\nTime: {}ms\n",
            self.requests, self.expanded, self.rejected, self.total_candidates, self.duration_ms
        )
    }

    fn to_csv(&self) -> (Vec<&'static str>, Vec<Vec<String>>) {
        let rows = vec![
            vec!["requests".to_string(), self.requests.to_string()],
            vec!["expanded".to_string(), self.expanded.to_string()],
            vec!["rejected".to_string(), self.rejected.to_string()],
            vec!["total_candidates".to_string(), self.total_candidates.to_string()],
            vec!["duration_ms".to_string(), self.duration_ms.to_string()],
        ];
        (vec!["key", "value"], rows)
    }
}

/// Render a result in the requested format.
pub fn render<T: CliOutput>(result: &T, args: &KwexpandArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.to_human()),
        OutputFormat::Json => {
            let value = result.to_json()?;
            let mut rendered = if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Csv => {
            let (header, rows) = result.to_csv();
            let mut out = String::new();
            out.push_str(&header.join(","));
            out.push('\n');
            for row in rows {
                let line: Vec<String> = row.iter().map(|v| format_csv_value(v)).collect();
                out.push_str(&line.join(","));
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Print a result in the requested format.
pub fn output_result<T: CliOutput>(message: &str, result: &T, args: &KwexpandArgs) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", render(result, args)?);
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
pub fn format_csv_value(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expansion::KeywordExpander;
    use clap::Parser;

    fn args(format: &str) -> KwexpandArgs {
        KwexpandArgs::try_parse_from(["kwexpand", "--format", format, "industries"]).unwrap()
    }

    fn zar() -> ExpansionResult {
        KeywordExpander::default().expand(&["zár"], Scope::National)
    }

    #[test]
    fn test_csv_value_quoting() {
        assert_eq!(format_csv_value("zár"), "zár");
        assert_eq!(format_csv_value("[zár]"), "[zár]");
        assert_eq!(format_csv_value("\"zár\""), "\"\"\"zár\"\"\"");
        assert_eq!(format_csv_value("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_expansion_csv() {
        let result = zar();
        let output = ExpansionOutput {
            result: &result,
            only: None,
        };
        let rendered = render(&output, &args("csv")).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "category,keyword");
        assert_eq!(lines[1], "exact,[zár]");
        assert_eq!(lines[2], "phrase,\"\"\"zár\"\"\"");
        assert_eq!(lines[3], "broadModifier,+zár");
        assert_eq!(lines.len(), 1 + result.stats().total());
    }

    #[test]
    fn test_expansion_json_matches_result_shape() {
        let result = zar();
        let output = ExpansionOutput {
            result: &result,
            only: None,
        };
        let value: Value = serde_json::from_str(&render(&output, &args("json")).unwrap()).unwrap();
        assert_eq!(value["exact"], json!(["[zár]"]));
        assert_eq!(value["stats"]["total"], result.stats().total());
    }

    #[test]
    fn test_only_restricts_categories() {
        let result = zar();
        let output = ExpansionOutput {
            result: &result,
            only: Some(MatchType::BroadModifier),
        };

        let value = output.to_json().unwrap();
        assert_eq!(value["broadModifier"], json!(["+zár"]));
        assert!(value.get("exact").is_none());
        assert!(value.get("stats").is_some());

        let (_, rows) = output.to_csv();
        assert_eq!(rows, vec![vec!["broadModifier".to_string(), "+zár".to_string()]]);

        let human = output.to_human();
        assert!(human.contains("Broad match modifier (1)"));
        assert!(!human.contains("Long tail ("));
    }

    #[test]
    fn test_catalog_output_single_scope() {
        let catalog = ModifierCatalog::builtin();
        let output = CatalogOutput {
            catalog: &catalog,
            scope: Some(Scope::Regional),
        };
        let value = output.to_json().unwrap();
        assert!(value["locations"].get("regional").is_some());
        assert!(value["locations"].get("national").is_none());
        assert_eq!(value["intent"][0], catalog.intent_modifiers()[0].as_str());
    }

    #[test]
    fn test_industries_human() {
        let industries = IndustryCatalog::builtin();
        let human = IndustriesOutput(&industries).to_human();
        assert!(human.lines().next().unwrap().starts_with("plumbing: "));
    }

    #[test]
    fn test_batch_summary_csv() {
        let summary = BatchSummary {
            requests: 3,
            expanded: 2,
            rejected: 1,
            total_candidates: 120,
            duration_ms: 4,
        };
        let rendered = render(&summary, &args("csv")).unwrap();
        assert!(rendered.starts_with("key,value\nrequests,3\n"));
    }
}
