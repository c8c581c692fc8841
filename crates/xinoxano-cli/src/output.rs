//! Output formatting utilities

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use xinoxano_core::{Error, PathQuery, PathSearch};

use crate::query::{FailureKind, QueryReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where rendered output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    #[serde(flatten)]
    query: &'a PathQuery,
    #[serde(flatten)]
    search: &'a PathSearch,
}

#[derive(Serialize)]
struct JsonError {
    error: FailureKind,
    message: String,
}

/// Render a query report
pub fn render(report: &QueryReport, format: OutputFormat) -> (Stream, String) {
    let stream = match report.failure() {
        Some(FailureKind::Unexpected) => Stream::Stderr,
        _ => Stream::Stdout,
    };

    let text = match (&report.outcome, format) {
        (Ok(search), OutputFormat::Text) => render_paths(&report.query, search),
        (Ok(search), OutputFormat::Json) => to_json(&JsonResult {
            query: &report.query,
            search,
        }),
        (Err(err), OutputFormat::Text) => failure_message(report, err),
        (Err(err), OutputFormat::Json) => to_json(&JsonError {
            error: FailureKind::of(err),
            message: failure_message(report, err),
        }),
    };

    (stream, text)
}

fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

fn render_paths(query: &PathQuery, search: &PathSearch) -> String {
    let mut out = String::new();

    if search.paths.is_empty() {
        let _ = write!(
            out,
            "No path from \"{}\" to \"{}\" with {} intermediate nodes.",
            query.source, query.target, query.n_intermediate
        );
    } else {
        let _ = write!(
            out,
            "Paths from \"{}\" to \"{}\" with {} intermediate nodes:",
            query.source, query.target, query.n_intermediate
        );
        for (i, path) in search.paths.iter().enumerate() {
            let _ = write!(out, "\n  {}. {}", i + 1, path);
        }
    }

    if search.truncated {
        let _ = write!(out, "\n  (showing only the first {} paths)", query.max_paths);
    }
    if search.stats.budget_exhausted {
        let _ = write!(
            out,
            "\n  (search stopped after visiting {} words; results may be incomplete)",
            search.stats.nodes_visited
        );
    }

    out
}

fn failure_message(report: &QueryReport, err: &Error) -> String {
    match err {
        Error::ResourceNotFound { .. } => format!(
            "Error: could not read lexicon file '{}'",
            report.lexicon.display()
        ),
        Error::NodeNotFound(word) => format!("Error: word \"{}\" not found in lexicon", word),
        Error::NoPathExists { from, to } => format!("No path between \"{}\" and \"{}\".", from, to),
        other => format!("Unexpected error: {}", other),
    }
}
