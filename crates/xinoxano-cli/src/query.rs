//! Query frontend: runs the pipeline and classifies the outcome

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Serialize;
use xinoxano_core::{find_synonym_paths, Error, PathQuery, PathSearch};

/// Failure classes shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ResourceNotFound,
    NodeNotFound,
    NoPathExists,
    Unexpected,
}

impl FailureKind {
    pub fn of(err: &Error) -> Self {
        match err {
            Error::ResourceNotFound { .. } => Self::ResourceNotFound,
            Error::NodeNotFound(_) => Self::NodeNotFound,
            Error::NoPathExists { .. } => Self::NoPathExists,
            Error::Encoding { .. } | Error::Validation(_) => Self::Unexpected,
        }
    }
}

/// Everything needed to render one query
#[derive(Debug)]
pub struct QueryReport {
    pub lexicon: PathBuf,
    pub query: PathQuery,
    pub outcome: Result<PathSearch, Error>,
}

impl QueryReport {
    pub fn failure(&self) -> Option<FailureKind> {
        self.outcome.as_ref().err().map(FailureKind::of)
    }

    /// Missing words, a missing lexicon and unconnected words are all
    /// ordinary answers; only unexpected failures exit non-zero.
    pub fn exit_code(&self) -> ExitCode {
        match self.failure() {
            Some(FailureKind::Unexpected) => ExitCode::from(1),
            _ => ExitCode::SUCCESS,
        }
    }
}

pub fn execute(lexicon: &Path, query: PathQuery) -> QueryReport {
    tracing::info!(
        "Finding paths from {} to {} with {} intermediate words in {:?}",
        query.source,
        query.target,
        query.n_intermediate,
        lexicon
    );

    let outcome = find_synonym_paths(lexicon, &query);
    if let Err(ref err) = outcome {
        tracing::info!("Query failed: {}", err);
    }

    QueryReport {
        lexicon: lexicon.to_path_buf(),
        query,
        outcome,
    }
}
