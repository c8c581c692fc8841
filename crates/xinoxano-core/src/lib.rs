//! Xinoxano Core - Synonym chains between words
//!
//! This crate reads a synonym lexicon, links every pair of words that
//! share a group, and enumerates simple paths of an exact length between
//! two words.

use std::path::Path;

pub mod error;
pub mod graph;
pub mod lexicon;
pub mod limits;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::SynonymGraph;
pub use lexicon::{parse_line, Lexicon, SynonymGroup};
pub use limits::{DEFAULT_INTERMEDIATE_NODES, DEFAULT_MAX_PATHS};
pub use traversal::{find_paths, PathFinder, PathQuery, PathSearch, SynonymPath, TraversalStats};

/// Load a lexicon file, build its graph and run one path query
pub fn find_synonym_paths(lexicon: impl AsRef<Path>, query: &PathQuery) -> Result<PathSearch> {
    let lexicon = Lexicon::load(lexicon)?;
    let graph = SynonymGraph::from_lexicon(&lexicon);
    PathFinder::search(&graph, query)
}
