//! Fixed-length path search between two words

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::SynonymGraph;
use crate::limits::{self, DEFAULT_INTERMEDIATE_NODES, DEFAULT_MAX_PATHS};

/// Path query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    /// Source word
    pub source: String,

    /// Target word
    pub target: String,

    /// Words strictly between source and target
    #[serde(default = "default_intermediate")]
    pub n_intermediate: usize,

    /// Maximum paths to return
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,

    /// Stop after expanding this many nodes (None = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_budget: Option<usize>,
}

fn default_intermediate() -> usize {
    DEFAULT_INTERMEDIATE_NODES
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}

impl PathQuery {
    /// Create a query between two words with the default settings
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            n_intermediate: default_intermediate(),
            max_paths: default_max_paths(),
            visit_budget: None,
        }
    }

    /// Set the number of intermediate words
    pub fn with_intermediate(mut self, n: usize) -> Self {
        self.n_intermediate = n;
        self
    }

    /// Set the maximum number of paths to return
    pub fn with_max_paths(mut self, max: usize) -> Self {
        self.max_paths = max;
        self
    }

    /// Bound the number of node expansions
    pub fn with_visit_budget(mut self, budget: Option<usize>) -> Self {
        self.visit_budget = budget;
        self
    }

    /// Node count of every returned path
    pub fn path_len(&self) -> usize {
        self.n_intermediate.saturating_add(2)
    }

    pub fn validate(&self) -> Result<()> {
        limits::validate_max_paths(self.max_paths)?;
        limits::validate_visit_budget(self.visit_budget)?;
        Ok(())
    }
}

/// A simple path through the synonym graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymPath {
    /// Words from source to target
    pub nodes: Vec<String>,
}

impl SynonymPath {
    /// Number of edges
    pub fn length(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Words strictly between the endpoints
    pub fn intermediate(&self) -> &[String] {
        match self.nodes.len() {
            0..=2 => &[],
            n => &self.nodes[1..n - 1],
        }
    }
}

impl std::fmt::Display for SynonymPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub budget_exhausted: bool,
}

/// Result of a path search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSearch {
    /// Paths in discovery order
    pub paths: Vec<SynonymPath>,

    /// More than `max_paths` qualifying paths exist
    pub truncated: bool,

    pub stats: TraversalStats,
}

/// Fixed-length path finder
pub struct PathFinder;

impl PathFinder {
    /// Enumerate simple paths with exactly `n_intermediate` interior words
    ///
    /// Fails with [`Error::NodeNotFound`] for a missing source (checked
    /// first) or target, and with [`Error::NoPathExists`] when the two
    /// words sit in different components. A query from a word to itself
    /// finds nothing.
    pub fn search(graph: &SynonymGraph, query: &PathQuery) -> Result<PathSearch> {
        query.validate()?;

        tracing::debug!(
            "Searching paths: source={}, target={}, intermediate={}, max_paths={}",
            query.source,
            query.target,
            query.n_intermediate,
            query.max_paths
        );

        let source = graph
            .id(&query.source)
            .ok_or_else(|| Error::NodeNotFound(query.source.clone()))?;
        let target = graph
            .id(&query.target)
            .ok_or_else(|| Error::NodeNotFound(query.target.clone()))?;

        if !graph.has_path(&query.source, &query.target) {
            return Err(Error::NoPathExists {
                from: query.source.clone(),
                to: query.target.clone(),
            });
        }

        // A simple path cannot hold more words than the graph has.
        if source == target || query.path_len() > graph.node_count() {
            return Ok(PathSearch {
                paths: vec![],
                truncated: false,
                stats: TraversalStats::default(),
            });
        }

        // One extra path tells a real truncation apart from an exact fit.
        let (mut found, stats) = Self::bounded_dfs(
            graph,
            source,
            target,
            query.path_len(),
            query.max_paths + 1,
            query.visit_budget,
        );

        let truncated = found.len() > query.max_paths;
        found.truncate(query.max_paths);

        tracing::debug!(
            "Path search found {} paths (truncated: {}), visited {} nodes, traversed {} edges",
            found.len(),
            truncated,
            stats.nodes_visited,
            stats.edges_traversed
        );

        let paths = found
            .into_iter()
            .map(|ids| SynonymPath {
                nodes: ids.into_iter().map(|id| graph.word(id).to_string()).collect(),
            })
            .collect();

        Ok(PathSearch {
            paths,
            truncated,
            stats,
        })
    }

    /// Depth-first walk over simple paths of at most `path_len` nodes
    ///
    /// `path` and `cursors` grow and shrink together: `cursors[i]` is the
    /// next neighbor of `path[i]` to try. The target is recorded but never
    /// expanded.
    fn bounded_dfs(
        graph: &SynonymGraph,
        source: usize,
        target: usize,
        path_len: usize,
        limit: usize,
        visit_budget: Option<usize>,
    ) -> (Vec<Vec<usize>>, TraversalStats) {
        let mut found = Vec::new();
        let mut stats = TraversalStats::default();
        let mut on_path = vec![false; graph.node_count()];
        let mut path = vec![source];
        let mut cursors = vec![0usize];

        on_path[source] = true;
        stats.nodes_visited = 1;

        while let Some(&cursor) = cursors.last() {
            let depth = cursors.len() - 1;
            let current = path[depth];
            let neighbors = graph.adjacent(current);

            if cursor >= neighbors.len() {
                cursors.pop();
                if let Some(done) = path.pop() {
                    on_path[done] = false;
                }
                continue;
            }

            let next = neighbors[cursor];
            cursors[depth] += 1;
            stats.edges_traversed += 1;

            if on_path[next] {
                continue;
            }

            if next == target {
                if path.len() + 1 == path_len {
                    let mut complete = path.clone();
                    complete.push(target);
                    found.push(complete);
                    if found.len() >= limit {
                        break;
                    }
                }
                continue;
            }

            if path.len() + 1 >= path_len {
                continue;
            }

            if visit_budget.is_some_and(|budget| stats.nodes_visited >= budget) {
                tracing::debug!("Visit budget exhausted after {} nodes", stats.nodes_visited);
                stats.budget_exhausted = true;
                break;
            }

            stats.nodes_visited += 1;
            on_path[next] = true;
            path.push(next);
            cursors.push(0);
        }

        (found, stats)
    }
}

/// Simple paths from `source` to `target` with exactly `n_intermediate`
/// interior words, at most `max_paths` of them, in discovery order
pub fn find_paths(
    graph: &SynonymGraph,
    source: &str,
    target: &str,
    n_intermediate: usize,
    max_paths: usize,
) -> Result<Vec<SynonymPath>> {
    let query = PathQuery::new(source, target)
        .with_intermediate(n_intermediate)
        .with_max_paths(max_paths);
    PathFinder::search(graph, &query).map(|search| search.paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, SynonymGroup};

    fn graph_of(groups: &[&[&str]]) -> SynonymGraph {
        let lexicon = Lexicon::new(
            groups
                .iter()
                .map(|g| SynonymGroup::from_iter(g.iter().copied()))
                .collect(),
        );
        SynonymGraph::from_lexicon(&lexicon)
    }

    fn nodes(paths: &[SynonymPath]) -> Vec<Vec<&str>> {
        paths
            .iter()
            .map(|p| p.nodes.iter().map(String::as_str).collect())
            .collect()
    }

    // a - b - c form one group, c - d another:
    //
    //   a --- b
    //    \   /
    //      c --- d
    fn create_test_graph() -> SynonymGraph {
        graph_of(&[&["a", "b", "c"], &["c", "d"]])
    }

    #[test]
    fn test_one_intermediate() {
        let graph = create_test_graph();
        let paths = find_paths(&graph, "a", "d", 1, 100).unwrap();
        assert_eq!(nodes(&paths), vec![vec!["a", "c", "d"]]);
    }

    #[test]
    fn test_two_intermediate() {
        let graph = create_test_graph();
        let paths = find_paths(&graph, "a", "d", 2, 100).unwrap();
        assert_eq!(nodes(&paths), vec![vec!["a", "b", "c", "d"]]);
    }

    #[test]
    fn test_not_adjacent_with_zero_intermediate() {
        let graph = create_test_graph();
        assert!(find_paths(&graph, "a", "d", 0, 100).unwrap().is_empty());
        assert_eq!(
            nodes(&find_paths(&graph, "a", "b", 0, 100).unwrap()),
            vec![vec!["a", "b"]]
        );
    }

    #[test]
    fn test_too_many_intermediate_finds_nothing() {
        let graph = create_test_graph();
        assert!(find_paths(&graph, "a", "d", 3, 100).unwrap().is_empty());
    }

    #[test]
    fn test_missing_source_reported_first() {
        let graph = create_test_graph();
        let err = find_paths(&graph, "x", "y", 1, 100).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(ref w) if w == "x"));

        let err = find_paths(&graph, "a", "y", 1, 100).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(ref w) if w == "y"));
    }

    #[test]
    fn test_disconnected_words() {
        let graph = graph_of(&[&["a", "b"], &["x", "y"]]);
        for n in [0, 1, 5] {
            let err = find_paths(&graph, "a", "y", n, 100).unwrap_err();
            assert!(matches!(err, Error::NoPathExists { .. }));
        }
    }

    #[test]
    fn test_huge_intermediate_count_finds_nothing() {
        let graph = create_test_graph();
        assert!(find_paths(&graph, "a", "d", usize::MAX, 100).unwrap().is_empty());
        assert!(find_paths(&graph, "a", "d", 3, 100).unwrap().is_empty());
        assert_eq!(PathQuery::new("a", "d").with_intermediate(usize::MAX).path_len(), usize::MAX);

        let err = find_paths(&graph, "a", "zz", usize::MAX, 100).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(ref w) if w == "zz"));
    }

    #[test]
    fn test_same_source_and_target() {
        let graph = create_test_graph();
        assert!(find_paths(&graph, "a", "a", 0, 100).unwrap().is_empty());
        assert!(find_paths(&graph, "a", "a", 2, 100).unwrap().is_empty());
    }

    #[test]
    fn test_discovery_order_follows_insertion() {
        // s connects to m1, m2, m3 (in that order); each connects to t.
        let graph = graph_of(&[
            &["s", "m1"],
            &["s", "m2"],
            &["s", "m3"],
            &["m3", "t"],
            &["m1", "t"],
            &["m2", "t"],
        ]);
        let paths = find_paths(&graph, "s", "t", 1, 100).unwrap();
        assert_eq!(
            nodes(&paths),
            vec![vec!["s", "m1", "t"], vec!["s", "m2", "t"], vec!["s", "m3", "t"]]
        );
    }

    #[test]
    fn test_target_is_not_expanded() {
        // s - t - u - s: the path s, t, u, ... must never pass through t.
        let graph = graph_of(&[&["s", "t"], &["t", "u"], &["u", "s"]]);
        let paths = find_paths(&graph, "s", "t", 1, 100).unwrap();
        assert_eq!(nodes(&paths), vec![vec!["s", "u", "t"]]);
    }

    #[test]
    fn test_max_paths_truncation() {
        // One big group: every pair adjacent, many 2-intermediate paths.
        let graph = graph_of(&[&["a", "b", "c", "d", "e", "f"]]);
        let all = PathFinder::search(&graph, &PathQuery::new("a", "f").with_intermediate(2)).unwrap();
        assert_eq!(all.paths.len(), 12);
        assert!(!all.truncated);

        let capped = PathFinder::search(
            &graph,
            &PathQuery::new("a", "f").with_intermediate(2).with_max_paths(5),
        )
        .unwrap();
        assert_eq!(capped.paths.len(), 5);
        assert!(capped.truncated);
        assert_eq!(capped.paths[..], all.paths[..5]);
    }

    #[test]
    fn test_exact_fit_is_not_truncated() {
        let graph = graph_of(&[&["a", "b", "c", "d", "e", "f"]]);
        let search = PathFinder::search(
            &graph,
            &PathQuery::new("a", "f").with_intermediate(2).with_max_paths(12),
        )
        .unwrap();
        assert_eq!(search.paths.len(), 12);
        assert!(!search.truncated);
    }

    #[test]
    fn test_visit_budget_stops_search() {
        let graph = graph_of(&[&["a", "b", "c", "d", "e", "f", "g", "h"]]);
        let search = PathFinder::search(
            &graph,
            &PathQuery::new("a", "h")
                .with_intermediate(3)
                .with_visit_budget(Some(3)),
        )
        .unwrap();
        assert!(search.stats.budget_exhausted);
        assert!(search.stats.nodes_visited <= 3);
    }

    #[test]
    fn test_invalid_query() {
        let graph = create_test_graph();
        let err = find_paths(&graph, "a", "d", 1, 0).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_path_display() {
        let path = SynonymPath {
            nodes: vec!["barat".into(), "econòmic".into(), "assequible".into()],
        };
        assert_eq!(path.to_string(), "barat -> econòmic -> assequible");
        assert_eq!(path.length(), 2);
        assert_eq!(path.intermediate(), ["econòmic".to_string()]);
    }
}
