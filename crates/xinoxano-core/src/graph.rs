//! Undirected synonym graph

use std::collections::{HashMap, HashSet, VecDeque};

use crate::lexicon::{Lexicon, SynonymGroup};

/// Undirected graph linking words that share a synonym group
///
/// Nodes keep the order in which words first appear and each adjacency
/// list keeps edge insertion order, so traversals over the same lexicon
/// always see neighbors in the same order.
#[derive(Debug, Clone, Default)]
pub struct SynonymGraph {
    words: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    edges: HashSet<(usize, usize)>,
}

impl SynonymGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for every group of a lexicon
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut graph = Self::new();
        for group in lexicon {
            graph.add_group(group);
        }

        tracing::debug!(
            "Built synonym graph: {} words, {} edges from {} groups",
            graph.node_count(),
            graph.edge_count(),
            lexicon.len()
        );

        graph
    }

    /// Add every word of the group and connect each pair of distinct words
    pub fn add_group(&mut self, group: &SynonymGroup) {
        let ids: Vec<usize> = group.iter().map(|w| self.add_word(w)).collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                self.connect(a, b);
            }
        }
    }

    /// Insert an edge between two words, adding missing words as nodes
    ///
    /// Returns `false` when nothing changed: the edge already existed or
    /// both ends are the same word.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let a = self.add_word(a);
        let b = self.add_word(b);
        self.connect(a, b)
    }

    fn add_word(&mut self, word: &str) -> usize {
        if let Some(&id) = self.index.get(word) {
            return id;
        }
        let id = self.words.len();
        self.words.push(word.to_string());
        self.index.insert(word.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    fn connect(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let key = (a.min(b), a.max(b));
        if !self.edges.insert(key) {
            return false;
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.edges.contains(&(a.min(b), a.max(b))),
            _ => false,
        }
    }

    /// Neighbors of a word in insertion order (empty for unknown words)
    pub fn neighbors(&self, word: &str) -> Vec<&str> {
        self.index
            .get(word)
            .map(|&id| {
                self.adjacency[id]
                    .iter()
                    .map(|&n| self.words[n].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any path of any length joins the two words
    pub fn has_path(&self, from: &str, to: &str) -> bool {
        let (Some(&start), Some(&goal)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };
        if start == goal {
            return true;
        }

        let mut seen = vec![false; self.words.len()];
        let mut queue = VecDeque::new();
        seen[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &next in &self.adjacency[current] {
                if next == goal {
                    return true;
                }
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        false
    }

    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in first-seen order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn id(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub(crate) fn word(&self, id: usize) -> &str {
        &self.words[id]
    }

    pub(crate) fn adjacent(&self, id: usize) -> &[usize] {
        &self.adjacency[id]
    }
}

impl From<&Lexicon> for SynonymGraph {
    fn from(lexicon: &Lexicon) -> Self {
        Self::from_lexicon(lexicon)
    }
}
