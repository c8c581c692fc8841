//! Lexicon parsing: raw synonym listings into normalized groups
//!
//! Each line of a lexicon file looks like
//! `<tag>:<word>, <word> (<comment>), {<note>} <word>`. The tag, the
//! parenthesised comments and the braced notes are dropped, and what
//! remains is split on commas into one [`SynonymGroup`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Words listed together on one lexicon line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymGroup(pub Vec<String>);

impl SynonymGroup {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for SynonymGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Ordered synonym groups read from one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    groups: Vec<SynonymGroup>,
}

impl Lexicon {
    pub fn new(groups: Vec<SynonymGroup>) -> Self {
        Self { groups }
    }

    /// Read and normalize a lexicon file
    ///
    /// A file that cannot be opened or read fails with
    /// [`Error::ResourceNotFound`]; bytes that are not UTF-8 fail with
    /// [`Error::Encoding`] naming the offending line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = BufReader::new(file);
        let mut groups = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| Error::ResourceNotFound {
                    path: path.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = std::str::from_utf8(&buf).map_err(|_| Error::Encoding {
                path: path.to_path_buf(),
                line: line_no,
            })?;
            if let Some(group) = parse_line(line) {
                groups.push(group);
            }
        }

        tracing::debug!(
            "Loaded {} synonym groups from {} lines of {:?}",
            groups.len(),
            line_no,
            path
        );

        Ok(Self { groups })
    }

    /// Normalize lexicon text already held in memory
    pub fn parse(text: &str) -> Self {
        Self {
            groups: text.lines().filter_map(parse_line).collect(),
        }
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SynonymGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a SynonymGroup;
    type IntoIter = std::slice::Iter<'a, SynonymGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Normalize a single lexicon line
///
/// Returns `None` for lines that hold no words once the tag, comments
/// and notes are removed.
pub fn parse_line(line: &str) -> Option<SynonymGroup> {
    let body = strip_tag(line);
    let body = strip_enclosed(body, '(', ')');
    let body = strip_enclosed(&body, '{', '}');

    let words: Vec<String> = body
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(SynonymGroup(words))
    }
}

/// Drop everything up to and including the first `:`
fn strip_tag(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, rest)) => rest,
        None => line,
    }
}

/// Remove every `open ... close` span, left to right
///
/// Each span runs from an opening delimiter to the first closing
/// delimiter after it, so `(a (b) c)` leaves ` c)`. An opening delimiter
/// with no closing one after it is kept along with the rest of the text.
pub fn strip_enclosed(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len_utf8()..];
        match after_open.find(close) {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &after_open[end + close.len_utf8()..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}
