//! Tag hierarchy and tag closure.
//!
//! A tag names a technique category ("Hard", "Knowledge", ...). Declaring a
//! tag in the hierarchy lists the tags it directly implies; a trick that
//! needs a tag effectively needs everything reachable from it.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::{BTreeSet, VecDeque};

/// Adjacency map from a tag to the tags it directly implies.
///
/// Every declared tag is a key; leaves map to an empty list. Children keep
/// their authored order so closures are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagHierarchy {
    edges: BTreeMap<String, Vec<String>>,
}

impl TagHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `tag` with its direct children.
    ///
    /// Re-declaring a tag replaces its children (last row wins).
    pub fn declare(&mut self, tag: impl Into<String>, children: Vec<String>) {
        self.edges.insert(tag.into(), children);
    }

    /// Whether `tag` is declared.
    pub fn contains(&self, tag: &str) -> bool {
        self.edges.contains_key(tag)
    }

    /// Direct children of `tag`; empty for leaves and undeclared tags.
    pub fn children(&self, tag: &str) -> &[String] {
        self.edges.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Declared tags with their children, sorted by tag.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.edges.iter()
    }

    /// Close `tags` under the "implies" relation.
    ///
    /// Result order: input tags first (first occurrence wins), then implied
    /// tags in breadth-first discovery order. The visited set bounds the walk
    /// to one visit per tag, so cyclic hierarchies terminate.
    pub fn expand<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        let mut visited = BTreeSet::new();
        let mut expanded = Vec::with_capacity(tags.len());
        let mut queue = VecDeque::new();

        for tag in tags {
            let tag = tag.as_ref();
            if visited.insert(tag.to_string()) {
                expanded.push(tag.to_string());
                queue.push_back(tag.to_string());
            }
        }

        while let Some(current) = queue.pop_front() {
            for child in self.children(&current) {
                if visited.insert(child.clone()) {
                    expanded.push(child.clone());
                    queue.push_back(child.clone());
                }
            }
        }

        expanded
    }
}

impl FromIterator<(String, Vec<String>)> for TagHierarchy {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TagHierarchy {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
