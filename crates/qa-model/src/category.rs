//! Category-keyed collection of Q/A pairs.

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Serialize};

use crate::pair::QaPair;

/// Category name to ordered Q/A pairs.
///
/// Categories keep the order in which they were first inserted; pairs keep
/// source row order. Inserting into an existing category appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    categories: IndexMap<String, Vec<QaPair>>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `category` exists, even if it never receives a pair.
    pub fn touch(&mut self, category: &str) -> &mut Vec<QaPair> {
        self.categories.entry(category.to_string()).or_default()
    }

    /// Appends `pairs` to `category`, creating it when missing.
    pub fn extend_category<I>(&mut self, category: &str, pairs: I)
    where
        I: IntoIterator<Item = QaPair>,
    {
        self.touch(category).extend(pairs);
    }

    pub fn get(&self, category: &str) -> Option<&[QaPair]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<QaPair>> {
        self.categories.iter()
    }

    /// Number of pairs across all categories.
    pub fn total_pairs(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<QaPair>> {
        self.categories
    }
}

impl IntoIterator for CategoryMap {
    type Item = (String, Vec<QaPair>);
    type IntoIter = IntoIter<String, Vec<QaPair>>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.into_iter()
    }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = (&'a String, &'a Vec<QaPair>);
    type IntoIter = Iter<'a, String, Vec<QaPair>>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
