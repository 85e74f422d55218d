//! Lookup-table rule.

use std::collections::HashMap;

/// A fixed mapping from single source characters to replacement strings.
///
/// Keys are case-sensitive. Characters missing from the table are passed
/// through unchanged by [`LookupTable::push_mapped`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<char, Box<str>>,
}

impl LookupTable {
    /// Builds a table from `(source, replacement)` pairs.
    ///
    /// Later duplicates overwrite earlier ones.
    pub fn from_pairs(pairs: &[(char, &str)]) -> Self {
        Self {
            entries: pairs.iter().map(|&(c, s)| (c, Box::from(s))).collect(),
        }
    }

    /// Returns the replacement for `c`, if the table has one.
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(|s| &**s)
    }

    /// Returns true if the table maps `c`.
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// Appends the replacement for `c`, or `c` itself when unmapped.
    pub fn push_mapped(&self, c: char, out: &mut String) {
        match self.get(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
