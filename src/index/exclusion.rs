use std::collections::HashSet;

/// Terms kept out of index builds. Changes apply to the next build only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    terms: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        ExclusionSet::default()
    }

    /// Adds terms, returning how many were not already excluded
    pub fn extend<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.terms.len();
        self.terms.extend(terms.into_iter().map(Into::into));
        self.terms.len() - before
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        set.extend(iter);
        set
    }
}
