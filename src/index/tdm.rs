use std::collections::HashMap;
use roaring::RoaringBitmap;
use tracing::debug;
use crate::core::types::{DocId, Document};
use crate::index::exclusion::ExclusionSet;

/// Presence-based term-document index: term -> set of documents
/// containing it at least once. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct TermDocumentIndex {
    postings: HashMap<String, RoaringBitmap>,
    terms: Vec<String>,   // Discovery order
    doc_count: usize,
}

impl TermDocumentIndex {
    /// Single pass over the corpus. Excluded tokens are skipped; terms that
    /// end up with no documents never get a key.
    pub fn build(documents: &[Document], excluded: &ExclusionSet) -> Self {
        let mut index = TermDocumentIndex::default();

        for doc in documents {
            index.add_document(doc, excluded);
        }

        debug!(
            documents = index.doc_count,
            terms = index.terms.len(),
            excluded = excluded.len(),
            "term-document index built"
        );
        index
    }

    fn add_document(&mut self, doc: &Document, excluded: &ExclusionSet) {
        for token in &doc.tokens {
            if excluded.contains(token) {
                continue;
            }
            match self.postings.get_mut(token) {
                Some(docs) => {
                    docs.insert(doc.id.value());
                }
                None => {
                    let mut docs = RoaringBitmap::new();
                    docs.insert(doc.id.value());
                    self.postings.insert(token.clone(), docs);
                    self.terms.push(token.clone());
                }
            }
        }
        self.doc_count += 1;
    }

    /// Documents containing `term`, `None` when the term was never indexed
    pub fn docs(&self, term: &str) -> Option<&RoaringBitmap> {
        self.postings.get(term)
    }

    /// Number of documents containing `term` (0 when absent)
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.postings.get(term).map_or(0, RoaringBitmap::len)
    }

    pub fn contains_doc(&self, term: &str, doc: DocId) -> bool {
        self.postings.get(term).is_some_and(|docs| docs.contains(doc.value()))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Terms in the order they were first seen
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Documents seen by the build, including ones whose tokens were all
    /// excluded
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }
}
