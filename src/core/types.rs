use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use crate::core::error::{Error, ErrorKind, Result};

/// Document identifier. Doubles as the member type of the index's
/// document sets, hence `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl DocId {
    pub fn new(id: u32) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Polarity label attached to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl FromStr for Label {
    type Err = Error;

    /// Parses the trend codes used by labelled news tables.
    fn from_str(code: &str) -> Result<Self> {
        match code.trim() {
            "P" => Ok(Label::Positive),
            "N" => Ok(Label::Negative),
            "" | "0" | "U" => Ok(Label::Neutral),
            other => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Unknown label code '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub tokens: Vec<String>,
    pub label: Label,
}

impl Document {
    pub fn new(id: DocId, tokens: Vec<String>, label: Label) -> Self {
        Document {
            id,
            title: String::new(),
            tokens,
            label,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Ordered, immutable document store for one analysis run
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    positions: HashMap<DocId, usize>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(documents.len());
        for (pos, doc) in documents.iter().enumerate() {
            if positions.insert(doc.id, pos).is_some() {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("Duplicate document id {}", doc.id),
                ));
            }
        }

        Ok(Corpus { documents, positions })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.positions.get(&id).map(|&pos| &self.documents[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents carrying the given label, in corpus order
    pub fn with_label(&self, label: Label) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(move |doc| doc.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: u32, tokens: &[&str]) -> Document {
        Document::new(DocId(id), tokens.iter().map(|t| t.to_string()).collect(), Label::Neutral)
    }

    #[test]
    fn label_codes() {
        assert_eq!("P".parse::<Label>().unwrap(), Label::Positive);
        assert_eq!(" N ".parse::<Label>().unwrap(), Label::Negative);
        assert_eq!("".parse::<Label>().unwrap(), Label::Neutral);
        let err = "X".parse::<Label>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn corpus_rejects_duplicate_ids() {
        let err = Corpus::new(vec![doc(1, &["a"]), doc(1, &["b"])]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn corpus_lookup_keeps_order() {
        let corpus = Corpus::new(vec![doc(7, &["a"]), doc(3, &["b"])]).unwrap();
        let ids: Vec<u32> = corpus.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(corpus.get(DocId(3)).unwrap().tokens, vec!["b".to_string()]);
        assert!(corpus.get(DocId(4)).is_none());
    }
}
