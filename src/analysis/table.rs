use serde::{Serialize, Deserialize};
use crate::analysis::token::Token;
use crate::core::error::Result;
use crate::core::types::{Corpus, DocId, Document, Label};

/// One row of the preprocessing table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: DocId,
    pub title: String,
    pub text: String,
    pub tokens: Vec<Token>,
    pub label: Label,
}

impl Record {
    pub fn new(id: DocId, title: impl Into<String>, text: impl Into<String>, label: Label) -> Self {
        Record {
            id,
            title: title.into(),
            text: text.into(),
            tokens: Vec::new(),
            label,
        }
    }

    fn into_document(self) -> Document {
        let tokens = self.tokens.into_iter().map(|t| t.text).collect();
        Document::new(self.id, tokens, self.label).with_title(self.title)
    }
}

/// Table flowing through the preprocessing stages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Table { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freezes the tokenized table into the document store
    pub fn into_corpus(self) -> Result<Corpus> {
        Corpus::new(self.records.into_iter().map(Record::into_document).collect())
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Table::new(iter.into_iter().collect())
    }
}
