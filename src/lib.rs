pub mod core;
pub mod analysis;
pub mod index;
pub mod lexicon;
pub mod scoring;
pub mod inspect;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::model::PmiModel;
pub use crate::core::types::{Corpus, DocId, Document, Label};
pub use crate::index::exclusion::ExclusionSet;
pub use crate::index::tdm::TermDocumentIndex;
pub use crate::lexicon::builder::PmiLexiconBuilder;
pub use crate::lexicon::lexicon::{Lexicon, LexiconEntry};
pub use crate::scoring::scorer::{score_corpus, score_document};

/*
┌──────────────────────────────── PMILEX DATA FLOW ─────────────────────────────────┐
│                                                                                   │
│  Table (raw rows)                                                                 │
│    │  analysis::pipeline::Pipeline   normalize → tokenize → pos_tag → cleansing   │
│    ▼                                                                              │
│  Corpus (Document store: id, title, tokens, label)                                │
│    │                                  │                                           │
│    │  inspect::LexiconInspector       │  index::TermDocumentIndex                 │
│    │  total / positive / negative     │  term → RoaringBitmap of doc ids          │
│    │  frequency tables, exclusions ───┘  (built with the exclusion set)           │
│    │                                  │                                           │
│    │                                  ▼                                           │
│    │                      lexicon::PmiLexiconBuilder (+ seed lists, N)            │
│    │                                  │                                           │
│    │                                  ▼                                           │
│    │                      Lexicon: term → { positive_score, negative_score }      │
│    ▼                                  │                                           │
│  scoring::PmiScorer  ◄────────────────┘                                           │
│    │                                                                              │
│    ▼                                                                              │
│  ScoredCorpus / DocumentReport                                                    │
│                                                                                   │
└───────────────────────────────────────────────────────────────────────────────────┘
*/
