use std::collections::HashSet;
use std::time::Instant;
use tracing::info;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::length::LengthFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::normalizer::{Lowercase, PunctSpace, SpecialCharacterFilter, TextNormalizer};
use crate::analysis::pos::PosTagger;
use crate::analysis::table::Table;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use crate::core::error::Result;

/// One preprocessing step over the whole table
pub trait Stage: Send + Sync {
    fn apply(&self, table: Table) -> Result<Table>;

    fn name(&self) -> &str;
}

/// Runs text normalizers over every record in order
pub struct NormalizeStage {
    pub normalizers: Vec<Box<dyn TextNormalizer>>,
}

impl NormalizeStage {
    pub fn new(normalizers: Vec<Box<dyn TextNormalizer>>) -> Self {
        NormalizeStage { normalizers }
    }
}

impl Stage for NormalizeStage {
    fn apply(&self, mut table: Table) -> Result<Table> {
        for record in &mut table.records {
            let mut text = std::mem::take(&mut record.text);
            for normalizer in &self.normalizers {
                text = normalizer.normalize(&record.title, text);
            }
            record.text = text;
        }
        Ok(table)
    }

    fn name(&self) -> &str {
        "normalize"
    }
}

/// Splits text into tokens, then runs the post-tokenizers
pub struct TokenizeStage {
    pub tokenizer: Box<dyn Tokenizer>,
    pub post: Vec<Box<dyn TokenFilter>>,
}

impl TokenizeStage {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        TokenizeStage { tokenizer, post: Vec::new() }
    }

    pub fn add_post(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.post.push(filter);
        self
    }
}

impl Stage for TokenizeStage {
    fn apply(&self, mut table: Table) -> Result<Table> {
        for record in &mut table.records {
            let mut tokens = self.tokenizer.tokenize(&record.text);
            for filter in &self.post {
                tokens = filter.filter(tokens);
            }
            record.tokens = tokens;
        }
        Ok(table)
    }

    fn name(&self) -> &str {
        "tokenize"
    }
}

/// Rewrites tokens as `word/TAG`, optionally keeping only some tags
pub struct PosTagStage {
    pub tagger: Box<dyn PosTagger>,
    pub keep: Option<HashSet<String>>,
    pub separator: char,
}

impl PosTagStage {
    pub fn new(tagger: Box<dyn PosTagger>) -> Self {
        PosTagStage { tagger, keep: None, separator: '/' }
    }

    pub fn keep_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl Stage for PosTagStage {
    fn apply(&self, mut table: Table) -> Result<Table> {
        for record in &mut table.records {
            let tags = self.tagger.tag(&record.tokens);
            let tokens = std::mem::take(&mut record.tokens);
            record.tokens = tokens.into_iter()
                .zip(tags)
                .filter(|(_, tag)| self.keep.as_ref().is_none_or(|keep| keep.contains(tag)))
                .map(|(mut token, tag)| {
                    token.text = format!("{}{}{}", token.text, self.separator, tag);
                    token.length = token.text.len();
                    token
                })
                .collect();
        }
        Ok(table)
    }

    fn name(&self) -> &str {
        "pos_tag"
    }
}

/// Token-level cleanup after tagging
pub struct CleansingStage {
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl CleansingStage {
    pub fn new(filters: Vec<Box<dyn TokenFilter>>) -> Self {
        CleansingStage { filters }
    }
}

impl Stage for CleansingStage {
    fn apply(&self, mut table: Table) -> Result<Table> {
        for record in &mut table.records {
            let mut tokens = std::mem::take(&mut record.tokens);
            for filter in &self.filters {
                tokens = filter.filter(tokens);
            }
            record.tokens = tokens;
        }
        Ok(table)
    }

    fn name(&self) -> &str {
        "cleansing"
    }
}

/// Ordered preprocessing pipeline
pub struct Pipeline {
    pub stages: Vec<Box<dyn Stage>>,
    pub name: String,
}

impl Pipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Pipeline {
            stages: Vec::new(),
            name: name.into(),
        }
    }

    pub fn add_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn run(&self, mut table: Table) -> Result<Table> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(pipeline = %self.name, "Start {}", stage.name());
            table = stage.apply(table)?;
            info!(pipeline = %self.name, "End {} (time: {:?})", stage.name(), start.elapsed());
        }
        Ok(table)
    }

    /// Lowercase, ASCII-only text, Unicode words, English stopwords and
    /// single-character tokens removed
    pub fn standard_english() -> Result<Self> {
        let normalize = NormalizeStage::new(vec![
            Box::new(Lowercase),
            Box::new(SpecialCharacterFilter::new(false, true, None)?),
            Box::new(PunctSpace),
        ]);
        let cleansing = CleansingStage::new(vec![
            Box::new(StopWordFilter::english()),
            Box::new(LengthFilter::new(2, 0)),
        ]);

        Ok(Pipeline::new("standard_english")
            .add_stage(Box::new(normalize))
            .add_stage(Box::new(TokenizeStage::new(Box::new(StandardTokenizer::default()))))
            .add_stage(Box::new(cleansing)))
    }
}
