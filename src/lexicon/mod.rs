pub mod lexicon;
pub mod builder;
