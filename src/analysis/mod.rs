pub mod token;
pub mod tokenizer;
pub mod filter;
pub mod filters;
pub mod normalizer;
pub mod pos;
pub mod table;
pub mod pipeline;
