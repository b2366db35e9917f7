pub mod exclusion;
pub mod tdm;
