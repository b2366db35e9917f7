pub mod scorer;
pub mod results;
