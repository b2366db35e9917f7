pub mod frequency;
pub mod inspector;
