pub mod rule;
pub mod selector;
