pub mod anthropic;
pub mod extract;
