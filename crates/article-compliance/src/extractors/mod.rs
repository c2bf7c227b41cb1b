//! Text extraction helpers shared by the rule groups

pub mod numeric;
pub mod span;
