//! Utility modules shared by the structured-data pass and the generators.

pub mod date;
pub mod slug;
pub mod xml;
