//! Reusable components

mod header;
mod result_cards;
mod verdict;

pub use header::Header;
pub use result_cards::*;
pub use verdict::{ConfidenceBar, VerdictBadge};
