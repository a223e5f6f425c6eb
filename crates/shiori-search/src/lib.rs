//! Shiori Search Library
//!
//! Keyword search over the content collection: query normalization,
//! weighted per-term scoring, ranked results with year grouping, and
//! match highlighting for display.
//!
//! Matching is substring containment, not token-boundary matching, and
//! the whole pipeline is pure: no indexes, no state, no I/O.

pub mod highlight;
pub mod pipeline;
pub mod score;
pub mod text;

pub use highlight::highlight;
pub use pipeline::{SearchHit, group_by_year, search};
pub use score::score;
pub use text::{normalize, tokenize};
