//! # Delivery Coverage
//!
//! Pure classification of free-form delivery addresses against the
//! storefront's coverage. No I/O, no async, no shared state.
//!
//! ## Flow
//!
//! - Customer types an address at checkout, frontend sends it as-is
//! - Address is normalized (lowercase, collapsed whitespace)
//! - Ordered rules match the normalized string against the area tables
//! - Every input produces a verdict, garbled input is a low-confidence
//!   rejection rather than an error
//!
//! ## Notes
//!
//! - Matching is substring containment against curated variant spellings,
//!   so "CIMANGGIS", "cimangis" and "cimangiz" all resolve to the same area
//! - Confidence is a fixed tier per rule, the frontend only compares it
//!   against thresholds

pub mod areas;
pub mod classify;
pub mod normalize;

pub use areas::{Area, AreaTable, SERVICE_TABLE};
pub use classify::{classify, ValidationResult};
pub use normalize::normalize;
