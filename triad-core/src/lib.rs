//! Triad core library - security posture assessment and business-impact computation
//! for Availability, Integrity, and Confidentiality ratings

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Catalog and ROI tables are immutable statics
// - No global mutable state; the aggregation mode is supplied by callers
// - No randomness, clocks, threads, async, or network I/O
// - Malformed ratings degrade to defaults instead of failing
// - Identical input yields byte-for-byte identical output

pub mod aggregate;
pub mod catalog;
pub mod compliance;
pub mod config;
pub mod cost;
pub mod facade;
pub mod impact;
pub mod posture;
pub mod rating;
pub mod report;
pub mod risk;
pub mod roi;
pub mod timeline;

pub use aggregate::{aggregate, AggregationMode};
pub use config::ResolvedConfig;
pub use facade::{BusinessValueFacade, EngineSettings, SecurityMetrics, INVALID_SELECTION_MESSAGE};
pub use posture::SecurityPosture;
pub use rating::{Dimension, Rating};
pub use report::render_json;
