//! Output formatting: present a report as text or JSON.
//!
//! This module handles the fourth and final stage of the pipeline. Both
//! formats are pure: they return a `String` and leave writing it to the
//! caller.

pub mod text;

pub use text::{render, thousands};

use crate::query::report::Report;
use crate::Result;

/// Serialize a report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
