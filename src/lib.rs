//! Etiqueta - status, priority and task-type classification tables for project dashboards
//!
//! This library provides the presentation mapping shared by every dashboard view:
//! - Built-in classification tables per dimension (priority, sprint status, task status, task type)
//! - Resolution of raw backend codes to a label, color and sort rank, with
//!   per-dimension defaults for absent values and a fallback entry for unknown ones
//! - Rank ordering and distribution tallies for chart series
//! - rc file configuration for label/color overrides
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use etiqueta::classify::build_table;
//! use etiqueta::models::Dimension;
//!
//! let priorities = build_table(Dimension::Priority);
//! let high = priorities.resolve(Some("High"));
//! assert_eq!(high.label(), "Alta");
//! assert_eq!(high.color().to_hex(), "#ea580c");
//!
//! // Absent priority defaults to low
//! assert_eq!(priorities.resolve(None).label(), "Baja");
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
