//! Library crate for userdir.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Debounced search input (`debounce`)
//! - Remote directory source and record types (`directory`)
//! - Error and result types (`error`)
//! - Latitude/longitude mapping (`geo`)
//! - Pagination and page-window logic (`pagination`)
//! - In-memory filtering (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `userdir` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod debounce;
pub mod directory;
pub mod error;
pub mod geo;
pub mod pagination;
pub mod search;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
