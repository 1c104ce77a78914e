//! Workspace placeholder crate.
//!
//! This crate exists to expose the individual workspace crates
//! (`core-model`, `bridge-traits`) behind a single dependency. Host
//! applications can depend on `vbc-workspace` and reach every member crate
//! through the re-exports below without wiring each crate individually.

pub use bridge_traits;
pub use core_model;
