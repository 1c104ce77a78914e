//! # Media Reference Model
//!
//! Owns the `MediaRef` entity — the video/channel/playlist handle that flows
//! through the browsing UI — and its operation families.
//!
//! ## Overview
//!
//! This module manages:
//! - Construction from backend items, raw identifiers, or the builder
//! - The identity/equality contract used to deduplicate rows across views
//! - The delimited text record used for persistence
//! - Field-by-field merge of freshly fetched metadata into held instances
//!
//! The entity is a plain mutable value with no internal synchronization;
//! whichever container holds an instance owns it and updates it
//! synchronously. Handles to backend objects and groupings are shared,
//! read-only and possibly absent at every access.

pub mod error;
pub mod group;
pub mod media_ref;
pub mod sync;
pub mod wire;

pub use error::WireError;
pub use group::{GroupKind, MediaGroup};
pub use media_ref::{MediaRef, MediaRefBuilder};
pub use wire::RECORD_DELIM;
