//! # Host Bridge Traits
//!
//! Capability contracts that must be implemented by the host application.
//!
//! ## Overview
//!
//! This crate defines the contract between the model core and the
//! collaborators it reads through. Each trait represents a capability the
//! core requires but does not implement itself:
//!
//! - [`SourceItem`](source::SourceItem) - read-only view of a backend media
//!   object (the richer metadata the service client fetched)
//! - [`SourceMetadata`](source::SourceMetadata) - a freshly fetched metadata
//!   snapshot consumed by the sync operations
//! - [`SourceItemCodec`](source::SourceItemCodec) - the backend's own
//!   encode/decode for embedding an item in a persisted record
//! - [`PlatformMediaDescription`](platform::PlatformMediaDescription) - the
//!   platform "now playing" description surface
//!
//! ## Error Handling
//!
//! Every contract is a synchronous, infallible read accessor: missing data
//! is `Option::None`, never an error. Implementations must not panic on
//! absent fields.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` bounds so handles can be shared across
//! threads by whichever container owns the referencing value.

pub mod platform;
pub mod source;

pub use platform::PlatformMediaDescription;
pub use source::{SourceItem, SourceItemCodec, SourceItemKind, SourceMetadata};
