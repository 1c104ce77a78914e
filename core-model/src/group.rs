//! Grouping container contract.
//!
//! A grouping is an externally owned, ordered collection of media refs with
//! a classification tag (the rows of a browsing surface). The model core
//! only reads it: classification predicates look at the tag, and the
//! lightweight copy operation asks the container to copy itself.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::media_ref::MediaRef;

/// Classification tag of a grouping container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Undefined,
    ChannelUploads,
    UserPlaylists,
    Subscriptions,
    History,
}

/// Externally owned ordered collection of media refs.
///
/// Implementations hand out members by value and must not keep strong
/// references from members back to the container that owns them
/// (`Arc::new_cyclic` where a back-edge is needed), so a `MediaRef` holding
/// its group does not pin a larger object graph alive.
pub trait MediaGroup: Send + Sync {
    /// Grouping tag, when the backend provided one.
    fn kind(&self) -> Option<GroupKind>;

    /// Snapshot of the member list, source order preserved.
    fn items(&self) -> Vec<MediaRef>;

    /// Produces an equivalent lightweight container.
    fn copy(&self) -> Arc<dyn MediaGroup>;
}
