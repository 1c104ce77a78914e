//! Backend media-service contracts.
//!
//! The service client owns the objects behind these traits; the model core
//! only reads them. Accessors return owned values so implementations are
//! free to compute fields lazily.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kind tag reported by a backend item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceItemKind {
    Video,
    Channel,
    Playlist,
    Unknown,
}

/// Read-only view of a backend media object.
///
/// Every accessor mirrors a field the service client may or may not have
/// populated; absent fields are `None`.
pub trait SourceItem: Send + Sync {
    /// Backend-assigned numeric id.
    fn id(&self) -> i64;

    fn title(&self) -> Option<String>;

    /// Content-type label ("video", "music", ...).
    fn content_type(&self) -> Option<String>;

    fn description(&self) -> Option<String>;

    /// Alternate description variant, when the backend supplies one.
    fn description_alt(&self) -> Option<String>;

    fn video_id(&self) -> Option<String>;

    fn channel_id(&self) -> Option<String>;

    fn playlist_id(&self) -> Option<String>;

    /// Position within the playlist listing; `<= 0` when the item is not a
    /// playlist member.
    fn playlist_index(&self) -> i32;

    fn video_url(&self) -> Option<String>;

    fn background_image_url(&self) -> Option<String>;

    fn card_image_url(&self) -> Option<String>;

    fn preview_url(&self) -> Option<String>;

    fn author(&self) -> Option<String>;

    fn badge_text(&self) -> Option<String>;

    /// Watch progress in `[0, 1]`, or `-1.0` when unknown.
    fn watched_fraction(&self) -> f32;

    fn has_new_content(&self) -> bool;

    fn is_live(&self) -> bool;

    fn is_upcoming(&self) -> bool;

    /// Whether the channel behind this item has an uploads listing.
    fn has_uploads(&self) -> bool;

    fn click_tracking_params(&self) -> Option<String>;

    fn kind(&self) -> SourceItemKind;

    /// Equality under the backend's own identity contract.
    fn same_item(&self, other: &dyn SourceItem) -> bool;

    /// Stable hash consistent with [`same_item`](Self::same_item): items
    /// that compare equal must report the same value.
    fn identity_hash(&self) -> u64;
}

/// Freshly fetched metadata snapshot, consumed by the sync operations.
pub trait SourceMetadata: Send + Sync {
    fn title(&self) -> Option<String>;

    fn description(&self) -> Option<String>;

    /// Alternate description variant (e.g. a secondary rendering the
    /// backend supplies for some surfaces).
    fn description_alt(&self) -> Option<String>;

    fn channel_id(&self) -> Option<String>;

    /// The item queued to play next, when the backend suggests one.
    fn next_item(&self) -> Option<Arc<dyn SourceItem>>;

    fn is_live(&self) -> bool;

    fn is_subscribed(&self) -> bool;

    fn is_upcoming(&self) -> bool;
}

/// Backend codec for embedding a [`SourceItem`] in a persisted record.
///
/// The encoded form must be a single token free of the record delimiter;
/// the codec is responsible for whatever escaping that requires. Absence is
/// encoded too, so `encode` and `decode` compose for any input.
pub trait SourceItemCodec: Send + Sync {
    fn encode(&self, item: Option<&dyn SourceItem>) -> String;

    /// Decodes a token produced by [`encode`](Self::encode). Returns `None`
    /// for tokens the codec cannot decode; callers treat that as an absent
    /// item, not an error.
    fn decode(&self, token: &str) -> Option<Arc<dyn SourceItem>>;
}
