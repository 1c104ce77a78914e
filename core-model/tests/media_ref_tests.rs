//! Integration tests for the media reference lifecycle
//!
//! These tests drive the complete flow a ref goes through in the browsing
//! UI: built from a backend item, deduplicated against a redundant view,
//! persisted as a record, restored, and synced with fresher metadata.

use bridge_traits::source::{SourceItem, SourceItemCodec, SourceItemKind, SourceMetadata};
use core_model::{GroupKind, MediaGroup, MediaRef, RECORD_DELIM};
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

/// Backend item backed by plain fields.
struct BackendItem {
    id: i64,
    kind: SourceItemKind,
    title: Option<String>,
    description: Option<String>,
    video_id: Option<String>,
    channel_id: Option<String>,
    playlist_id: Option<String>,
    playlist_index: i32,
    author: Option<String>,
    watched_fraction: f32,
    is_live: bool,
}

impl BackendItem {
    fn empty() -> Self {
        Self {
            id: 0,
            kind: SourceItemKind::Unknown,
            title: None,
            description: None,
            video_id: None,
            channel_id: None,
            playlist_id: None,
            playlist_index: -1,
            author: None,
            watched_fraction: -1.0,
            is_live: false,
        }
    }

    fn video(id: i64, video_id: &str) -> Self {
        Self {
            id,
            kind: SourceItemKind::Video,
            video_id: Some(video_id.to_string()),
            ..Self::empty()
        }
    }
}

impl SourceItem for BackendItem {
    fn id(&self) -> i64 {
        self.id
    }
    fn title(&self) -> Option<String> {
        self.title.clone()
    }
    fn content_type(&self) -> Option<String> {
        None
    }
    fn description(&self) -> Option<String> {
        self.description.clone()
    }
    fn description_alt(&self) -> Option<String> {
        None
    }
    fn video_id(&self) -> Option<String> {
        self.video_id.clone()
    }
    fn channel_id(&self) -> Option<String> {
        self.channel_id.clone()
    }
    fn playlist_id(&self) -> Option<String> {
        self.playlist_id.clone()
    }
    fn playlist_index(&self) -> i32 {
        self.playlist_index
    }
    fn video_url(&self) -> Option<String> {
        None
    }
    fn background_image_url(&self) -> Option<String> {
        None
    }
    fn card_image_url(&self) -> Option<String> {
        None
    }
    fn preview_url(&self) -> Option<String> {
        None
    }
    fn author(&self) -> Option<String> {
        self.author.clone()
    }
    fn badge_text(&self) -> Option<String> {
        None
    }
    fn watched_fraction(&self) -> f32 {
        self.watched_fraction
    }
    fn has_new_content(&self) -> bool {
        false
    }
    fn is_live(&self) -> bool {
        self.is_live
    }
    fn is_upcoming(&self) -> bool {
        false
    }
    fn has_uploads(&self) -> bool {
        false
    }
    fn click_tracking_params(&self) -> Option<String> {
        None
    }
    fn kind(&self) -> SourceItemKind {
        self.kind
    }
    fn same_item(&self, other: &dyn SourceItem) -> bool {
        self.id == other.id()
    }
    fn identity_hash(&self) -> u64 {
        self.id as u64
    }
}

/// Codec embedding an item as `<id>:<video id>`; `-` encodes absence.
struct RecordCodec;

impl SourceItemCodec for RecordCodec {
    fn encode(&self, item: Option<&dyn SourceItem>) -> String {
        match item {
            Some(item) => format!("{}:{}", item.id(), item.video_id().unwrap_or_default()),
            None => "-".to_string(),
        }
    }

    fn decode(&self, token: &str) -> Option<Arc<dyn SourceItem>> {
        if token == "-" {
            return None;
        }
        let (id, video_id) = token.split_once(':')?;
        let mut item = BackendItem::video(id.parse().ok()?, video_id);
        if video_id.is_empty() {
            item.video_id = None;
        }
        Some(Arc::new(item))
    }
}

struct Listing {
    kind: Option<GroupKind>,
    members: Vec<MediaRef>,
}

impl MediaGroup for Listing {
    fn kind(&self) -> Option<GroupKind> {
        self.kind
    }
    fn items(&self) -> Vec<MediaRef> {
        self.members.clone()
    }
    fn copy(&self) -> Arc<dyn MediaGroup> {
        Arc::new(Listing {
            kind: self.kind,
            members: self.members.clone(),
        })
    }
}

struct Snapshot {
    title: Option<String>,
    description: Option<String>,
    channel_id: Option<String>,
    upcoming: bool,
    subscribed: bool,
}

impl SourceMetadata for Snapshot {
    fn title(&self) -> Option<String> {
        self.title.clone()
    }
    fn description(&self) -> Option<String> {
        self.description.clone()
    }
    fn description_alt(&self) -> Option<String> {
        None
    }
    fn channel_id(&self) -> Option<String> {
        self.channel_id.clone()
    }
    fn next_item(&self) -> Option<Arc<dyn SourceItem>> {
        None
    }
    fn is_live(&self) -> bool {
        false
    }
    fn is_subscribed(&self) -> bool {
        self.subscribed
    }
    fn is_upcoming(&self) -> bool {
        self.upcoming
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_full_lifecycle() {
    let mut item = BackendItem::video(42, "v42");
    item.title = Some("First Title".to_string());
    item.channel_id = Some("c1".to_string());
    item.watched_fraction = 0.1;
    let item: Arc<dyn SourceItem> = Arc::new(item);

    // Construct from the backend item.
    let mut media_ref = MediaRef::from_source(&item);
    assert_eq!(media_ref.video_id.as_deref(), Some("v42"));
    assert_eq!(media_ref.title.as_deref(), Some("First Title"));
    assert!(media_ref.source_item.is_some());

    // Persist and restore.
    let record = media_ref.to_record(&RecordCodec);
    assert_eq!(record.split(RECORD_DELIM).count(), 10);

    let restored = MediaRef::from_record(&record, &RecordCodec).unwrap();
    assert_eq!(restored.video_id.as_deref(), Some("v42"));
    assert_eq!(restored.local_id, 42);
    assert!(restored.source_item.is_some());
    assert_eq!(restored, media_ref);

    // Sync fresher metadata into the held instance.
    let snapshot = Snapshot {
        title: Some("Fresh Title".to_string()),
        description: Some("Fresh Name•Topic".to_string()),
        channel_id: Some("c2".to_string()),
        upcoming: false,
        subscribed: true,
    };
    media_ref.sync_metadata(Some(&snapshot));

    assert_eq!(media_ref.title.as_deref(), Some("Fresh Title"));
    assert_eq!(media_ref.channel_id.as_deref(), Some("c2"));
    assert!(media_ref.is_subscribed);
    assert!(media_ref.is_synced);
    // Identity is untouched by the sync.
    assert_eq!(media_ref, restored);

    // Progress carried over from a lightweight copy.
    let mut progress = media_ref.copy();
    progress.watched_fraction = 0.9;
    media_ref.sync_progress(Some(&progress));
    assert_eq!(media_ref.watched_fraction, 0.9);
}

#[test]
fn test_dedup_across_redundant_views() {
    let subscriptions_row = vec![
        MediaRef::from_playlist(Some("v1".to_string()), Some("p-subs".to_string()), 1),
        MediaRef::from_video_id("v2"),
    ];

    // The same video arrives again from the history view under another
    // playlist; the row must recognize it.
    let from_history = MediaRef::from_playlist(Some("v1".to_string()), Some("p-hist".to_string()), 3);
    assert!(subscriptions_row.iter().any(|held| held == &from_history));

    let unseen = MediaRef::from_video_id("v3");
    assert!(!subscriptions_row.iter().any(|held| held == &unseen));
}

#[test]
fn test_source_item_identity_without_ids() {
    let left: Arc<dyn SourceItem> = Arc::new(BackendItem {
        id: 7,
        ..BackendItem::empty()
    });
    let right: Arc<dyn SourceItem> = Arc::new(BackendItem {
        id: 7,
        ..BackendItem::empty()
    });

    let a = MediaRef::from_source(&left);
    let b = MediaRef::from_source(&right);
    assert_eq!(a, b);
}

#[test]
fn test_group_membership_flow() {
    let mut by_alice = MediaRef::from_video_id("v1");
    by_alice.description = Some("Alice•Topic".to_string());
    let mut by_bob = MediaRef::from_video_id("v2");
    by_bob.description = Some("Bob•Topic".to_string());

    let listing = Listing {
        kind: Some(GroupKind::Subscriptions),
        members: vec![by_alice, by_bob],
    };

    let found = MediaRef::find_by_author(Some(&listing), Some("Alice"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].video_id.as_deref(), Some("v1"));

    let mut member = found.into_iter().next().unwrap();
    member.group = Some(Arc::new(listing));
    assert!(member.belongs_to(GroupKind::Subscriptions));
    assert!(!member.belongs_to(GroupKind::History));

    // The lightweight copy keeps the grouping through the container's own
    // copy operation.
    let copy = member.copy();
    assert!(copy.belongs_to(GroupKind::Subscriptions));
}

#[test]
fn test_serde_round_trips_scalars_and_skips_handles() {
    let item: Arc<dyn SourceItem> = Arc::new(BackendItem::video(42, "v42"));
    let mut media_ref = MediaRef::from_source(&item);
    media_ref.group = Some(Arc::new(Listing {
        kind: Some(GroupKind::History),
        members: Vec::new(),
    }));

    let json = serde_json::to_string(&media_ref).unwrap();
    let restored: MediaRef = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.local_id, 42);
    assert_eq!(restored.video_id.as_deref(), Some("v42"));
    assert_eq!(restored.created_at_ms(), media_ref.created_at_ms());

    // Handles never cross a serde boundary.
    assert!(restored.source_item.is_none());
    assert!(restored.group.is_none());
}
