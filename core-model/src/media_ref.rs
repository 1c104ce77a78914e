//! The media item reference entity.
//!
//! `MediaRef` holds the metadata associated with a single video, channel or
//! playlist handle as it flows through the browsing UI: built from a backend
//! item (or from raw identifiers, or via the builder), deduplicated against
//! redundant views through its identity contract, persisted as a delimited
//! record, and merged in place when fresher metadata arrives.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bridge_traits::platform::PlatformMediaDescription;
use bridge_traits::source::{SourceItem, SourceItemKind};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::group::{GroupKind, MediaGroup};

/// Separator of the author/topic segments inside a description.
const AUTHOR_DELIM: char = '•';
const MAX_AUTHOR_CHARS: usize = 20;

/// A single media item reference: video, channel or playlist handle.
///
/// The value is plain mutable data with no internal synchronization; it is
/// owned by whichever container currently holds it and updated synchronously
/// by that owner.
#[derive(Clone, Serialize, Deserialize)]
pub struct MediaRef {
    /// Locally assigned identifier, 0 when unset.
    pub local_id: i64,
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub video_url: Option<String>,
    pub playlist_id: Option<String>,
    /// `<= 0` means "not a playlist item".
    pub playlist_index: i32,
    pub background_image_url: Option<String>,
    pub card_image_url: Option<String>,
    pub author: Option<String>,
    pub badge: Option<String>,
    pub preview_url: Option<String>,
    /// Watch progress in `[0, 1]`; `-1.0` means "unknown". Out-of-range
    /// values are tolerated on input, never produced here.
    pub watched_fraction: f32,
    /// Backend object this ref was built from, when still available.
    #[serde(skip)]
    pub source_item: Option<Arc<dyn SourceItem>>,
    #[serde(skip)]
    pub next_source_item: Option<Arc<dyn SourceItem>>,
    /// Grouping this ref was produced from; read access only.
    #[serde(skip)]
    pub group: Option<Arc<dyn MediaGroup>>,
    pub has_new_content: bool,
    pub is_live: bool,
    pub is_upcoming: bool,
    pub is_subscribed: bool,
    pub is_remote: bool,
    /// Terminal marker of a metadata sync.
    pub is_synced: bool,
    /// Position in multi-grid surfaces, -1 when not placed.
    pub group_position: i32,
    pub click_tracking_params: Option<String>,
    created_at_ms: i64,
}

impl MediaRef {
    /// Creates an empty reference. The creation timestamp is stamped here,
    /// once, and never mutated afterwards.
    pub fn new() -> Self {
        Self {
            local_id: 0,
            category: None,
            title: None,
            description: None,
            channel_id: None,
            video_id: None,
            video_url: None,
            playlist_id: None,
            playlist_index: 0,
            background_image_url: None,
            card_image_url: None,
            author: None,
            badge: None,
            preview_url: None,
            watched_fraction: -1.0,
            source_item: None,
            next_source_item: None,
            group: None,
            has_new_content: false,
            is_live: false,
            is_upcoming: false,
            is_subscribed: false,
            is_remote: false,
            is_synced: false,
            group_position: -1,
            click_tracking_params: None,
            created_at_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Milliseconds since the epoch at which this ref was constructed.
    pub fn created_at_ms(&self) -> i64 {
        self.created_at_ms
    }

    /// Builds a ref from a backend item, copying every relevant scalar and
    /// retaining a handle to the item itself. Absent fields stay absent.
    pub fn from_source(item: &Arc<dyn SourceItem>) -> Self {
        let mut media_ref = Self::new();

        media_ref.local_id = item.id();
        media_ref.title = item.title();
        media_ref.category = item.content_type();
        media_ref.description = item.description();
        media_ref.video_id = item.video_id();
        media_ref.channel_id = item.channel_id();
        media_ref.video_url = item.video_url();
        media_ref.background_image_url = item.background_image_url();
        media_ref.card_image_url = item.card_image_url();
        media_ref.author = item.author();
        media_ref.watched_fraction = item.watched_fraction();
        media_ref.badge = item.badge_text();
        media_ref.has_new_content = item.has_new_content();
        media_ref.preview_url = item.preview_url();
        media_ref.playlist_id = item.playlist_id();
        media_ref.playlist_index = item.playlist_index();
        media_ref.is_live = item.is_live();
        media_ref.is_upcoming = item.is_upcoming();
        media_ref.click_tracking_params = item.click_tracking_params();
        media_ref.source_item = Some(Arc::clone(item));

        media_ref
    }

    /// Minimal identity-only construction.
    pub fn from_video_id(video_id: impl Into<String>) -> Self {
        Self::from_playlist(Some(video_id.into()), None, -1)
    }

    /// Construction from a playlist position.
    pub fn from_playlist(
        video_id: Option<String>,
        playlist_id: Option<String>,
        playlist_index: i32,
    ) -> Self {
        Self::from_parts(video_id, playlist_id, playlist_index, None, None, None, -1.0)
    }

    /// General low-level constructor used when only partial identity is
    /// known, e.g. before a metadata fetch completes.
    pub fn from_parts(
        video_id: Option<String>,
        playlist_id: Option<String>,
        playlist_index: i32,
        channel_id: Option<String>,
        title: Option<String>,
        description: Option<String>,
        watched_fraction: f32,
    ) -> Self {
        let mut media_ref = Self::new();

        media_ref.video_id = video_id;
        media_ref.playlist_id = playlist_id;
        media_ref.playlist_index = playlist_index;
        media_ref.channel_id = channel_id;
        media_ref.title = title;
        media_ref.description = description;
        media_ref.watched_fraction = watched_fraction;

        media_ref
    }

    /// Null-safe equality: false when `a` is absent, else `a == b` with `a`
    /// as the left operand. Callers rely on the left-operand semantics; an
    /// absent `a` is never equal to anything, including an absent `b`.
    pub fn eq_opt(a: Option<&MediaRef>, b: Option<&MediaRef>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// True when the ref is absent or carries no video id.
    pub fn is_empty(media_ref: Option<&MediaRef>) -> bool {
        media_ref.map_or(true, |r| r.video_id.is_none())
    }

    pub fn has_video(&self) -> bool {
        self.video_id.is_some()
    }

    pub fn has_channel(&self) -> bool {
        self.channel_id.is_some()
    }

    pub fn has_playlist(&self) -> bool {
        self.playlist_id.is_some()
    }

    /// A channel handle with no video attached.
    pub fn is_channel_only(&self) -> bool {
        self.video_id.is_none() && self.channel_id.is_some()
    }

    /// A member of a playlist listing, not the playlist itself.
    pub fn is_playlist_item(&self) -> bool {
        self.playlist_index > 0
    }

    /// The playlist itself, as declared by the backend item.
    pub fn is_playlist_root(&self) -> bool {
        self.video_id.is_none()
            && self
                .source_item
                .as_ref()
                .map_or(false, |item| item.kind() == SourceItemKind::Playlist)
    }

    pub fn has_uploads(&self) -> bool {
        self.source_item.as_ref().map_or(false, |item| item.has_uploads())
    }

    /// Whether the grouping this ref came from carries the given tag.
    /// Absent container or absent tag is simply false.
    pub fn belongs_to(&self, kind: GroupKind) -> bool {
        self.group.as_ref().and_then(|group| group.kind()) == Some(kind)
    }

    /// Lightweight copy carrying only identity and progress: video, playlist
    /// and channel ids, playlist index, title, description, watch fraction,
    /// and the container's own copy of the grouping. Flags, urls and source
    /// handles are intentionally dropped.
    pub fn copy(&self) -> Self {
        let mut media_ref = Self::from_parts(
            self.video_id.clone(),
            self.playlist_id.clone(),
            self.playlist_index,
            self.channel_id.clone(),
            self.title.clone(),
            self.description.clone(),
            self.watched_fraction,
        );
        if let Some(group) = &self.group {
            media_ref.group = Some(group.copy());
        }
        media_ref
    }

    /// Derives a display author label.
    ///
    /// The `author` field is only a fallback: a present description wins.
    /// Descriptions arrive as `•`-separated segments where the first segment
    /// may be a special label (4K, Stream, New) rather than a name; a long
    /// segment list or a too-short first segment indicates the label case.
    /// The result is trimmed and abbreviated to 20 chars.
    pub fn extract_author(&self) -> Option<String> {
        let mut result = self.author.clone();

        if let Some(description) = &self.description {
            let mut parts: Vec<&str> = description.split(AUTHOR_DELIM).collect();
            while parts.last() == Some(&"") {
                parts.pop();
            }

            result = Some(if parts.len() <= 1 {
                description.clone()
            } else if parts.len() < 4 && parts[0].chars().count() > 2 {
                parts[0].to_owned()
            } else {
                parts[1].to_owned()
            });
        }

        result.map(|author| abbreviate(author.trim(), MAX_AUTHOR_CHARS))
    }

    /// Filters a grouping's members down to those whose extracted author
    /// equals `author`. Source order is preserved; an absent extracted
    /// author never matches.
    pub fn find_by_author(group: Option<&dyn MediaGroup>, author: Option<&str>) -> Vec<MediaRef> {
        let mut result = Vec::new();

        if let Some(group) = group {
            for member in group.items() {
                let extracted = member.extract_author();
                if extracted.as_deref().map_or(false, |a| Some(a) == author) {
                    result.push(member);
                }
            }
        }

        result
    }
}

impl Default for MediaRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity equality, evaluated on the left operand's strongest key:
/// video id, else playlist id, else channel id, else the backend item's own
/// contract. Playlist context is deliberately ignored when a video id is
/// present, so the same video reached through different playlists still
/// matches.
///
/// The rule is left-operand based and therefore not symmetric when the two
/// operands carry different identity bases, and a ref with no identity basis
/// is not even equal to itself; dedup call sites rely on both properties,
/// which is also why there is no `Eq` impl.
impl PartialEq for MediaRef {
    fn eq(&self, other: &Self) -> bool {
        if let Some(video_id) = &self.video_id {
            return Some(video_id) == other.video_id.as_ref();
        }

        if let Some(playlist_id) = &self.playlist_id {
            return Some(playlist_id) == other.playlist_id.as_ref();
        }

        if let Some(channel_id) = &self.channel_id {
            return Some(channel_id) == other.channel_id.as_ref();
        }

        if let Some(item) = &self.source_item {
            return match &other.source_item {
                Some(other_item) => item.same_item(other_item.as_ref()),
                None => false,
            };
        }

        false
    }
}

/// Folds every identity field in fixed order, absent branches included.
/// Unlike `eq` this never short-circuits on the strongest key.
impl Hash for MediaRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.video_id.hash(state);
        self.playlist_id.hash(state);
        self.channel_id.hash(state);
        self.source_item
            .as_ref()
            .map(|item| item.identity_hash())
            .hash(state);
    }
}

impl fmt::Debug for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaRef")
            .field("local_id", &self.local_id)
            .field("title", &self.title)
            .field("video_id", &self.video_id)
            .field("playlist_id", &self.playlist_id)
            .field("playlist_index", &self.playlist_index)
            .field("channel_id", &self.channel_id)
            .field("watched_fraction", &self.watched_fraction)
            .field("is_synced", &self.is_synced)
            .field("source_item", &self.source_item.is_some())
            .field("group", &self.group.is_some())
            .finish_non_exhaustive()
    }
}

/// Caps a label at `max_chars` characters total, appending `…` when the
/// input would not fit unchanged.
fn abbreviate(label: &str, max_chars: usize) -> String {
    if label.chars().count() >= max_chars {
        let mut out: String = label.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    } else {
        label.to_owned()
    }
}

/// Builder accumulating the optional scalar fields of a [`MediaRef`].
#[derive(Debug, Default)]
pub struct MediaRefBuilder {
    local_id: i64,
    category: Option<String>,
    title: Option<String>,
    description: Option<String>,
    video_id: Option<String>,
    video_url: Option<String>,
    background_image_url: Option<String>,
    card_image_url: Option<String>,
    author: Option<String>,
}

impl MediaRefBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn local_id(mut self, local_id: i64) -> Self {
        self.local_id = local_id;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
        self
    }

    pub fn video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    pub fn background_image_url(mut self, url: impl Into<String>) -> Self {
        self.background_image_url = Some(url.into());
        self
    }

    pub fn card_image_url(mut self, url: impl Into<String>) -> Self {
        self.card_image_url = Some(url.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn build(self) -> MediaRef {
        let mut media_ref = MediaRef::new();

        media_ref.local_id = self.local_id;
        media_ref.category = self.category;
        media_ref.title = self.title;
        media_ref.description = self.description;
        media_ref.video_id = self.video_id;
        media_ref.video_url = self.video_url;
        media_ref.background_image_url = self.background_image_url;
        media_ref.card_image_url = self.card_image_url;
        media_ref.author = self.author;

        media_ref
    }

    /// Builds from the platform "now playing" description surface.
    ///
    /// Fields that surface cannot provide are forced to empty strings, not
    /// absent; downstream code branches on that distinction. The subtitle
    /// maps to the author and the icon to the card image. A non-numeric
    /// platform media id falls back to 0.
    pub fn build_from_platform(desc: &dyn PlatformMediaDescription) -> MediaRef {
        let mut media_ref = MediaRef::new();

        media_ref.local_id = desc
            .media_id()
            .and_then(|id| id.parse().ok())
            .unwrap_or(0);
        media_ref.category = Some(String::new());
        media_ref.title = desc.title();
        media_ref.description = desc.description();
        media_ref.video_id = Some(String::new());
        media_ref.video_url = Some(String::new());
        media_ref.background_image_url = Some(String::new());
        media_ref.card_image_url = desc.icon_url();
        media_ref.author = desc.subtitle();

        media_ref
    }
}

// =============================================================================
// Tests
// =============================================================================
