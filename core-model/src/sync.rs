//! In-place merge of freshly fetched data.
//!
//! Two merge families with deliberately different precedence: progress sync
//! copies the caller's watch progress and nothing else, while metadata sync
//! never clobbers user-facing text with a blank value but always trusts the
//! fetched relationship and status data.

use tracing::debug;

use bridge_traits::source::SourceMetadata;

use crate::media_ref::MediaRef;

impl MediaRef {
    /// Overwrites watch progress from `other`, unconditionally. An absent
    /// `other` is a no-op.
    pub fn sync_progress(&mut self, other: Option<&MediaRef>) {
        if let Some(other) = other {
            self.watched_fraction = other.watched_fraction;
        }
    }

    /// Merges fetched metadata using the primary description variant.
    pub fn sync_metadata(&mut self, metadata: Option<&dyn SourceMetadata>) {
        self.sync_metadata_with(metadata, false);
    }

    /// Merges fetched metadata into this ref.
    ///
    /// Title and description only overwrite when the fetched value is
    /// present, and descriptions of upcoming items are never taken (their
    /// translations are not precise). Channel id, next item and the status
    /// flags overwrite without presence checks: that data did not exist
    /// before the sync. `is_synced` is set last, always.
    pub fn sync_metadata_with(
        &mut self,
        metadata: Option<&dyn SourceMetadata>,
        use_alt_description: bool,
    ) {
        let Some(metadata) = metadata else {
            return;
        };

        if let Some(title) = metadata.title() {
            self.title = Some(title);
        }

        let upcoming = metadata.is_upcoming();

        let description = if upcoming {
            None
        } else if use_alt_description {
            metadata.description_alt()
        } else {
            metadata.description()
        };
        if let Some(description) = description {
            self.description = Some(description);
        }

        self.channel_id = metadata.channel_id();
        self.next_source_item = metadata.next_item();
        self.is_live = metadata.is_live();
        self.is_subscribed = metadata.is_subscribed();
        self.is_upcoming = upcoming;
        self.is_synced = true;

        debug!(video_id = ?self.video_id, "synced fetched metadata into media ref");
    }
}

// =============================================================================
// Tests
// =============================================================================
