//! Persisted record format.
//!
//! A `MediaRef` persists as ten positional fields joined by the literal
//! `&vi;` delimiter: local id, category, title, video id, video url,
//! playlist id, channel id, background image url, card image url, and the
//! codec-encoded source item token. Absent text encodes as the literal
//! `null` token, which keeps empty strings distinct from absent fields.
//!
//! Decoding is all-or-nothing: a record that does not split into exactly
//! ten fields yields no value at all, and the caller starts fresh.

use tracing::warn;

use bridge_traits::source::SourceItemCodec;

use crate::error::{Result, WireError};
use crate::media_ref::MediaRef;

/// Field separator of the persisted record.
pub const RECORD_DELIM: &str = "&vi;";

const RECORD_FIELDS: usize = 10;
const NULL_TOKEN: &str = "null";

impl MediaRef {
    /// Encodes this ref into the ten-field delimited record.
    ///
    /// The source item token comes from the backend codec and must not
    /// contain the delimiter; a violating token is logged here and will be
    /// rejected on decode.
    pub fn to_record(&self, codec: &dyn SourceItemCodec) -> String {
        let token = codec.encode(self.source_item.as_deref());
        if token.contains(RECORD_DELIM) {
            warn!(
                token = %token,
                "source item token contains the record delimiter; record will not decode"
            );
        }

        [
            self.local_id.to_string(),
            encode_field(self.category.as_deref()),
            encode_field(self.title.as_deref()),
            encode_field(self.video_id.as_deref()),
            encode_field(self.video_url.as_deref()),
            encode_field(self.playlist_id.as_deref()),
            encode_field(self.channel_id.as_deref()),
            encode_field(self.background_image_url.as_deref()),
            encode_field(self.card_image_url.as_deref()),
            token,
        ]
        .join(RECORD_DELIM)
    }

    /// Decodes a persisted record. Malformed input yields `None` — no
    /// partial decode; the caller treats it as "no prior state".
    pub fn from_record(record: &str, codec: &dyn SourceItemCodec) -> Option<MediaRef> {
        match split_record(record) {
            Ok(fields) => {
                let mut media_ref = MediaRef::new();

                media_ref.local_id = fields[0].parse().unwrap_or(0);
                media_ref.category = decode_field(fields[1]);
                media_ref.title = decode_field(fields[2]);
                media_ref.video_id = decode_field(fields[3]);
                media_ref.video_url = decode_field(fields[4]);
                media_ref.playlist_id = decode_field(fields[5]);
                media_ref.channel_id = decode_field(fields[6]);
                media_ref.background_image_url = decode_field(fields[7]);
                media_ref.card_image_url = decode_field(fields[8]);
                // The codec may decline the token; an absent item is not an
                // error.
                media_ref.source_item = codec.decode(fields[9]);

                Some(media_ref)
            }
            Err(err) => {
                warn!(%err, "discarding malformed media record");
                None
            }
        }
    }
}

fn split_record(record: &str) -> Result<Vec<&str>> {
    let fields: Vec<&str> = record.split(RECORD_DELIM).collect();
    if fields.len() != RECORD_FIELDS {
        return Err(WireError::FieldCount {
            found: fields.len(),
            expected: RECORD_FIELDS,
        });
    }
    Ok(fields)
}

fn encode_field(value: Option<&str>) -> String {
    value.unwrap_or(NULL_TOKEN).to_owned()
}

fn decode_field(token: &str) -> Option<String> {
    if token == NULL_TOKEN {
        None
    } else {
        Some(token.to_owned())
    }
}

// =============================================================================
// Tests
// =============================================================================
