//! Platform "now playing" integration surface.

/// Media description exposed by the platform's now-playing system.
///
/// Only the specialized builder path consumes this; the fields map onto a
/// small subset of the model (subtitle becomes the author, the icon becomes
/// the card image).
pub trait PlatformMediaDescription: Send + Sync {
    /// Platform media id, expected to hold a numeric string.
    fn media_id(&self) -> Option<String>;

    fn title(&self) -> Option<String>;

    fn description(&self) -> Option<String>;

    fn subtitle(&self) -> Option<String>;

    fn icon_url(&self) -> Option<String>;
}
