pub use kurbo::{Affine, Vec2};

use crate::foundation::error::{MotionError, MotionResult};

/// Timeline horizon used when an element record carries no `endTime`.
pub const DEFAULT_ELEMENT_END_MS: f64 = 5000.0;
/// Keyframe duration used when a keyframe carries no `duration`.
pub const DEFAULT_KEYFRAME_DURATION_MS: f64 = 500.0;
/// Total timeline length of a freshly created project.
pub const DEFAULT_PROJECT_DURATION_MS: f64 = 5000.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas of a project.
pub struct Canvas {
    /// Preset key the dimensions were taken from (`"custom"` when set by hand).
    pub preset: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas sized from a named platform preset.
    pub fn from_preset(preset: CanvasPreset) -> Self {
        let (width, height) = preset.size();
        Self {
            preset: preset.key().to_owned(),
            width,
            height,
        }
    }

    /// Canvas with explicit dimensions.
    pub fn custom(width: u32, height: u32) -> MotionResult<Self> {
        if width == 0 || height == 0 {
            return Err(MotionError::validation("canvas width/height must be > 0"));
        }
        Ok(Self {
            preset: "custom".to_owned(),
            width,
            height,
        })
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::from_preset(CanvasPreset::default())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Social platform canvas sizes offered by the editor.
pub enum CanvasPreset {
    /// Instagram story, 1080x1920.
    #[default]
    InstagramStory,
    /// Instagram post, 1080x1080.
    InstagramPost,
    /// Instagram reel, 1080x1920.
    InstagramReel,
    /// Facebook post, 1200x630.
    FacebookPost,
    /// TikTok, 1080x1920.
    TikTok,
    /// YouTube thumbnail, 1280x720.
    YoutubeThumbnail,
    /// Twitter/X post, 1600x900.
    Twitter,
    /// LinkedIn post, 1200x627.
    LinkedIn,
}

impl CanvasPreset {
    /// Every preset, in catalog order.
    pub const ALL: [CanvasPreset; 8] = [
        Self::InstagramStory,
        Self::InstagramPost,
        Self::InstagramReel,
        Self::FacebookPost,
        Self::TikTok,
        Self::YoutubeThumbnail,
        Self::Twitter,
        Self::LinkedIn,
    ];

    /// Stable key stored in project records.
    pub fn key(self) -> &'static str {
        match self {
            Self::InstagramStory => "ig-story",
            Self::InstagramPost => "ig-post",
            Self::InstagramReel => "ig-reel",
            Self::FacebookPost => "fb-post",
            Self::TikTok => "tiktok",
            Self::YoutubeThumbnail => "youtube-thumb",
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::InstagramStory => "Instagram Story",
            Self::InstagramPost => "Instagram Post",
            Self::InstagramReel => "Instagram Reel",
            Self::FacebookPost => "Facebook Post",
            Self::TikTok => "TikTok",
            Self::YoutubeThumbnail => "YouTube Thumbnail",
            Self::Twitter => "Twitter/X Post",
            Self::LinkedIn => "LinkedIn Post",
        }
    }

    /// `(width, height)` in pixels.
    pub fn size(self) -> (u32, u32) {
        match self {
            Self::InstagramStory | Self::InstagramReel | Self::TikTok => (1080, 1920),
            Self::InstagramPost => (1080, 1080),
            Self::FacebookPost => (1200, 630),
            Self::YoutubeThumbnail => (1280, 720),
            Self::Twitter => (1600, 900),
            Self::LinkedIn => (1200, 627),
        }
    }

    /// Look a preset up by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Clamp `value` into `[min, max]`. A `NaN` value resolves to `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Format milliseconds as seconds with two decimals (`1234.0` -> `"1.23"`).
pub fn format_time(ms: f64) -> String {
    format!("{:.2}", ms / 1000.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
