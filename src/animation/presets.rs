use crate::animation::{
    ease::Ease,
    keyframe::{Keyframe, Property},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Keyframe templates offered by the editor's "add animation" menu.
pub enum AnimationPreset {
    FadeIn,
    FadeOut,
    SlideInLeft,
    SlideInRight,
    SlideInUp,
    SlideInDown,
    ScaleIn,
    BounceIn,
    RotateIn,
}

impl AnimationPreset {
    pub const ALL: [AnimationPreset; 9] = [
        Self::FadeIn,
        Self::FadeOut,
        Self::SlideInLeft,
        Self::SlideInRight,
        Self::SlideInUp,
        Self::SlideInDown,
        Self::ScaleIn,
        Self::BounceIn,
        Self::RotateIn,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::FadeIn => "fadeIn",
            Self::FadeOut => "fadeOut",
            Self::SlideInLeft => "slideInLeft",
            Self::SlideInRight => "slideInRight",
            Self::SlideInUp => "slideInUp",
            Self::SlideInDown => "slideInDown",
            Self::ScaleIn => "scaleIn",
            Self::BounceIn => "bounceIn",
            Self::RotateIn => "rotateIn",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// The keyframe this preset expands to, starting at the element's start time.
    pub fn keyframe(self) -> Keyframe {
        let (property, from, to, ease, duration) = match self {
            Self::FadeIn => (Property::Opacity, 0.0, 1.0, Ease::Power2Out, 500.0),
            Self::FadeOut => (Property::Opacity, 1.0, 0.0, Ease::Power2In, 500.0),
            Self::SlideInLeft => (Property::X, -200.0, 0.0, Ease::Power3Out, 600.0),
            Self::SlideInRight => (Property::X, 200.0, 0.0, Ease::Power3Out, 600.0),
            Self::SlideInUp => (Property::Y, 200.0, 0.0, Ease::Power3Out, 600.0),
            Self::SlideInDown => (Property::Y, -200.0, 0.0, Ease::Power3Out, 600.0),
            Self::ScaleIn => (Property::Scale, 0.0, 1.0, Ease::BackOut, 500.0),
            Self::BounceIn => (Property::Scale, 0.0, 1.0, Ease::ElasticOut, 800.0),
            Self::RotateIn => (Property::Rotation, -180.0, 0.0, Ease::Power2Out, 600.0),
        };
        Keyframe::new(property, from, to)
            .with_ease(ease)
            .with_duration(duration)
            .with_start_time(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
