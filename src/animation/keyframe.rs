use crate::{
    animation::ease::Ease,
    foundation::core::DEFAULT_KEYFRAME_DURATION_MS,
    foundation::error::{MotionError, MotionResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Numeric channel driven by a keyframe.
pub enum Property {
    /// Horizontal position.
    X,
    /// Vertical position.
    Y,
    /// Uniform scale, baseline 1.
    Scale,
    /// Rotation in degrees.
    Rotation,
    /// Opacity in `[0, 1]`.
    Opacity,
}

impl Property {
    /// Every animatable property.
    pub const ALL: [Property; 5] = [
        Self::X,
        Self::Y,
        Self::Scale,
        Self::Rotation,
        Self::Opacity,
    ];

    /// Lowercase record name.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Scale => "scale",
            Self::Rotation => "rotation",
            Self::Opacity => "opacity",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A timed, eased transition of one property.
///
/// Optional fields keep record semantics: the evaluator substitutes defaults for whatever
/// is missing (500 ms duration, 0 ms offset, `power2.out`, current value for endpoints).
pub struct Keyframe {
    /// Synthetic id for list editing; carries no evaluation meaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Driven property.
    pub property: Property,
    /// Value before and at the start of the keyframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    /// Value at and after the end of the keyframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    /// Length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Offset in milliseconds from the owning element's `startTime`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    /// Easing curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

impl Keyframe {
    /// Keyframe from `from` to `to` with every timing field left to its default.
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self {
            id: None,
            property,
            from: Some(from),
            to: Some(to),
            duration: None,
            start_time: None,
            ease: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn with_start_time(mut self, offset_ms: f64) -> Self {
        self.start_time = Some(offset_ms);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn effective_duration(&self) -> f64 {
        self.duration.unwrap_or(DEFAULT_KEYFRAME_DURATION_MS)
    }

    pub fn effective_start_time(&self) -> f64 {
        self.start_time.unwrap_or(0.0)
    }

    pub fn effective_ease(&self) -> Ease {
        self.ease.unwrap_or_default()
    }

    /// Absolute `[start, end)` window given the owning element's start time.
    pub fn window(&self, element_start: f64) -> (f64, f64) {
        let start = element_start + self.effective_start_time();
        (start, start + self.effective_duration())
    }

    /// Check the record before it enters a store.
    pub fn validate(&self) -> MotionResult<()> {
        if let Some(d) = self.duration
            && (!d.is_finite() || d <= 0.0)
        {
            return Err(MotionError::validation(format!(
                "{} keyframe duration must be finite and > 0",
                self.property.name()
            )));
        }
        if let Some(s) = self.start_time
            && (!s.is_finite() || s < 0.0)
        {
            return Err(MotionError::validation(format!(
                "{} keyframe startTime must be finite and >= 0",
                self.property.name()
            )));
        }
        for (label, v) in [("from", self.from), ("to", self.to)] {
            if let Some(v) = v
                && !v.is_finite()
            {
                return Err(MotionError::validation(format!(
                    "{} keyframe '{label}' must be finite",
                    self.property.name()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// In-place edit of a keyframe. `None` leaves a field untouched.
pub struct KeyframePatch {
    #[serde(default)]
    pub property: Option<Property>,
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub ease: Option<Ease>,
}

impl KeyframePatch {
    pub fn apply_to(&self, kf: &mut Keyframe) {
        if let Some(p) = self.property {
            kf.property = p;
        }
        if self.from.is_some() {
            kf.from = self.from;
        }
        if self.to.is_some() {
            kf.to = self.to;
        }
        if self.duration.is_some() {
            kf.duration = self.duration;
        }
        if self.start_time.is_some() {
            kf.start_time = self.start_time;
        }
        if self.ease.is_some() {
            kf.ease = self.ease;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
