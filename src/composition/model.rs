use std::collections::BTreeSet;

use crate::{
    animation::keyframe::Keyframe,
    foundation::core::{Canvas, DEFAULT_ELEMENT_END_MS, DEFAULT_PROJECT_DURATION_MS},
    foundation::error::{MotionError, MotionResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A social post project: a canvas, a timeline length and an ordered element list.
///
/// JSON field names mirror the editor's records. Elements are painted in list order.
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Output canvas.
    #[serde(default)]
    pub canvas: Canvas,
    /// Total timeline length in milliseconds.
    #[serde(default = "default_project_duration")]
    pub duration: f64,
    /// Elements in paint order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

fn default_project_duration() -> f64 {
    DEFAULT_PROJECT_DURATION_MS
}

impl Project {
    /// Empty project with the default 5 s timeline.
    pub fn new(id: impl Into<String>, name: impl Into<String>, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            canvas,
            duration: DEFAULT_PROJECT_DURATION_MS,
            elements: Vec::new(),
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Validate project invariants and every element record.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(MotionError::validation(
                "project duration must be finite and > 0",
            ));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MotionError::validation("canvas width/height must be > 0"));
        }
        let mut seen = BTreeSet::new();
        for el in &self.elements {
            if !seen.insert(el.id.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate element id '{}'",
                    el.id
                )));
            }
            el.validate()?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An animatable visual unit on the canvas.
pub struct Element {
    /// Opaque identifier, assigned once by the store.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Base transform shared by every element kind.
    #[serde(flatten)]
    pub transform: BaseTransform,
    /// Absolute start of the visibility window in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    /// Absolute end of the visibility window in milliseconds (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    /// Keyframes in insertion order.
    #[serde(default)]
    pub animations: Vec<Keyframe>,
    /// Render flag; hidden elements are skipped by frame evaluation.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Editor lock flag.
    #[serde(default)]
    pub locked: bool,
    /// Kind-specific payload, opaque to the engine.
    #[serde(flatten)]
    pub kind: ElementKind,
}

fn default_true() -> bool {
    true
}

impl Element {
    /// Effective `[start, end]` visibility window.
    pub fn window(&self) -> (f64, f64) {
        (
            self.start_time.unwrap_or(0.0),
            self.end_time.unwrap_or(DEFAULT_ELEMENT_END_MS),
        )
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.id.trim().is_empty() {
            return Err(MotionError::validation("element id must be non-empty"));
        }
        let (start, end) = self.window();
        if !start.is_finite() || !end.is_finite() {
            return Err(MotionError::validation(format!(
                "element '{}' start/end must be finite",
                self.id
            )));
        }
        if start < 0.0 {
            return Err(MotionError::validation(format!(
                "element '{}' startTime must be >= 0",
                self.id
            )));
        }
        if start > end {
            return Err(MotionError::validation(format!(
                "element '{}' has invalid window (startTime > endTime)",
                self.id
            )));
        }
        self.transform
            .validate()
            .map_err(|e| MotionError::validation(format!("element '{}': {e}", self.id)))?;
        for kf in &self.animations {
            kf.validate()
                .map_err(|e| MotionError::validation(format!("element '{}': {e}", self.id)))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Position, size, rotation and opacity of an element before animation.
///
/// `x`, `y`, `rotation` and `opacity` may be absent in a record; evaluation then uses
/// 0, 0, 0 and 1.
pub struct BaseTransform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl BaseTransform {
    /// Transform placed at `(x, y)` with the given size.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width,
            height,
            rotation: None,
            opacity: None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        for (name, v) in [
            ("x", self.x),
            ("y", self.y),
            ("rotation", self.rotation),
            ("width", Some(self.width)),
            ("height", Some(self.height)),
        ] {
            if let Some(v) = v
                && !v.is_finite()
            {
                return Err(format!("{name} must be finite"));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err("width/height must be >= 0".to_owned());
        }
        if let Some(o) = self.opacity
            && !(0.0..=1.0).contains(&o)
        {
            return Err("opacity must be in [0, 1]".to_owned());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Kind-specific element payload.
pub enum ElementKind {
    /// Text block.
    Text(TextProps),
    /// Rectangle or circle.
    Shape(ShapeProps),
    /// Raster image.
    Image(ImageProps),
}

impl ElementKind {
    /// Record `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
            Self::Image(_) => "image",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Text payload.
pub struct TextProps {
    pub content: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: u16,
    #[serde(default = "default_text_color")]
    pub color: String,
    #[serde(default)]
    pub text_align: TextAlign,
}

fn default_font_size() -> f64 {
    24.0
}

fn default_font_family() -> String {
    "Inter".to_owned()
}

fn default_font_weight() -> u16 {
    400
}

fn default_text_color() -> String {
    "#ffffff".to_owned()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Shape payload.
pub struct ShapeProps {
    pub shape_type: ShapeType,
    pub fill: String,
    #[serde(default)]
    pub border_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Image payload.
pub struct ImageProps {
    /// Source URL or placeholder.
    pub src: String,
    #[serde(default)]
    pub object_fit: ObjectFit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
