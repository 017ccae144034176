use crate::{
    animation::keyframe::Keyframe,
    composition::model::{BaseTransform, Element, ElementKind, ObjectFit, ShapeType, TextAlign},
    foundation::error::{MotionError, MotionResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// An element as submitted for insertion, before the store assigns identity and timing.
pub struct ElementDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub transform: BaseTransform,
    #[serde(default)]
    pub animations: Vec<Keyframe>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl ElementDraft {
    pub fn new(kind: ElementKind, transform: BaseTransform) -> Self {
        Self {
            name: None,
            transform,
            animations: Vec::new(),
            kind,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn animation(mut self, kf: Keyframe) -> Self {
        self.animations.push(kf);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Partial update of an element. `None` leaves a field untouched.
///
/// The payload fields (`content`, `color`, `fill`, `src`, ...) only apply to the matching
/// element kind; setting one on another kind is a validation error. Unknown keys fail to
/// deserialize.
pub struct ElementPatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub animations: Option<Vec<Keyframe>>,
    pub content: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<u16>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub shape_type: Option<ShapeType>,
    pub fill: Option<String>,
    pub border_radius: Option<f64>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub src: Option<String>,
    pub object_fit: Option<ObjectFit>,
}

impl ElementPatch {
    /// Apply onto `el`. Does not validate the result.
    pub fn apply_to(&self, el: &mut Element) -> MotionResult<()> {
        if let Some(name) = &self.name {
            el.name = name.clone();
        }
        let t = &mut el.transform;
        t.x = self.x.or(t.x);
        t.y = self.y.or(t.y);
        t.rotation = self.rotation.or(t.rotation);
        t.opacity = self.opacity.or(t.opacity);
        if let Some(w) = self.width {
            t.width = w;
        }
        if let Some(h) = self.height {
            t.height = h;
        }
        el.start_time = self.start_time.or(el.start_time);
        el.end_time = self.end_time.or(el.end_time);
        if let Some(v) = self.visible {
            el.visible = v;
        }
        if let Some(l) = self.locked {
            el.locked = l;
        }
        if let Some(anims) = &self.animations {
            el.animations = anims.clone();
        }

        let kind = el.kind.type_name();
        match &mut el.kind {
            ElementKind::Text(text) => {
                if let Some(c) = &self.content {
                    text.content = c.clone();
                }
                if let Some(s) = self.font_size {
                    text.font_size = s;
                }
                if let Some(f) = &self.font_family {
                    text.font_family = f.clone();
                }
                if let Some(w) = self.font_weight {
                    text.font_weight = w;
                }
                if let Some(c) = &self.color {
                    text.color = c.clone();
                }
                if let Some(a) = self.text_align {
                    text.text_align = a;
                }
                self.reject_shape_fields(kind)?;
                self.reject_image_fields(kind)?;
            }
            ElementKind::Shape(shape) => {
                if let Some(t) = self.shape_type {
                    shape.shape_type = t;
                }
                if let Some(f) = &self.fill {
                    shape.fill = f.clone();
                }
                if let Some(r) = self.border_radius {
                    shape.border_radius = r;
                }
                if let Some(s) = &self.stroke {
                    shape.stroke = Some(s.clone());
                }
                if let Some(w) = self.stroke_width {
                    shape.stroke_width = Some(w);
                }
                self.reject_text_fields(kind)?;
                self.reject_image_fields(kind)?;
            }
            ElementKind::Image(image) => {
                if let Some(s) = &self.src {
                    image.src = s.clone();
                }
                if let Some(f) = self.object_fit {
                    image.object_fit = f;
                }
                self.reject_text_fields(kind)?;
                self.reject_shape_fields(kind)?;
            }
        }
        Ok(())
    }

    fn reject_text_fields(&self, kind: &str) -> MotionResult<()> {
        reject_foreign(kind, "content", self.content.is_some())?;
        reject_foreign(kind, "fontSize", self.font_size.is_some())?;
        reject_foreign(kind, "fontFamily", self.font_family.is_some())?;
        reject_foreign(kind, "fontWeight", self.font_weight.is_some())?;
        reject_foreign(kind, "color", self.color.is_some())?;
        reject_foreign(kind, "textAlign", self.text_align.is_some())
    }

    fn reject_shape_fields(&self, kind: &str) -> MotionResult<()> {
        reject_foreign(kind, "shapeType", self.shape_type.is_some())?;
        reject_foreign(kind, "fill", self.fill.is_some())?;
        reject_foreign(kind, "borderRadius", self.border_radius.is_some())?;
        reject_foreign(kind, "stroke", self.stroke.is_some())?;
        reject_foreign(kind, "strokeWidth", self.stroke_width.is_some())
    }

    fn reject_image_fields(&self, kind: &str) -> MotionResult<()> {
        reject_foreign(kind, "src", self.src.is_some())?;
        reject_foreign(kind, "objectFit", self.object_fit.is_some())
    }
}

fn reject_foreign(kind: &str, field: &str, present: bool) -> MotionResult<()> {
    if present {
        return Err(MotionError::validation(format!(
            "'{field}' does not apply to {kind} elements"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Canvas-level edit: switch platform preset and/or timeline length.
pub struct CanvasUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// One edit emitted by the content-generation collaborator.
pub enum DesignOperation {
    AddElement { element: ElementDraft },
    UpdateElement { id: String, updates: ElementPatch },
    DeleteElement { id: String },
    UpdateCanvas { updates: CanvasUpdate },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A batch of design operations, applied in order.
pub struct DesignOperations {
    pub operations: Vec<DesignOperation>,
}

impl DesignOperations {
    pub fn from_json(s: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// What applying one operation did.
pub enum OpOutcome {
    Added { id: String },
    Updated { id: String },
    Deleted { id: String },
    CanvasUpdated,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/ops.rs"]
mod tests;
