use crate::{
    animation::keyframe::Property,
    composition::model::Element,
    foundation::core::{Affine, Vec2},
    foundation::error::{MotionError, MotionResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Property values of one element at one point in time.
pub struct AnimatedValues {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    /// Degrees.
    pub rotation: f64,
    pub opacity: f64,
}

impl AnimatedValues {
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Rotation => self.rotation,
            Property::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Scale => self.scale = value,
            Property::Rotation => self.rotation = value,
            Property::Opacity => self.opacity = value,
        }
    }

    /// Renderers skip elements whose opacity is exactly zero.
    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }

    /// Placement of a `width` x `height` box: translated to `(x, y)`, then rotated and
    /// scaled about its own center.
    pub fn to_affine(&self, width: f64, height: f64) -> Affine {
        let center = Vec2::new(width / 2.0, height / 2.0);
        Affine::translate(Vec2::new(self.x, self.y))
            * Affine::translate(center)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

/// Compute the animated values of `element` at absolute time `current_time` (ms).
///
/// Outside the element's `[startTime, endTime]` window the base values are returned with
/// opacity forced to 0 and no keyframe is looked at. Inside it, keyframes are applied in
/// list order and each one overwrites its property, so when windows overlap the last
/// keyframe in the list wins. An omitted `from`/`to` falls back to the value the property
/// holds at that point of the pass, including values written by earlier keyframes.
///
/// Never fails: missing fields take their defaults and non-finite numbers propagate.
pub fn evaluate(element: &Element, current_time: f64) -> AnimatedValues {
    let base = &element.transform;
    let mut values = AnimatedValues {
        x: base.x.unwrap_or(0.0),
        y: base.y.unwrap_or(0.0),
        scale: 1.0,
        rotation: base.rotation.unwrap_or(0.0),
        opacity: base.opacity.unwrap_or(1.0),
    };

    let (element_start, element_end) = element.window();
    if current_time < element_start || current_time > element_end {
        values.opacity = 0.0;
        return values;
    }

    for kf in &element.animations {
        let (anim_start, anim_end) = kf.window(element_start);
        if current_time < anim_start {
            if let Some(from) = kf.from {
                values.set(kf.property, from);
            }
        } else if current_time >= anim_end {
            if let Some(to) = kf.to {
                values.set(kf.property, to);
            }
        } else {
            let progress = (current_time - anim_start) / kf.effective_duration();
            let eased = kf.effective_ease().apply(progress);
            let current = values.get(kf.property);
            let from = kf.from.unwrap_or(current);
            let to = kf.to.unwrap_or(current);
            values.set(kf.property, from + (to - from) * eased);
        }
    }

    values
}

#[derive(Clone, Debug, serde::Serialize)]
/// Every renderable element of a project at one time, in paint order.
pub struct EvaluatedFrame {
    /// Evaluated time in milliseconds.
    pub time: f64,
    pub nodes: Vec<EvaluatedNode>,
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One element ready to paint.
pub struct EvaluatedNode {
    pub element_id: String,
    pub values: AnimatedValues,
    /// Resolved placement of the element's box on the canvas.
    pub transform: Affine,
}

/// Stateless evaluator from element records to frames.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `elements` at `time`, dropping hidden ones (`visible == false`) and
    /// those whose opacity evaluates to 0.
    #[tracing::instrument(skip(elements))]
    pub fn eval_frame<'a>(
        elements: impl IntoIterator<Item = &'a Element>,
        time: f64,
    ) -> MotionResult<EvaluatedFrame> {
        if time.is_nan() || time < 0.0 {
            return Err(MotionError::evaluation("time must be >= 0"));
        }

        let nodes = elements
            .into_iter()
            .filter(|el| el.visible)
            .filter_map(|el| {
                let values = evaluate(el, time);
                if values.is_hidden() {
                    return None;
                }
                Some(EvaluatedNode {
                    element_id: el.id.clone(),
                    transform: values.to_affine(el.transform.width, el.transform.height),
                    values,
                })
            })
            .collect();

        Ok(EvaluatedFrame { time, nodes })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
