//! postmotion is the timeline animation engine of a social-media post editor.
//!
//! It turns element records (text, shape and image boxes with timed keyframes) plus a
//! playback time into the property values a canvas view paints.
//!
//! # Pipeline overview
//!
//! 1. **Store**: element records live in a [`ProjectStore`] and change only through named
//!    operations ([`ProjectStore::add_element`], [`ProjectStore::apply`], ...).
//! 2. **Clock**: a [`PlaybackClock`] produces the current time on every tick, or a scrub
//!    sets it directly.
//! 3. **Evaluate**: [`evaluate`] maps `(element, time)` to [`AnimatedValues`];
//!    [`Evaluator::eval_frame`] does it for a whole project and resolves transforms.
//!
//! Evaluation is pure and recomputed every tick; nothing is cached between frames.
#![forbid(unsafe_code)]

mod animation;
mod composition;
mod eval;
mod foundation;
mod playback;

pub use animation::ease::Ease;
pub use animation::keyframe::{Keyframe, KeyframePatch, Property};
pub use animation::presets::AnimationPreset;
pub use composition::model::{
    BaseTransform, Element, ElementKind, ImageProps, ObjectFit, Project, ShapeProps, ShapeType,
    TextAlign, TextProps,
};
pub use composition::ops::{
    CanvasUpdate, DesignOperation, DesignOperations, ElementDraft, ElementPatch, OpOutcome,
};
pub use composition::store::ProjectStore;
pub use eval::evaluator::{AnimatedValues, EvaluatedFrame, EvaluatedNode, Evaluator, evaluate};
pub use foundation::core::{
    Affine, Canvas, CanvasPreset, DEFAULT_ELEMENT_END_MS, DEFAULT_KEYFRAME_DURATION_MS,
    DEFAULT_PROJECT_DURATION_MS, Vec2, clamp, format_time,
};
pub use foundation::error::{MotionError, MotionResult};
pub use playback::clock::{PlaybackClock, PlaybackState, PlaybackStatus};
pub use playback::driver::{ManualTimeSource, SystemTimeSource, TimeSource, drive};
