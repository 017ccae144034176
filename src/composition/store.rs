use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::keyframe::{Keyframe, KeyframePatch},
    animation::presets::AnimationPreset,
    composition::model::{Element, Project},
    composition::ops::{
        CanvasUpdate, DesignOperation, DesignOperations, ElementDraft, ElementPatch, OpOutcome,
    },
    foundation::core::{Canvas, CanvasPreset},
    foundation::error::{MotionError, MotionResult},
};

/// Element records keyed by id, mutated only through named operations.
///
/// Every operation validates the edited record before committing it, so a failed
/// operation leaves the store untouched. Reads hand out shared references; evaluation
/// works from those and never mutates them.
#[derive(Clone, Debug)]
pub struct ProjectStore {
    id: String,
    name: String,
    canvas: Canvas,
    duration: f64,
    records: BTreeMap<String, Element>,
    order: Vec<String>,
    next_element: u64,
    next_keyframe: u64,
}

impl ProjectStore {
    /// Empty project on the given canvas preset.
    pub fn new(id: impl Into<String>, preset: CanvasPreset) -> Self {
        Self::from_parts(
            Project::new(id, "Untitled Project", Canvas::from_preset(preset)),
            BTreeMap::new(),
            Vec::new(),
        )
    }

    /// Load an existing project after validating it.
    pub fn from_project(mut project: Project) -> MotionResult<Self> {
        project.validate()?;
        let elements = std::mem::take(&mut project.elements);
        let order = elements.iter().map(|e| e.id.clone()).collect();
        let records = elements.into_iter().map(|e| (e.id.clone(), e)).collect();
        Ok(Self::from_parts(project, records, order))
    }

    fn from_parts(project: Project, records: BTreeMap<String, Element>, order: Vec<String>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            canvas: project.canvas,
            duration: project.duration,
            records,
            order,
            next_element: 1,
            next_keyframe: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Timeline length in milliseconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.records.get(id)
    }

    /// Elements in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Owned project record in paint order.
    pub fn snapshot(&self) -> Project {
        Project {
            id: self.id.clone(),
            name: self.name.clone(),
            canvas: self.canvas.clone(),
            duration: self.duration,
            elements: self.elements().cloned().collect(),
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) -> MotionResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MotionError::validation("project name must be non-empty"));
        }
        self.name = name;
        Ok(())
    }

    /// Insert a new element at the top of the paint order.
    ///
    /// The element gets a fresh id, a default `"{type} {n}"` name when none is given,
    /// `visible = true`, `locked = false` and a window spanning the whole timeline.
    #[tracing::instrument(skip(self, draft), fields(kind = draft.kind.type_name()))]
    pub fn add_element(&mut self, draft: ElementDraft) -> MotionResult<String> {
        let id = self.alloc_element_id();
        let name = draft
            .name
            .unwrap_or_else(|| format!("{} {}", draft.kind.type_name(), self.order.len() + 1));
        let mut el = Element {
            id: id.clone(),
            name,
            transform: draft.transform,
            start_time: Some(0.0),
            end_time: Some(self.duration),
            animations: draft.animations,
            visible: true,
            locked: false,
            kind: draft.kind,
        };
        let mut reserved: BTreeSet<String> =
            el.animations.iter().filter_map(|kf| kf.id.clone()).collect();
        for kf in &mut el.animations {
            if kf.id.is_none() {
                let kf_id = self.alloc_keyframe_id(&reserved);
                reserved.insert(kf_id.clone());
                kf.id = Some(kf_id);
            }
        }
        el.validate()?;

        tracing::debug!(%id, "element added");
        self.order.push(id.clone());
        self.records.insert(id.clone(), el);
        Ok(id)
    }

    #[tracing::instrument(skip(self, patch))]
    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> MotionResult<()> {
        self.edit(id, |el| patch.apply_to(el))
    }

    #[tracing::instrument(skip(self))]
    pub fn delete_element(&mut self, id: &str) -> MotionResult<Element> {
        let el = self
            .records
            .remove(id)
            .ok_or_else(|| MotionError::not_found(format!("element '{id}'")))?;
        self.order.retain(|o| o != id);
        tracing::debug!(%id, "element deleted");
        Ok(el)
    }

    /// Append a keyframe to an element, assigning it a list-editing id if it has none.
    pub fn add_keyframe(&mut self, element_id: &str, mut kf: Keyframe) -> MotionResult<String> {
        let kf_id = match &kf.id {
            Some(existing) => existing.clone(),
            None => self.alloc_keyframe_id(&BTreeSet::new()),
        };
        kf.id = Some(kf_id.clone());
        self.edit(element_id, move |el| {
            el.animations.push(kf);
            Ok(())
        })?;
        Ok(kf_id)
    }

    pub fn apply_preset(
        &mut self,
        element_id: &str,
        preset: AnimationPreset,
    ) -> MotionResult<String> {
        self.add_keyframe(element_id, preset.keyframe())
    }

    pub fn update_keyframe(
        &mut self,
        element_id: &str,
        index: usize,
        patch: &KeyframePatch,
    ) -> MotionResult<()> {
        self.edit(element_id, |el| {
            let kf = el.animations.get_mut(index).ok_or_else(|| {
                MotionError::not_found(format!("keyframe {index} of element '{element_id}'"))
            })?;
            patch.apply_to(kf);
            Ok(())
        })
    }

    pub fn remove_keyframe(&mut self, element_id: &str, index: usize) -> MotionResult<Keyframe> {
        let mut removed = None;
        self.edit(element_id, |el| {
            if index >= el.animations.len() {
                return Err(MotionError::not_found(format!(
                    "keyframe {index} of element '{element_id}'"
                )));
            }
            removed = Some(el.animations.remove(index));
            Ok(())
        })?;
        removed.ok_or_else(|| MotionError::not_found(format!("keyframe {index}")))
    }

    /// Switch the canvas preset and/or the timeline length.
    ///
    /// Changing the duration leaves element windows untouched.
    pub fn update_canvas(&mut self, update: &CanvasUpdate) -> MotionResult<()> {
        let canvas = match &update.preset {
            Some(key) => {
                let preset = CanvasPreset::from_key(key).ok_or_else(|| {
                    MotionError::validation(format!("unknown canvas preset '{key}'"))
                })?;
                Canvas::from_preset(preset)
            }
            None => self.canvas.clone(),
        };
        let duration = update.duration.unwrap_or(self.duration);
        if !duration.is_finite() || duration <= 0.0 {
            return Err(MotionError::validation(
                "project duration must be finite and > 0",
            ));
        }
        self.canvas = canvas;
        self.duration = duration;
        Ok(())
    }

    pub fn apply(&mut self, op: DesignOperation) -> MotionResult<OpOutcome> {
        match op {
            DesignOperation::AddElement { element } => {
                let id = self.add_element(element)?;
                Ok(OpOutcome::Added { id })
            }
            DesignOperation::UpdateElement { id, updates } => {
                self.update_element(&id, &updates)?;
                Ok(OpOutcome::Updated { id })
            }
            DesignOperation::DeleteElement { id } => {
                self.delete_element(&id)?;
                Ok(OpOutcome::Deleted { id })
            }
            DesignOperation::UpdateCanvas { updates } => {
                self.update_canvas(&updates)?;
                Ok(OpOutcome::CanvasUpdated)
            }
        }
    }

    /// Apply a batch all-or-nothing: on the first failure nothing is committed.
    #[tracing::instrument(skip(self, batch), fields(ops = batch.operations.len()))]
    pub fn apply_all(&mut self, batch: DesignOperations) -> MotionResult<Vec<OpOutcome>> {
        let mut staged = self.clone();
        let outcomes = batch
            .operations
            .into_iter()
            .map(|op| staged.apply(op))
            .collect::<MotionResult<Vec<_>>>()?;
        *self = staged;
        Ok(outcomes)
    }

    fn edit(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Element) -> MotionResult<()>,
    ) -> MotionResult<()> {
        let current = self
            .records
            .get(id)
            .ok_or_else(|| MotionError::not_found(format!("element '{id}'")))?;
        let mut next = current.clone();
        f(&mut next)?;
        next.validate()?;
        self.records.insert(id.to_owned(), next);
        tracing::debug!(%id, "element updated");
        Ok(())
    }

    fn alloc_element_id(&mut self) -> String {
        loop {
            let id = format!("el-{}", self.next_element);
            self.next_element += 1;
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    /// Next free `anim-N` id, skipping ids already in the store and those in `reserved`.
    fn alloc_keyframe_id(&mut self, reserved: &BTreeSet<String>) -> String {
        loop {
            let id = format!("anim-{}", self.next_keyframe);
            self.next_keyframe += 1;
            let taken = reserved.contains(&id)
                || self
                    .records
                    .values()
                    .flat_map(|e| e.animations.iter())
                    .any(|k| k.id.as_deref() == Some(id.as_str()));
            if !taken {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/store.rs"]
mod tests;
