//! Appearance-state input model.
//!
//! A `Frame` is one discrete appearance state: which objects are visible,
//! which material occupies a render slot, and what weight a blend target
//! should hold. Frames arrive from the editor layer and are read-only to
//! this crate. Entry targets are weak: a `None` target or a stale handle
//! marks an entry the host has since invalidated.

use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, ObjectGraph};
use crate::value::MaterialRef;

/// Desired active flag for one object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ObjectState {
    pub target: Option<NodeId>,
    pub active: bool,
}

/// Material occupying one render slot, plus the slot's base material.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MaterialState {
    pub target: Option<NodeId>,
    pub slot: u32,
    pub active_material: MaterialRef,
    pub base_material: MaterialRef,
}

/// Desired weight for one named blend target.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BlendWeightState {
    pub target: Option<NodeId>,
    pub property: String,
    pub value: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "state")]
pub enum FrameEntry {
    Object(ObjectState),
    Material(MaterialState),
    BlendWeight(BlendWeightState),
}

impl FrameEntry {
    pub fn target(&self) -> Option<NodeId> {
        match self {
            FrameEntry::Object(s) => s.target,
            FrameEntry::Material(s) => s.target,
            FrameEntry::BlendWeight(s) => s.target,
        }
    }
}

/// One discrete appearance state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub entries: Vec<FrameEntry>,
}

impl Frame {
    /// A frame is valid iff at least one entry's target resolves.
    pub fn is_valid(&self, graph: &impl ObjectGraph) -> bool {
        self.entries
            .iter()
            .any(|e| e.target().is_some_and(|t| graph.contains(t)))
    }
}

/// Ordered frames plus clip metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrameSequence {
    /// Base name for generated timelines.
    pub name: String,
    /// Where the export adapter should place the artifacts.
    pub output_location: String,
    pub frames: Vec<Frame>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SceneModel;

    #[test]
    fn frame_validity_tracks_target_liveness() {
        let mut scene = SceneModel::new();
        let root = scene.add_root("Avatar");
        let node = scene.add_child(root, "Hat");

        let frame = Frame {
            entries: vec![FrameEntry::Object(ObjectState {
                target: Some(node),
                active: true,
            })],
        };
        assert!(frame.is_valid(&scene));

        scene.remove(node);
        assert!(!frame.is_valid(&scene));

        let empty = Frame::default();
        assert!(!empty.is_valid(&scene));

        let null_target = Frame {
            entries: vec![FrameEntry::Object(ObjectState {
                target: None,
                active: true,
            })],
        };
        assert!(!null_target.is_valid(&scene));
    }
}
