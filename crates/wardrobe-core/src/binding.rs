//! Stable binding keys and endpoint resolution against the host graph.
//!
//! A `Binding` identifies one animatable target: the `/`-joined hierarchy
//! path from the designated root plus the endpoint kind. Two frame entries
//! address the same target iff their bindings compare equal. Resolution
//! failures are per-endpoint and recoverable; only a sequence whose targets
//! never reach a root-marked ancestor is fatal.

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ValidationError};
use crate::frame::{Frame, FrameEntry};
use crate::graph::{NodeId, ObjectGraph};

/// What a binding animates at the end of its path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EndpointKind {
    /// The object's active flag.
    ObjectActive,
    /// One render slot on the object's renderer.
    MaterialSlot(u32),
    /// A named blend target on the object's mesh.
    BlendWeight(String),
}

/// Stable identity of one animatable target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Binding {
    /// Hierarchy path relative to the designated root; empty for the root
    /// itself.
    pub path: String,
    pub endpoint: EndpointKind,
}

/// Resolves frame entries to bindings relative to a designated root node.
#[derive(Debug)]
pub struct BindingResolver<'g, G: ObjectGraph> {
    graph: &'g G,
    root: NodeId,
}

impl<'g, G: ObjectGraph> BindingResolver<'g, G> {
    /// Designate the root by walking upward from frame targets (frames in
    /// order, entries in order) until one reaches a root-marked ancestor.
    pub fn designate(graph: &'g G, frames: &[&Frame]) -> Result<Self, ValidationError> {
        for frame in frames {
            for entry in &frame.entries {
                let Some(target) = entry.target() else {
                    continue;
                };
                if !graph.contains(target) {
                    continue;
                }
                if let Some(root) = find_root(graph, target) {
                    return Ok(Self { graph, root });
                }
            }
        }
        Err(ValidationError::RootNotFound)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Hierarchy path from just below the root down to `target`.
    pub fn relative_path(&self, target: NodeId) -> Result<String, ResolveError> {
        if !self.graph.contains(target) {
            return Err(ResolveError::MissingTarget);
        }
        let mut segments: Vec<&str> = Vec::new();
        let mut node = target;
        while node != self.root {
            let name = self.graph.name(node).ok_or(ResolveError::MissingTarget)?;
            segments.push(name);
            node = self.graph.parent(node).ok_or(ResolveError::OutsideRoot)?;
        }
        segments.reverse();
        Ok(segments.join("/"))
    }

    /// Binding for one frame entry, or the recoverable reason it is skipped.
    pub fn resolve(&self, entry: &FrameEntry) -> Result<Binding, ResolveError> {
        let target = entry.target().ok_or(ResolveError::MissingTarget)?;
        let path = self.relative_path(target)?;
        let endpoint = match entry {
            FrameEntry::Object(_) => EndpointKind::ObjectActive,
            FrameEntry::Material(m) => {
                let count = self
                    .graph
                    .material_slot_count(target)
                    .ok_or(ResolveError::MissingTarget)?;
                if m.slot as usize >= count {
                    return Err(ResolveError::SlotOutOfRange {
                        slot: m.slot,
                        count,
                    });
                }
                EndpointKind::MaterialSlot(m.slot)
            }
            FrameEntry::BlendWeight(b) => {
                if b.property.trim().is_empty() {
                    return Err(ResolveError::EmptyProperty);
                }
                EndpointKind::BlendWeight(b.property.clone())
            }
        };
        Ok(Binding { path, endpoint })
    }
}

fn find_root(graph: &impl ObjectGraph, from: NodeId) -> Option<NodeId> {
    let mut node = from;
    loop {
        if graph.has_root_marker(node) {
            return Some(node);
        }
        node = graph.parent(node)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{BlendWeightState, MaterialState, ObjectState};
    use crate::graph::SceneModel;

    fn object_entry(target: NodeId) -> FrameEntry {
        FrameEntry::Object(ObjectState {
            target: Some(target),
            active: true,
        })
    }

    #[test]
    fn designates_root_from_first_resolving_target() {
        let mut scene = SceneModel::new();
        let root = scene.add_root("Avatar");
        let torso = scene.add_child(root, "Torso");
        let hat = scene.add_child(torso, "Hat");

        let frame = Frame {
            entries: vec![object_entry(hat)],
        };
        let resolver = BindingResolver::designate(&scene, &[&frame]).unwrap();
        assert_eq!(resolver.root(), root);
        assert_eq!(resolver.relative_path(hat).unwrap(), "Torso/Hat");
        assert_eq!(resolver.relative_path(root).unwrap(), "");
    }

    #[test]
    fn fails_when_no_target_reaches_a_root() {
        let mut scene = SceneModel::new();
        let loose = scene.add_detached("Prop");
        let frame = Frame {
            entries: vec![object_entry(loose)],
        };
        assert_eq!(
            BindingResolver::designate(&scene, &[&frame]).unwrap_err(),
            ValidationError::RootNotFound
        );
    }

    #[test]
    fn material_slot_range_is_validated() {
        let mut scene = SceneModel::new();
        let root = scene.add_root("Avatar");
        let body = scene.add_child(root, "Body");
        scene.set_material_slots(body, 2);

        let frame = Frame {
            entries: vec![object_entry(body)],
        };
        let resolver = BindingResolver::designate(&scene, &[&frame]).unwrap();

        let in_range = FrameEntry::Material(MaterialState {
            target: Some(body),
            slot: 1,
            active_material: "skin_alt".into(),
            base_material: "skin".into(),
        });
        assert_eq!(
            resolver.resolve(&in_range).unwrap(),
            Binding {
                path: "Body".into(),
                endpoint: EndpointKind::MaterialSlot(1),
            }
        );

        let out_of_range = FrameEntry::Material(MaterialState {
            target: Some(body),
            slot: 2,
            active_material: "skin_alt".into(),
            base_material: "skin".into(),
        });
        assert_eq!(
            resolver.resolve(&out_of_range).unwrap_err(),
            ResolveError::SlotOutOfRange { slot: 2, count: 2 }
        );
    }

    #[test]
    fn blend_weight_requires_property_name() {
        let mut scene = SceneModel::new();
        let root = scene.add_root("Avatar");
        let face = scene.add_child(root, "Face");
        let frame = Frame {
            entries: vec![object_entry(face)],
        };
        let resolver = BindingResolver::designate(&scene, &[&frame]).unwrap();

        let unnamed = FrameEntry::BlendWeight(BlendWeightState {
            target: Some(face),
            property: "  ".into(),
            value: 1.0,
        });
        assert_eq!(
            resolver.resolve(&unnamed).unwrap_err(),
            ResolveError::EmptyProperty
        );
    }

    #[test]
    fn detached_target_is_a_recoverable_skip() {
        let mut scene = SceneModel::new();
        let root = scene.add_root("Avatar");
        let hat = scene.add_child(root, "Hat");
        let loose = scene.add_detached("Prop");

        let frame = Frame {
            entries: vec![object_entry(hat), object_entry(loose)],
        };
        let resolver = BindingResolver::designate(&scene, &[&frame]).unwrap();
        assert_eq!(
            resolver.resolve(&object_entry(loose)).unwrap_err(),
            ResolveError::OutsideRoot
        );
    }
}
