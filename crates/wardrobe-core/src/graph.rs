//! Host object-graph access.
//!
//! The core never owns the scene. Callers expose their object hierarchy
//! through `ObjectGraph`, and frame entries reference nodes by opaque
//! `NodeId` handles. A handle may go stale (the host deleted the object);
//! `contains` is the liveness check.

use serde::{Deserialize, Serialize};

/// Opaque dense handle into the caller's object graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Read-only view of the host hierarchy used during binding resolution.
pub trait ObjectGraph {
    /// True if the handle refers to a live node.
    fn contains(&self, node: NodeId) -> bool;
    /// Node name as it appears in hierarchy paths.
    fn name(&self, node: NodeId) -> Option<&str>;
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    /// True if the node carries the root marker that anchors relative paths.
    fn has_root_marker(&self, node: NodeId) -> bool;
    /// Number of material slots on the node's renderer, or None if the node
    /// has no renderer.
    fn material_slot_count(&self, node: NodeId) -> Option<usize>;
}

/// Vec-backed [`ObjectGraph`] used by tests, benches, and adapter demos.
#[derive(Default, Debug, Clone)]
pub struct SceneModel {
    nodes: Vec<SceneNode>,
}

#[derive(Debug, Clone)]
struct SceneNode {
    name: String,
    parent: Option<NodeId>,
    root_marker: bool,
    material_slots: Option<usize>,
    alive: bool,
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level node carrying the root marker.
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeId {
        self.push(SceneNode {
            name: name.into(),
            parent: None,
            root_marker: true,
            material_slots: None,
            alive: true,
        })
    }

    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.push(SceneNode {
            name: name.into(),
            parent: Some(parent),
            root_marker: false,
            material_slots: None,
            alive: true,
        })
    }

    /// Add a node with no root-marked ancestor (outside any avatar).
    pub fn add_detached(&mut self, name: impl Into<String>) -> NodeId {
        self.push(SceneNode {
            name: name.into(),
            parent: None,
            root_marker: false,
            material_slots: None,
            alive: true,
        })
    }

    /// Give the node a renderer with `count` material slots.
    pub fn set_material_slots(&mut self, node: NodeId, count: usize) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.material_slots = Some(count);
        }
    }

    /// Mark the node deleted; its handle becomes stale.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.alive = false;
        }
    }

    fn push(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn get(&self, node: NodeId) -> Option<&SceneNode> {
        self.nodes.get(node.0 as usize).filter(|n| n.alive)
    }
}

impl ObjectGraph for SceneModel {
    fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|n| n.name.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    fn has_root_marker(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.root_marker)
    }

    fn material_slot_count(&self, node: NodeId) -> Option<usize> {
        self.get(node).and_then(|n| n.material_slots)
    }
}
