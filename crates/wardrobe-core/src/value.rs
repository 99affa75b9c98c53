//! Animatable value kinds produced by timeline synthesis.
//!
//! All three kinds are step-only: curves hold a value constant until the
//! next keyframe, so no blending or easing math exists for them.

use serde::{Deserialize, Serialize};

/// Small string key naming a material asset in the host.
pub type MaterialRef = String;

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Float,
    Material,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Object-active flag.
    Bool(bool),
    /// Blend-target weight.
    Float(f32),
    /// Material occupying a render slot.
    Material(MaterialRef),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Float(_) => ValueKind::Float,
            Value::Material(_) => ValueKind::Material,
        }
    }
}
