//! Keyframes and step-hold curves with tolerance-aware merging.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Two keyframe times closer than this refer to the same sample.
pub const TIME_EPSILON: f32 = 1e-6;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Seconds from clip start.
    pub time: f32,
    pub value: Value,
}

/// Ordered step-hold keyframe sequence for one binding.
///
/// Invariant: key times strictly increase, pairwise separated by more than
/// [`TIME_EPSILON`]. Interpolation is constant-hold; a key's value persists
/// until the next key.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `(time, value)` preserving ascending order. A key already
    /// within [`TIME_EPSILON`] of `time` is overwritten in place, so the
    /// last write wins and near-duplicate times never accumulate.
    pub fn merge(&mut self, time: f32, value: Value) {
        if let Some(existing) = self
            .keys
            .iter_mut()
            .find(|k| (k.time - time).abs() <= TIME_EPSILON)
        {
            existing.value = value;
            return;
        }
        let at = self.keys.partition_point(|k| k.time < time);
        self.keys.insert(at, Keyframe { time, value });
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Value held at `time` (hold-left; times before the first key hold the
    /// first key's value).
    pub fn sample(&self, time: f32) -> Option<&Value> {
        self.keys
            .iter()
            .rev()
            .find(|k| k.time <= time + TIME_EPSILON)
            .or_else(|| self.keys.first())
            .map(|k| &k.value)
    }
}
