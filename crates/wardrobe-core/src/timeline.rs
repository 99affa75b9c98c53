//! Synthesized output bundles.

use serde::{Deserialize, Serialize};

use crate::binding::Binding;
use crate::curve::Curve;
use crate::value::Value;

/// One binding's curve within a timeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurveTrack {
    pub binding: Binding,
    pub curve: Curve,
}

/// A named bundle of step-hold curves produced by one generation call.
///
/// Tracks stay sorted by binding, so the serialized output never depends on
/// the order in which bindings were discovered. Ownership passes to the
/// caller; the engine keeps no reference after returning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub name: String,
    pub frame_rate: f32,
    pub tracks: Vec<CurveTrack>,
}

impl Timeline {
    pub fn new(name: impl Into<String>, frame_rate: f32) -> Self {
        Self {
            name: name.into(),
            frame_rate,
            tracks: Vec::new(),
        }
    }

    /// Merge one keyframe into the curve for `binding`, creating the track
    /// in sorted position on first write.
    pub fn merge_key(&mut self, binding: &Binding, time: f32, value: Value) {
        match self.tracks.binary_search_by(|t| t.binding.cmp(binding)) {
            Ok(i) => self.tracks[i].curve.merge(time, value),
            Err(i) => {
                let mut curve = Curve::new();
                curve.merge(time, value);
                self.tracks.insert(
                    i,
                    CurveTrack {
                        binding: binding.clone(),
                        curve,
                    },
                );
            }
        }
    }

    pub fn track(&self, binding: &Binding) -> Option<&CurveTrack> {
        self.tracks
            .binary_search_by(|t| t.binding.cmp(binding))
            .ok()
            .map(|i| &self.tracks[i])
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
