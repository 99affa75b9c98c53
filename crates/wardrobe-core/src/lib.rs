//! Wardrobe core (engine-agnostic)
//!
//! Converts an ordered sequence of appearance states — object visibility,
//! material-slot occupancy, blend-target weights — into compact step-hold
//! keyframe timelines. One frame yields an on/off timeline pair, two frames
//! an A/B pair, three or more a single timeline that steps through the
//! frames over a fixed step budget. Generation is synchronous, deterministic,
//! and atomic: a call returns either the full bundle or a validation error.

pub mod binding;
pub mod config;
pub mod curve;
pub mod error;
pub mod frame;
pub mod graph;
pub mod region;
pub mod synth;
pub mod timeline;
pub mod value;

// Re-exports for consumers (adapters)
pub use binding::{Binding, BindingResolver, EndpointKind};
pub use config::Config;
pub use curve::{Curve, Keyframe, TIME_EPSILON};
pub use error::{ResolveError, ValidationError};
pub use frame::{BlendWeightState, Frame, FrameEntry, FrameSequence, MaterialState, ObjectState};
pub use graph::{NodeId, ObjectGraph, SceneModel};
pub use region::{plan_regions, TimeRegion};
pub use synth::{select_mode, synthesize, Mode};
pub use timeline::{CurveTrack, Timeline};
pub use value::{MaterialRef, Value, ValueKind};
