//! Mode selection and the three generation strategies.
//!
//! `synthesize` is the only entry point: a pure function from
//! `(FrameSequence, &graph, Config)` to a timeline bundle or a fatal
//! validation error. All fatal checks run before any timeline is assembled,
//! so a partial bundle can never escape. Per-endpoint resolution failures
//! are logged and skipped without aborting the run.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::binding::{Binding, BindingResolver};
use crate::config::Config;
use crate::curve::TIME_EPSILON;
use crate::error::{ResolveError, ValidationError};
use crate::frame::{Frame, FrameEntry, FrameSequence};
use crate::graph::ObjectGraph;
use crate::region::plan_regions;
use crate::timeline::Timeline;
use crate::value::Value;

/// Generation strategy, chosen from the number of valid frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// One frame: a `_on`/`_off` timeline pair.
    OnOff,
    /// Two frames: an `_A`/`_B` timeline pair.
    Ab,
    /// Three or more frames: one timeline stepping through the frames over
    /// the full step budget.
    Linear,
}

/// Strategy for a valid frame count: 1 → OnOff, 2 → AB, 3+ → Linear.
pub fn select_mode(frame_count: usize) -> Option<Mode> {
    match frame_count {
        0 => None,
        1 => Some(Mode::OnOff),
        2 => Some(Mode::Ab),
        _ => Some(Mode::Linear),
    }
}

/// Synthesize the timeline bundle for `sequence`.
pub fn synthesize<G: ObjectGraph>(
    sequence: &FrameSequence,
    graph: &G,
    config: &Config,
) -> Result<Vec<Timeline>, ValidationError> {
    config.validate()?;

    let frames: Vec<&Frame> = sequence
        .frames
        .iter()
        .filter(|f| f.is_valid(graph))
        .collect();
    let mode = select_mode(frames.len()).ok_or(ValidationError::NoValidFrames)?;

    let name = sequence.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let resolver = BindingResolver::designate(graph, &frames)?;

    log::debug!(
        "synthesizing '{name}': {mode:?} over {} valid frame(s)",
        frames.len()
    );

    let timelines = match mode {
        Mode::OnOff => gen_on_off(name, frames[0], &resolver, config),
        Mode::Ab => gen_ab(name, frames[0], frames[1], &resolver, config),
        Mode::Linear => gen_linear(name, &frames, &resolver, config),
    };
    Ok(timelines)
}

/// Value an endpoint holds in the clip that selects its frame.
fn active_value(entry: &FrameEntry) -> Value {
    match entry {
        FrameEntry::Object(s) => Value::Bool(s.active),
        FrameEntry::Material(s) => Value::Material(s.active_material.clone()),
        FrameEntry::BlendWeight(s) => Value::Float(s.value),
    }
}

/// Value an endpoint holds in the clip that does NOT select its frame.
/// Object flags invert their configured state; materials return to the base
/// material and blend weights to zero, without inversion.
fn rest_value(entry: &FrameEntry) -> Value {
    match entry {
        FrameEntry::Object(s) => Value::Bool(!s.active),
        FrameEntry::Material(s) => Value::Material(s.base_material.clone()),
        FrameEntry::BlendWeight(_) => Value::Float(0.0),
    }
}

/// Value a binding holds in a Linear region whose frame never mentions it:
/// objects off, the slot's first-recorded base material, weights at zero.
fn absent_value(entry: &FrameEntry) -> Value {
    match entry {
        FrameEntry::Object(_) => Value::Bool(false),
        FrameEntry::Material(s) => Value::Material(s.base_material.clone()),
        FrameEntry::BlendWeight(_) => Value::Float(0.0),
    }
}

fn skip(name: &str, err: &ResolveError) {
    log::warn!("'{name}': skipping endpoint: {err}");
}

fn write_frame<G: ObjectGraph>(
    timeline: &mut Timeline,
    name: &str,
    frame: &Frame,
    resolver: &BindingResolver<'_, G>,
    value_of: fn(&FrameEntry) -> Value,
) {
    for entry in &frame.entries {
        match resolver.resolve(entry) {
            Ok(binding) => timeline.merge_key(&binding, 0.0, value_of(entry)),
            Err(err) => skip(name, &err),
        }
    }
}

/// One frame: `<name>_on` holds every endpoint's active value, `<name>_off`
/// its base/off value. Step-hold makes a single t=0 key constant for the
/// whole clip.
fn gen_on_off<G: ObjectGraph>(
    name: &str,
    frame: &Frame,
    resolver: &BindingResolver<'_, G>,
    config: &Config,
) -> Vec<Timeline> {
    let mut on = Timeline::new(format!("{name}_on"), config.frame_rate);
    let mut off = Timeline::new(format!("{name}_off"), config.frame_rate);
    write_frame(&mut on, name, frame, resolver, active_value);
    write_frame(&mut off, name, frame, resolver, rest_value);
    vec![on, off]
}

/// Two frames: `<name>_A` drives frame A's endpoints to their active values
/// and frame B's to their not-selected values; `<name>_B` mirrors. The
/// not-selected pass runs first so that a binding present in both frames
/// ends up with the selected frame's value (last write wins in the merger).
fn gen_ab<G: ObjectGraph>(
    name: &str,
    frame_a: &Frame,
    frame_b: &Frame,
    resolver: &BindingResolver<'_, G>,
    config: &Config,
) -> Vec<Timeline> {
    let mut timeline_a = Timeline::new(format!("{name}_A"), config.frame_rate);
    let mut timeline_b = Timeline::new(format!("{name}_B"), config.frame_rate);

    write_frame(&mut timeline_a, name, frame_b, resolver, rest_value);
    write_frame(&mut timeline_a, name, frame_a, resolver, active_value);

    write_frame(&mut timeline_b, name, frame_a, resolver, rest_value);
    write_frame(&mut timeline_b, name, frame_b, resolver, active_value);

    vec![timeline_a, timeline_b]
}

/// Three or more frames: one timeline. Each frame owns a region of the step
/// budget; every distinct binding gets a key at each region start (its value
/// there, or the absent default) plus one trailing key holding the last
/// region's value to the end of the budget.
fn gen_linear<G: ObjectGraph>(
    name: &str,
    frames: &[&Frame],
    resolver: &BindingResolver<'_, G>,
    config: &Config,
) -> Vec<Timeline> {
    let regions = plan_regions(frames.len(), config.total_steps);

    // Per region: the value each resolvable binding holds there. Alongside,
    // the absent-region fallback per binding, recorded the first time the
    // binding is seen in frame order. For material slots that pins the base
    // material of whichever frame mentioned the slot first.
    let mut region_values: Vec<HashMap<Binding, Value>> = Vec::with_capacity(frames.len());
    let mut fallbacks: HashMap<Binding, Value> = HashMap::new();

    for frame in frames {
        let mut values = HashMap::new();
        for entry in &frame.entries {
            let binding = match resolver.resolve(entry) {
                Ok(b) => b,
                Err(err) => {
                    skip(name, &err);
                    continue;
                }
            };
            fallbacks
                .entry(binding.clone())
                .or_insert_with(|| absent_value(entry));
            values.insert(binding, active_value(entry));
        }
        region_values.push(values);
    }

    let mut bindings: Vec<(&Binding, &Value)> = fallbacks.iter().collect();
    bindings.sort_by(|a, b| a.0.cmp(b.0));

    let mut timeline = Timeline::new(name, config.frame_rate);
    let end_time = config.total_steps as f32 / config.frame_rate;

    for (binding, fallback) in bindings {
        let mut last_value = fallback.clone();
        for (region, values) in regions.iter().zip(&region_values) {
            let value = values.get(binding).cloned().unwrap_or_else(|| fallback.clone());
            let time = region.start_step as f32 / config.frame_rate;
            last_value = value.clone();
            timeline.merge_key(binding, time, value);
        }
        // Hold the final region's value to the end of the budget, unless a
        // key already sits at the end time.
        let already_ends = timeline
            .track(binding)
            .and_then(|t| t.curve.last())
            .is_some_and(|k| (k.time - end_time).abs() <= TIME_EPSILON);
        if !already_ends {
            timeline.merge_key(binding, end_time, last_value);
        }
    }

    vec![timeline]
}
