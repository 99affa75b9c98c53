//! Error types for timeline synthesis.

use thiserror::Error;

/// Fatal validation failures. Generation is atomic: when one of these is
/// returned, no timeline has been handed out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Every frame was dropped during filtering.
    #[error("no valid frames remain after filtering")]
    NoValidFrames,
    /// The sequence name is empty or whitespace-only.
    #[error("frame sequence has no usable name")]
    EmptyName,
    /// No target in any frame reaches a root-marked ancestor.
    #[error("no root-marked ancestor found for any frame target")]
    RootNotFound,
    /// Zero step budget or a non-positive/non-finite frame rate.
    #[error("invalid configuration: total_steps and frame_rate must be positive")]
    InvalidConfig,
}

/// Recoverable per-endpoint resolution failures. The offending endpoint is
/// skipped and generation continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("target no longer exists")]
    MissingTarget,
    #[error("material slot {slot} out of range (renderer has {count})")]
    SlotOutOfRange { slot: u32, count: usize },
    #[error("blend target property name is empty")]
    EmptyProperty,
    #[error("target does not descend from the designated root")]
    OutsideRoot,
}
