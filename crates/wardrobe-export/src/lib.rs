//! Filesystem export adapter for Wardrobe timeline bundles.
//!
//! The core hands finished [`Timeline`] bundles to a [`TimelineSink`]; this
//! crate's [`JsonExporter`] persists each one as a JSON document. Exporting
//! is idempotent: regenerating a sequence overwrites any artifact already at
//! the same name and location. Export failures surface to the caller and
//! never touch the in-memory timelines.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use wardrobe_core::Timeline;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("write timeline artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize timeline: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sink for finished timeline bundles.
pub trait TimelineSink {
    fn export(&mut self, timeline: &Timeline, location: &Path) -> Result<(), ExportError>;
}

/// Writes each timeline as pretty-printed JSON under the output location.
#[derive(Debug, Default, Clone)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    /// Path of the artifact for `timeline` under `location`.
    pub fn artifact_path(timeline: &Timeline, location: &Path) -> PathBuf {
        location.join(format!("{}.json", timeline.name))
    }
}

impl TimelineSink for JsonExporter {
    fn export(&mut self, timeline: &Timeline, location: &Path) -> Result<(), ExportError> {
        fs::create_dir_all(location)?;
        let path = Self::artifact_path(timeline, location);
        let json = serde_json::to_vec_pretty(timeline)?;
        fs::write(&path, json)?;
        log::debug!("wrote timeline '{}' to {}", timeline.name, path.display());
        Ok(())
    }
}

/// Export every timeline of a generation call to `location`.
pub fn export_bundle(
    sink: &mut impl TimelineSink,
    timelines: &[Timeline],
    location: &Path,
) -> Result<(), ExportError> {
    for timeline in timelines {
        sink.export(timeline, location)?;
    }
    Ok(())
}
