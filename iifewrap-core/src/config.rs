//! Job and manifest definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};
use crate::preset::WrapPreset;

/// One rewrite: where to read, what to trim, what to wrap with, where to
/// write. Trim counts default to zero and header/footer default to empty, so
/// a bare job is a plain copy-with-separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformJob {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub footer: Vec<String>,
    #[serde(default)]
    pub top_trim: usize,
    #[serde(default)]
    pub bottom_trim: usize,
}

impl TransformJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = header;
        self
    }

    pub fn with_footer(mut self, footer: Vec<String>) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_trim(mut self, top: usize, bottom: usize) -> Self {
        self.top_trim = top;
        self.bottom_trim = bottom;
        self
    }

    /// Replace header and footer with a preset pair.
    pub fn with_preset(mut self, preset: WrapPreset) -> Self {
        self.header = preset.header;
        self.footer = preset.footer;
        self
    }
}

/// An ordered batch of jobs, loaded from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub jobs: Vec<TransformJob>,
}

impl Manifest {
    pub fn load(path: &Path) -> TransformResult<Self> {
        let bytes = fs::read(path).map_err(|err| TransformError::read(path, err))?;
        serde_json::from_slice(&bytes).map_err(|err| TransformError::Manifest {
            path: path.to_path_buf(),
            source: err,
        })
    }
}
