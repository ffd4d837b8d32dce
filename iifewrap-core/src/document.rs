//! Terminator-preserving line documents.

use std::fs;
use std::path::Path;

use crate::error::{TransformError, TransformResult};

/// A text file as an ordered list of lines, each keeping the terminator it
/// was read with: `\n`, `\r\n` (split happens after the `\n`), or nothing for
/// a final unterminated line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineDocument {
    lines: Vec<String>,
}

impl LineDocument {
    /// Split `text` after every `\n`, keeping terminators.
    pub fn from_text(text: &str) -> Self {
        let lines = text.split_inclusive('\n').map(str::to_string).collect();
        Self { lines }
    }

    /// Read and decode a file as UTF-8.
    pub fn read(path: &Path) -> TransformResult<Self> {
        let bytes = fs::read(path).map_err(|err| TransformError::read(path, err))?;
        let text = String::from_utf8(bytes).map_err(|err| TransformError::Encoding {
            path: path.to_path_buf(),
            offset: err.utf8_error().valid_up_to(),
        })?;

        Ok(Self::from_text(&text))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The body that survives trimming: a contiguous slice starting at `top`
    /// with the last `bottom` lines dropped. Underflow on either side clamps
    /// to an empty window instead of panicking.
    pub fn window(&self, top: usize, bottom: usize) -> &[String] {
        let rest = self.lines.get(top..).unwrap_or(&[]);

        if bottom == 0 {
            rest
        } else if rest.len() > bottom {
            &rest[..rest.len() - bottom]
        } else {
            &[]
        }
    }
}
