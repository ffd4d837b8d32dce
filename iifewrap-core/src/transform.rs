//! The transform pipeline: read, trim, wrap, write.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::compose::compose;
use crate::config::TransformJob;
use crate::document::LineDocument;
use crate::error::{TransformError, TransformResult};

/// What a completed transform did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines_read: usize,
    pub lines_kept: usize,
    pub bytes_written: usize,
}

/// Rewrite one file. The input is read in full before the output is touched,
/// so a failed read leaves the output exactly as it was; the output itself
/// only appears once the whole body has been written.
pub fn transform(job: &TransformJob) -> TransformResult<TransformReport> {
    let document = LineDocument::read(&job.input)?;
    let body = document.window(job.top_trim, job.bottom_trim);
    let rendered = compose(&job.header, body, &job.footer);
    let bytes_written = write_atomic(&job.output, rendered.as_bytes())?;

    Ok(TransformReport {
        input: job.input.clone(),
        output: job.output.clone(),
        lines_read: document.len(),
        lines_kept: body.len(),
        bytes_written,
    })
}

/// Run a batch of jobs in parallel, one outcome per job in input order.
/// Jobs are independent; a failing job never stops the others.
pub fn run_jobs(jobs: &[TransformJob]) -> Vec<TransformResult<TransformReport>> {
    jobs.par_iter().map(transform).collect()
}

/// Write through a sibling temp file and rename into place. The temp file
/// lives in the destination directory so the rename stays on one filesystem,
/// and dropping it removes it on every failure path.
fn write_atomic(path: &Path, bytes: &[u8]) -> TransformResult<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| TransformError::write(path, err))?;
    tmp.write_all(bytes).map_err(|err| TransformError::write(path, err))?;
    tmp.persist(path).map_err(|err| TransformError::write(path, err.error))?;

    Ok(bytes.len())
}
