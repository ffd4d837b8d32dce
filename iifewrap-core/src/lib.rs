//! iifewrap-core: rewrite module bundles into legacy browser-global scripts.
//!
//! The whole pipeline is a fixed-offset line window plus string assembly:
//!
//! 1. **Read** the bundle into a [`document::LineDocument`]; every line keeps
//!    the terminator it was read with.
//! 2. **Trim** a fixed number of lines off the top and bottom. The trims are
//!    always caller-supplied — which lines a given bundler wraps its output
//!    in is project knowledge, not something this crate guesses at.
//! 3. **Wrap** the survivors between header and footer blocks, either
//!    explicit lines or a [`preset`] such as the browser-global IIFE.
//! 4. **Write** the result over the output path via a sibling temp file, so a
//!    failed run never leaves a half-written script behind.
//!
//! ```rust,no_run
//! use iifewrap_core::config::TransformJob;
//! use iifewrap_core::preset::browser_iife;
//! use iifewrap_core::transform::transform;
//!
//! let job = TransformJob::new("build/app.module.js", "build/app.js")
//!     .with_trim(4, 2)
//!     .with_preset(browser_iife(Some(
//!         "Script _build/app.js_ is deprecated. Please use ES Modules.",
//!     )));
//!
//! let report = transform(&job)?;
//! println!("kept {} of {} lines", report.lines_kept, report.lines_read);
//! # Ok::<(), iifewrap_core::error::TransformError>(())
//! ```
//!
//! Failures carry a typed taxonomy ([`error::TransformError`]) so callers can
//! tell a missing input from a permission problem from a half-decoded file,
//! and batches of jobs ([`config::Manifest`]) fan out in parallel through
//! [`transform::run_jobs`].

pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod preset;
pub mod transform;
