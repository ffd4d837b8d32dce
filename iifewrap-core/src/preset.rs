//! Canned wrapper blocks for common rewrite targets.

/// A header/footer pair ready to hand to a transform job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapPreset {
    pub header: Vec<String>,
    pub footer: Vec<String>,
}

/// Browser-global IIFE wrapper: strict-mode prologue, an optional deprecation
/// banner emitted through `console.warn`, and a closure invoked with
/// `window`, `self`, or `global` — whichever the host runtime defines.
pub fn browser_iife(banner: Option<&str>) -> WrapPreset {
    let mut header = vec!["'use strict';".to_string(), String::new()];

    if let Some(banner) = banner {
        header.push(format!("console.warn( '{}' );", escape_single_quoted(banner)));
        header.push(String::new());
    }

    header.push("(function(global){".to_string());
    header.push(String::new());

    let footer = vec![
        "})( typeof(window) != 'undefined' ? window : (typeof(self) != 'undefined' ? self : global ) );"
            .to_string(),
    ];

    WrapPreset { header, footer }
}

/// Escape `text` for embedding in a single-quoted JS string literal.
fn escape_single_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
