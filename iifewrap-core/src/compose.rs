//! Output assembly: header, body window, footer.

/// Assemble the final document. Header lines are joined with `\n`, one `\n`
/// separates them from the body, the body lines are concatenated as read
/// (they carry their own terminators), one `\n` separates the body from the
/// footer, and footer lines are joined with `\n`.
///
/// The shape holds for degenerate inputs too: an empty header produces a
/// leading newline, an empty body collapses the two separators to `\n\n`, and
/// an empty footer produces a trailing newline.
pub fn compose(header: &[String], body: &[String], footer: &[String]) -> String {
    let header_len: usize = header.iter().map(|l| l.len() + 1).sum();
    let body_len: usize = body.iter().map(String::len).sum();
    let footer_len: usize = footer.iter().map(|l| l.len() + 1).sum();

    let mut out = String::with_capacity(header_len + body_len + footer_len + 2);
    out.push_str(&header.join("\n"));
    out.push('\n');
    for line in body {
        out.push_str(line);
    }
    out.push('\n');
    out.push_str(&footer.join("\n"));
    out
}
