use crate::artifacts::alignment::{Segment, Side};
use crate::artifacts::diff::Operation;
use serde::Serialize;

pub const DELETION_CLASS: &str = "diff-deletion";
pub const ADDITION_CLASS: &str = "diff-addition";

/// Escapes the characters that would otherwise open markup. Single pass, so
/// an `&` is never escaped twice.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML fragments for the two panels; deletions are highlighted on the left,
/// insertions on the right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedDiff {
    pub left: String,
    pub right: String,
}

impl FormattedDiff {
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

pub fn format_html<S: Segment>(segments: &[S]) -> FormattedDiff {
    let mut formatted = FormattedDiff::default();

    for segment in segments {
        let left = segment.text_on(Side::Left);
        let right = segment.text_on(Side::Right);
        match segment.operation() {
            Operation::Equal => {
                formatted.left.push_str(&escape_html(left));
                formatted.right.push_str(&escape_html(right));
            }
            Operation::Delete => push_span(&mut formatted.left, DELETION_CLASS, left),
            Operation::Insert => push_span(&mut formatted.right, ADDITION_CLASS, right),
        }
    }

    formatted
}

fn push_span(html: &mut String, class: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    html.push_str(&format!(r#"<span class="{class}">{}</span>"#, escape_html(text)));
}

/// Wraps both panels into a self-contained page.
pub fn standalone_page(formatted: &FormattedDiff, left_title: &str, right_title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{left_title} vs {right_title}</title>
<style>
body {{ margin: 0; font-family: sans-serif; }}
main {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1px; background: #d0d7de; }}
section {{ background: #fff; padding: 1em; overflow: auto; }}
h2 {{ margin-top: 0; font-size: 1em; color: #57606a; }}
pre {{ white-space: pre-wrap; font-family: monospace; }}
.{DELETION_CLASS} {{ background: #ffebe9; color: #82071e; }}
.{ADDITION_CLASS} {{ background: #dafbe1; color: #116329; }}
</style>
</head>
<body>
<main>
<section><h2>{left_title}</h2><pre>{left}</pre></section>
<section><h2>{right_title}</h2><pre>{right}</pre></section>
</main>
</body>
</html>
"#,
        left_title = escape_html(left_title),
        right_title = escape_html(right_title),
        left = formatted.left,
        right = formatted.right,
    )
}
