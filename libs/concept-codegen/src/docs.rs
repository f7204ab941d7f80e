//! Documentation comment blocks for generated declarations

use url::Url;

use crate::error::Result;
use crate::ir::ConceptValue;
use crate::labels::LabelResolver;

/// Column width used to wrap value descriptions
pub const DEFAULT_WRAP_WIDTH: usize = 60;

/// `@<annotation> <value>`
pub fn doc_tag(annotation: &str, value: &str) -> String {
    format!("@{} {}", annotation, value)
}

/// `@see [<label>](<link>)`
pub fn see_tag(label: &str, link: &Url) -> String {
    doc_tag("see", &format!("[{}]({})", label, link))
}

/// Wrap `lines` in a `/** ... */` block. Empty lines get no trailing space.
///
/// A `*/` inside a line is written as `*\/` so it cannot close the comment.
pub fn doc_block<S: AsRef<str>>(lines: &[S]) -> String {
    let mut block = String::from("/**\n");
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            block.push_str(" *\n");
        } else {
            block.push_str(" * ");
            block.push_str(&line.replace("*/", "*\\/"));
            block.push('\n');
        }
    }
    block.push_str(" */");
    block
}

/// Greedy word wrap.
///
/// Lines hold at most `width` characters unless a single word is longer, in
/// which case it sits on a line of its own. Line breaks in `text` are kept
/// (blank lines included); other whitespace runs collapse.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.trim().lines() {
        if paragraph.trim().is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            continue;
        }
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

fn wrap_paragraph(text: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

/// Full documentation block for a concept value.
///
/// The first detail provides the description; every detail contributes a
/// documentation link and a specification link.
pub fn build_doc_block(
    value: &ConceptValue,
    resolver: &LabelResolver,
    wrap_width: usize,
) -> Result<String> {
    let primary = value.primary_detail()?;

    let mut doc_links = Vec::with_capacity(value.details.len());
    let mut spec_links = Vec::with_capacity(value.details.len());

    for detail in &value.details {
        doc_links.push(see_tag(
            &format!("Documentation → {}", resolver.resolve_label(detail, true)?),
            &detail.documentation,
        ));
        spec_links.push(see_tag(
            &format!("Specification → {}", resolver.resolve_label(detail, false)?),
            &detail.specification,
        ));
    }

    let mut lines = wrap_words(&primary.description, wrap_width);
    lines.push(String::new());
    lines.extend(doc_links);
    lines.extend(spec_links);

    Ok(doc_block(&lines))
}
