//! Section references into IETF documents
//!
//! Recognizes `<document>#section-<n>(.<n>)*` where the document is either an
//! Internet Draft (`draft-ietf-httpbis-semantics-14`) or an RFC (`rfc7694`).

use url::Url;

/// An IETF document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IetfDocument<'a> {
    /// Draft name without the `draft-` prefix
    Draft(&'a str),
    /// RFC number, at least four digits
    Rfc(&'a str),
}

/// A document plus a dotted section number, e.g. RFC 7089 §2.1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRef<'a> {
    pub document: IetfDocument<'a>,
    pub section: &'a str,
}

impl SectionRef<'_> {
    pub fn label(&self) -> String {
        match self.document {
            IetfDocument::Draft(name) => format!("Internet Draft {} §{}", name, self.section),
            IetfDocument::Rfc(number) => format!("RFC {} §{}", number, self.section),
        }
    }
}

/// Parse the section reference carried by a documentation URL.
pub fn parse_section_ref(url: &Url) -> Option<SectionRef<'_>> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let document = parse_document(strip_extension(segment))?;
    let section = parse_section(url.fragment()?.strip_prefix("section-")?)?;
    Some(SectionRef { document, section })
}

fn strip_extension(segment: &str) -> &str {
    segment
        .strip_suffix(".html")
        .or_else(|| segment.strip_suffix(".txt"))
        .unwrap_or(segment)
}

fn parse_document(id: &str) -> Option<IetfDocument<'_>> {
    if let Some(name) = id.strip_prefix("draft-") {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        return valid.then_some(IetfDocument::Draft(name));
    }

    let number = id.strip_prefix("rfc")?;
    let valid = number.len() >= 4 && number.bytes().all(|b| b.is_ascii_digit());
    valid.then_some(IetfDocument::Rfc(number))
}

/// Longest prefix of `s` shaped like `\d+(\.\d+)*`.
fn parse_section(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = digits_from(0);
    if end == 0 {
        return None;
    }

    while end < bytes.len() && bytes[end] == b'.' {
        let run = digits_from(end + 1);
        if run == 0 {
            break;
        }
        end += 1 + run;
    }

    Some(&s[..end])
}
