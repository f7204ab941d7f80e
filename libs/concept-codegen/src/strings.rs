//! Case conversion for hyphenated tokens

use phf::phf_map;

/// Methods whose upper-case spelling hides word boundaries.
static HTTP_METHOD_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "MKACTIVITY" => "MkActivity",
    "MKCALENDAR" => "MkCalendar",
    "MKCOL" => "MkCol",
    "MKREDIRECTREF" => "MkRedirectRef",
    "MKWORKSPACE" => "MkWorkspace",
    "ORDERPATCH" => "OrderPatch",
    "PROPFIND" => "PropFind",
    "PROPPATCH" => "PropPatch",
    "UPDATEREDIRECTREF" => "UpdateRedirectRef",
};

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Join hyphen-separated words, capitalizing each one.
///
/// Only the first character of each word changes, so acronyms survive:
/// `WWW-Authenticate` becomes `WWWAuthenticate`.
pub fn as_camel_case(s: &str) -> String {
    s.split('-').map(capitalize).collect()
}

/// Type-name fragment for an HTTP method (e.g. `PROPFIND` -> `PropFind`).
///
/// Methods outside the override table are lower-cased and then split on
/// hyphens only, so other punctuation is kept as is.
pub fn http_method_type_name(method: &str) -> String {
    match HTTP_METHOD_NAMES.get(method) {
        Some(name) => (*name).to_string(),
        None => as_camel_case(&method.to_lowercase()),
    }
}
