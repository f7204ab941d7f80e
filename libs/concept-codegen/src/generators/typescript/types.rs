//! TypeScript type declarations

/// `export type <name> = <literal>;`
pub fn emit_literal_type(name: &str, literal: &str) -> String {
    format!("export type {} = {};", name, literal)
}

/// `export type <name> = '<value>';`
pub fn emit_string_literal_type(name: &str, value: &str) -> String {
    emit_literal_type(name, &quote(value))
}

/// Union with one member per line, in the given order.
///
/// An empty member list is `never`.
pub fn emit_union_type<S: AsRef<str>>(name: &str, members: &[S]) -> String {
    if members.is_empty() {
        return emit_literal_type(name, "never");
    }

    let body = members
        .iter()
        .map(|m| format!("\t| {}", m.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("export type {} =\n{};", name, body)
}

/// Members of `base` that are not in `excluded`.
pub fn emit_set_difference_type(name: &str, base: &str, excluded: &str) -> String {
    emit_literal_type(name, &format!("Exclude<{}, {}>", base, excluded))
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
