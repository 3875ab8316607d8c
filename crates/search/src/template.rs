//! Request-body templates.
//!
//! Templates are static JSON skeletons with `{{name}}` placeholders,
//! compiled into the binary. Only substituted values pass through the
//! escaper; the skeleton's own punctuation is emitted verbatim, so the
//! structure of the rendered body cannot be altered by parameter content.

use std::collections::HashMap;

use crate::escape::escape;

const SEARCH: &str = include_str!("../templates/search.json");
const PERSON: &str = include_str!("../templates/person.json");

fn skeleton(name: &str) -> &'static str {
    match name {
        "search" => SEARCH,
        "person" => PERSON,
        other => panic!("unknown template: {other}"),
    }
}

/// Render the named template, replacing every `{{key}}` placeholder with
/// the escaped value of the matching parameter. Output is deterministic
/// for identical inputs.
///
/// # Panics
///
/// Panics on an unknown template name or a placeholder without a matching
/// parameter. Templates and their call sites are fixed at build time, so
/// either is a bug in the caller, not a recoverable runtime condition.
pub fn render(template_name: &str, params: &HashMap<&str, &str>) -> String {
    let template = skeleton(template_name);
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let end = tail
            .find("}}")
            .unwrap_or_else(|| panic!("unterminated placeholder in template {template_name}"));
        let key = &tail[..end];
        let value = params
            .get(key)
            .unwrap_or_else(|| panic!("template {template_name} is missing parameter {key}"));
        out.push_str(&escape(value));
        rest = &tail[end + 2..];
    }
    out.push_str(rest);
    out
}
