//! Identifier helpers
//!
//! Converts schema property and document names into class and field names.

/// Convert to PascalCase
///
/// Words are split on `_`, `-`, space and `.`; interior casing of each word is
/// kept so already-PascalCase input passes through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if matches!(c, '_' | '-' | ' ' | '.') {
            capitalize_next = true;
        } else if !c.is_alphanumeric() && c != '$' {
            continue;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    escape_leading_digit(result)
}

/// Convert to camelCase
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Best-effort singular form of an English plural, for item class names
pub fn singular(s: &str) -> String {
    if let Some(stem) = s.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "xes", "ches", "shes"] {
        if s.ends_with(suffix) {
            return s[..s.len() - 2].to_string();
        }
    }
    if s.len() > 1 && s.ends_with('s') && !s.ends_with("ss") {
        return s[..s.len() - 1].to_string();
    }
    s.to_string()
}

fn escape_leading_digit(name: String) -> String {
    if name.chars().next().map_or(false, |c| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}
