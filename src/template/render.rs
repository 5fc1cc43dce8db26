//! Placeholder substitution for template resources

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Placeholder values for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBindings {
    values: BTreeMap<String, String>,
}

impl TemplateBindings {
    /// Bindings for `[year]` and `[fullname]`; the name is normalized to Title Case
    pub fn new(year: i32, raw_full_name: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert("year".to_string(), year.to_string());
        values.insert("fullname".to_string(), normalize_full_name(raw_full_name));
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([A-Za-z_]+)\]").expect("valid placeholder regex"))
}

/// Replace every `[key]` in `text` with its bound value
///
/// One left-to-right pass: substituted values are never scanned again.
/// Unbound placeholders stay verbatim.
pub fn render(text: &str, bindings: &TemplateBindings) -> String {
    placeholder_pattern()
        .replace_all(text, |caps: &Captures| match bindings.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Lower-case the name, then capitalize the first letter of each word
pub fn normalize_full_name(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
