//! Build options as reported by `meson introspect --buildoptions`, and their
//! rendering into the single-line settings string.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const SUBPROJECT_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOption {
    pub name: String,
    pub value: Value,
}

impl BuildOption {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn is_subproject_option(&self) -> bool {
        self.name.contains(SUBPROJECT_SEPARATOR)
    }

    /// Strip the subproject qualifier once if it names this project.
    ///
    /// Subproject option names are `<wrap name>:<option>`, and the wrap name
    /// is chosen by the superproject, so any qualifier starting with the
    /// prefix counts.
    #[must_use]
    pub fn promote(mut self, project_prefix: &str) -> (Self, bool) {
        let stripped = match self.name.split_once(SUBPROJECT_SEPARATOR) {
            Some((qualifier, rest)) if qualifier.starts_with(project_prefix) => Some(rest.to_string()),
            _ => None,
        };
        match stripped {
            Some(name) => {
                self.name = name;
                (self, true)
            }
            None => (self, false),
        }
    }
}

/// Promote this project's options, drop every other subproject option, and
/// sort by name. A promoted option replaces a global one of the same name.
pub fn effective_options(options: Vec<BuildOption>, project_prefix: &str) -> Vec<BuildOption> {
    let mut by_name: BTreeMap<String, (BuildOption, bool)> = BTreeMap::new();

    for option in options {
        let (option, promoted) = option.promote(project_prefix);
        if option.is_subproject_option() {
            log::debug!("Skipping subproject option {}", option.name);
            continue;
        }
        match by_name.get(&option.name) {
            Some((_, true)) if !promoted => {}
            _ => {
                by_name.insert(option.name.clone(), (option, promoted));
            }
        }
    }

    by_name.into_values().map(|(option, _)| option).collect()
}

/// Render the `name=value` list that goes into `MESON_ARGS`.
pub fn settings_string(options: Vec<BuildOption>, project_prefix: &str) -> String {
    effective_options(options, project_prefix)
        .iter()
        .map(|option| format!("{}={}", option.name, render_value(&option.value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Literal form of a value, HTML-escaped so it can sit between double
/// quotes in C source.
#[must_use]
pub fn render_value(value: &Value) -> String {
    html_escape::encode_double_quoted_attribute(&literal(value)).into_owned()
}

fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Single-quoted string literal. Every backslash this emits starts an escape
/// that C also understands.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
