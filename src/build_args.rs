//! Reading a `MESON_ARGS` string back into its entries, splitting it the
//! same way the About dialog does.

/// One `name=value` entry. `value` is `None` when the token had no `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArg<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

/// Split on single spaces, then at the first `=`. Empty names are skipped.
///
/// String values containing spaces come back split across entries; the
/// format has no quoting at this level.
#[must_use]
pub fn parse_build_args(settings: &str) -> Vec<BuildArg<'_>> {
    settings
        .split(' ')
        .filter_map(|token| {
            let (name, value) = match token.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (token, None),
            };
            (!name.is_empty()).then_some(BuildArg { name, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_option::{BuildOption, settings_string};

    #[test]
    fn splits_exported_settings() {
        let settings = settings_string(
            vec![
                BuildOption::new("pidgin:debug", true),
                BuildOption::new("c_args", "-DX=1"),
            ],
            "pidgin",
        );
        assert_eq!(
            parse_build_args(&settings),
            [
                BuildArg { name: "c_args", value: Some("'-DX=1'") },
                BuildArg { name: "debug", value: Some("True") },
            ]
        );
    }

    #[test]
    fn skips_empty_names_and_keeps_bare_tokens() {
        assert_eq!(
            parse_build_args("  =x flag a="),
            [
                BuildArg { name: "flag", value: None },
                BuildArg { name: "a", value: Some("") },
            ]
        );
        assert!(parse_build_args("").is_empty());
    }
}
