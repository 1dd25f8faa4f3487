use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string.
///
/// A fallback can be supplied with `{{ env.VAR | default("value") }}`;
/// without one, an unset variable is an error. Lines starting with `#`
/// (TOML comments) are passed through unchanged.
pub(crate) fn expand_env(input: &str) -> anyhow::Result<String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: variable name, group 2: optional default value
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut missing: Option<String> = None;
    let mut output = String::with_capacity(input.len());

    for (index, line) in input.lines().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let expanded = re().replace_all(line, |captures: &Captures<'_>| {
            let var = &captures[1];
            match std::env::var(var) {
                Ok(value) => value,
                Err(_) => captures.get(2).map_or_else(
                    || {
                        if missing.is_none() {
                            missing = Some(var.to_owned());
                        }
                        String::new()
                    },
                    |default| default.as_str().to_owned(),
                ),
            }
        });
        output.push_str(&expanded);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    if let Some(var) = missing {
        anyhow::bail!("environment variable not found: `{var}`");
    }

    Ok(output)
}
