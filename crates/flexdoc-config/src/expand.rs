//! `${VAR}` expansion for configuration strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

static BRACED_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]+\}").unwrap());

/// Expand environment variable references in a string.
///
/// Only the braced forms `${VAR}` and `${VAR:-default}` are recognized.
/// Everything outside a `${...}` span is copied verbatim, so a bare `$path`
/// in a URL survives even next to an expanded variable.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut last = 0;

    for span in BRACED_VAR_RE.find_iter(value) {
        out.push_str(&value[last..span.start()]);
        out.push_str(&expand_span(span.as_str(), field)?);
        last = span.end();
    }
    out.push_str(&value[last..]);

    Ok(out)
}

/// Expand a single `${...}` span.
fn expand_span(span: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(span, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);
