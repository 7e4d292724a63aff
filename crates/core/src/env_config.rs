//! Numeric and path settings read from the process environment.
//!
//! `PORT` and `FALLBACK_MAX_DAYS` go through [`env_parse_with_default`];
//! `LOGO_PATH` and the database settings go through [`env_non_blank`].

/// Value of `var`, or `None` when it is unset or only whitespace.
///
/// A `.env` line such as `LOGO_PATH=` counts as unset.
pub fn env_non_blank(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Parse `var` (trimmed) into `T`, or return `default`.
///
/// A blank or missing variable yields `default` quietly. A value such as
/// `PORT=http` is logged at warn level, then `default` is used.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Some(raw) = env_non_blank(var) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = %raw, default = %default, "unparseable setting, using default");
        default
    })
}
