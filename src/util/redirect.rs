//! Post-login redirect target resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that bounce unauthenticated users to `/login` append
//! `?redirect=<path>`; the login view sends the user back there on success.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

const REDIRECT_PARAM: &str = "redirect";

/// Resolve the redirect target from a URL query string (with or without the
/// leading `?`). Falls back to `/` when the parameter is absent or empty.
pub fn resolve_redirect(search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    let value = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned());
    redirect_target(value.as_deref())
}

/// `/` + the parameter value, collapsing any leading slashes so the result
/// never starts with `//`.
pub fn redirect_target(value: Option<&str>) -> String {
    let path = value.map_or("", |v| v.trim_start_matches('/'));
    format!("/{path}")
}
