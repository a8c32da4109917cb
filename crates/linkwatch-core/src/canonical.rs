//! URL canonicalization
//!
//! Maps a raw, user-typed URL to the comparison key used to decide whether two
//! reports point at the same post. Cosmetic variance is ignored: scheme,
//! a leading `www.`, one trailing slash, tracking parameters, query order,
//! port, fragment and userinfo.

use url::form_urlencoded;
use url::Url;

/// Query parameters that only carry campaign or click tracking.
///
/// Matched case-sensitively against the decoded parameter name.
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "_ga",
    "mc_cid",
    "mc_eid",
    "msclkid",
    "dclid",
    "_r",
    "_t",
];

/// Compute the canonical key for a raw URL.
///
/// Never fails. Input that cannot be parsed even after adding a scheme falls
/// back to a trimmed, lowercased form with one trailing `/` removed. Fallback
/// keys have a different shape from parsed keys and will not match them.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    let with_scheme = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match Url::parse(&with_scheme) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => canonical_form(&parsed, host),
            _ => fallback(trimmed),
        },
        Err(e) => {
            tracing::trace!(input = trimmed, error = %e, "canonical_fallback");
            fallback(trimmed)
        }
    }
}

/// True when both URLs share a canonical key
pub fn same_link(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn canonical_form(parsed: &Url, host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);

    let path = parsed.path();
    let path = if path != "/" {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };

    let query = canonical_query(parsed);
    if query.is_empty() {
        format!("https://{}{}", host, path)
    } else {
        format!("https://{}{}?{}", host, path, query)
    }
}

/// Drop tracking parameters, then order by name and by value within a name
fn canonical_query(parsed: &Url) -> String {
    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    pairs.sort();

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn fallback(trimmed: &str) -> String {
    let lower = trimmed.to_lowercase();
    match lower.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}
