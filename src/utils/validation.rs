//! Input validation helpers.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::IndustryType;

/// Schemes that must carry an authority (`scheme://host...`).
const SPECIAL_SCHEMES: [&str; 5] = ["http", "https", "ws", "wss", "ftp"];

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"))
}

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*):(?P<rest>\S+)$").expect("static pattern")
    })
}

/// Whether `vibe` names a known industry.
pub fn validate_vibe(vibe: &str) -> bool {
    vibe.parse::<IndustryType>().is_ok()
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Whether `url` parses as an absolute URL.
///
/// Web schemes need a host: `https://` alone is rejected, while opaque URLs
/// such as `mailto:team@nebula.ai` are accepted.
pub fn is_valid_url(url: &str) -> bool {
    let url = url.trim();
    let Some(caps) = url_pattern().captures(url) else {
        return false;
    };

    let scheme = caps["scheme"].to_ascii_lowercase();
    if !SPECIAL_SCHEMES.contains(&scheme.as_str()) {
        return true;
    }

    let rest = caps["rest"].trim_start_matches(['/', '\\']);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = match host.strip_prefix('[') {
        Some(ipv6) => ipv6.split(']').next().unwrap_or_default(),
        None => host.split(':').next().unwrap_or_default(),
    };

    !host.is_empty()
}
