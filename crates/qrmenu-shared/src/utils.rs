//! Utility functions

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

pub const SLUG_PATTERN: &str = r"^[a-z0-9_-]+$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("slug pattern is a valid regex"));

pub fn parse_uuid(s: &str) -> Option<Uuid> {
    Uuid::parse_str(s.trim()).ok()
}

pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) if at_pos > 0 => {
            let (local, domain) = email.split_at(at_pos);
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let prefix: String = local.chars().take(keep).collect();
            format!("{}***{}", prefix, domain)
        }
        _ => "***".to_string(),
    }
}

/// Whether `slug` is non-empty and made of lowercase letters, digits, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Local part of an email address, used as the default display name.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
