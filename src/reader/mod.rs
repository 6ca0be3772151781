pub mod extract;
pub mod text;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::common::{metadata::ContentKind, records::SocialPlatform};

pub(crate) static GEO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^geo:([-+]?\d+(?:\.\d+)?),([-+]?\d+(?:\.\d+)?)").expect("valid geo pattern")
});

// Classification rules
//------------------------------------------------------------------------------

pub struct Rule {
    pub kind: ContentKind,
    pub matches: fn(&str) -> bool,
}

/// Evaluated top to bottom, first match wins. Social URLs sit above the generic http rule so
/// they keep their finer kind.
pub static RULES: [Rule; 9] = [
    Rule { kind: ContentKind::WifiConfig, matches: is_wifi_config },
    Rule { kind: ContentKind::MailTo, matches: is_mailto },
    Rule { kind: ContentKind::SmsTo, matches: is_smsto },
    Rule { kind: ContentKind::TelTo, matches: is_telto },
    Rule { kind: ContentKind::VCard, matches: is_vcard },
    Rule { kind: ContentKind::GeoLocation, matches: is_geo_location },
    Rule { kind: ContentKind::KnownSocialUrl, matches: is_known_social_url },
    Rule { kind: ContentKind::HttpUrl, matches: is_http_url },
    Rule { kind: ContentKind::VEvent, matches: is_vevent },
];

fn is_wifi_config(text: &str) -> bool {
    text.starts_with("WIFI:")
}

fn is_mailto(text: &str) -> bool {
    text.starts_with("mailto:")
}

fn is_smsto(text: &str) -> bool {
    text.starts_with("sms:")
}

fn is_telto(text: &str) -> bool {
    text.starts_with("tel:")
}

fn is_vcard(text: &str) -> bool {
    text.starts_with("BEGIN:VCARD")
}

fn is_geo_location(text: &str) -> bool {
    text.starts_with("geo:") && GEO_REGEX.is_match(text)
}

fn is_http_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

fn is_vevent(text: &str) -> bool {
    text.starts_with("BEGIN:VEVENT")
}

fn is_known_social_url(text: &str) -> bool {
    let text = text.to_ascii_lowercase();
    SocialPlatform::ALL.iter().any(|p| text.contains(p.domain()))
}

// Last resort: anything the url crate accepts as an absolute URL with a host
fn is_absolute_url(text: &str) -> bool {
    Url::parse(text).map(|u| u.has_host()).unwrap_or(false)
}

/// Assigns a content kind to decoded text. Total: every input maps to exactly one kind.
pub fn classify(text: &str) -> ContentKind {
    let kind = match RULES.iter().find(|r| (r.matches)(text)) {
        Some(rule) => rule.kind,
        None if is_absolute_url(text) => ContentKind::HttpUrl,
        None => ContentKind::Unclassified,
    };
    debug!(?kind, "classified decoded text");
    kind
}
