//! Contact lines for a single social entry.

use std::sync::LazyLock;

use regex::Regex;
use visitwall_shared::profile::{Platform, SocialLink};

static WHATSAPP_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"wa\.me/(\d+)").unwrap());

/// Phone number embedded in a `wa.me` link, if any.
pub fn whatsapp_number(url: &str) -> Option<&str> {
    WHATSAPP_NUMBER_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Lines for one social entry, in emission order.
///
/// Entries without a usable value produce nothing rather than an empty line.
pub fn social_lines(link: &SocialLink) -> Vec<String> {
    let url = link.url.trim();
    if url.is_empty() {
        tracing::debug!(platform = %link.platform, "skipping social entry with empty url");
        return Vec::new();
    }
    if url.contains(['\r', '\n']) {
        tracing::debug!(platform = %link.platform, "skipping social entry with line break in url");
        return Vec::new();
    }

    match &link.platform {
        Platform::Email => {
            let address = url.strip_prefix("mailto:").unwrap_or(url).trim();
            if address.is_empty() {
                return Vec::new();
            }
            vec![format!("EMAIL;TYPE=INTERNET,HOME:{address}")]
        }
        Platform::Call => {
            let number = url.strip_prefix("tel:").unwrap_or(url).trim();
            if number.is_empty() {
                return Vec::new();
            }
            vec![format!("TEL;TYPE=CELL,VOICE:{number}")]
        }
        Platform::Whatsapp => {
            let mut lines = Vec::with_capacity(3);
            if let Some(number) = whatsapp_number(url) {
                lines.push(format!("TEL;TYPE=CELL,MSG:{number}"));
            }
            lines.push(format!("URL;type={}:{url}", link.platform.label()));
            lines.push(format!("X-SOCIALPROFILE;type={}:{url}", link.platform));
            lines
        }
        platform if platform.is_social_profile() => vec![
            format!("URL;type={}:{url}", platform.label()),
            format!("X-SOCIALPROFILE;type={platform}:{url}"),
        ],
        platform => {
            let label = platform.label();
            if label.is_empty() {
                vec![format!("URL:{url}")]
            } else {
                vec![format!("URL;type={label}:{url}")]
            }
        }
    }
}
