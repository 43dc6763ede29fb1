use serde::Deserialize;
use visitwall_shared::constants::DEFAULT_PROFILE_BASE_URL;

/// Generator settings. Deserializes from the `[vcard]` table of the exporter config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VcardOptions {
    /// Base of the canonical profile link. Default: "https://dev.visitwall.com"
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,
    /// Prefix for the NOTE value, e.g. "Bio:". Default: none
    #[serde(default)]
    pub note_label: Option<String>,
    /// Escape `\ ; ,` and line breaks in text values. Default: true
    #[serde(default = "default_escape_values")]
    pub escape_values: bool,
    /// Emit a PHOTO line for the avatar. Default: false
    #[serde(default)]
    pub embed_avatar: bool,
}

fn default_profile_base_url() -> String {
    DEFAULT_PROFILE_BASE_URL.to_string()
}
fn default_escape_values() -> bool {
    true
}

impl Default for VcardOptions {
    fn default() -> Self {
        Self {
            profile_base_url: default_profile_base_url(),
            note_label: None,
            escape_values: default_escape_values(),
            embed_avatar: false,
        }
    }
}

impl VcardOptions {
    /// Canonical profile link for `username`.
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/{}", self.profile_base_url.trim_end_matches('/'), username)
    }
}
