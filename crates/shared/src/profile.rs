//! The VisitWall profile record as served by the REST API.
//!
//! Field names follow the API's camelCase JSON. Only `username` and
//! `displayName` are required; everything else defaults so that partially
//! filled profiles still decode.

use serde::{Deserialize, Serialize};

/// A contact channel shown on the card and exported to the contact file.
///
/// The wire tag is a lowercase string. Tags are matched case-sensitively and
/// anything unrecognized is kept verbatim in [`Platform::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Whatsapp,
    Email,
    Call,
    Messenger,
    Instagram,
    X,
    Facebook,
    Snapchat,
    Locket,
    Other(String),
}

impl Platform {
    /// The lowercase wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Whatsapp => "whatsapp",
            Platform::Email => "email",
            Platform::Call => "call",
            Platform::Messenger => "messenger",
            Platform::Instagram => "instagram",
            Platform::X => "x",
            Platform::Facebook => "facebook",
            Platform::Snapchat => "snapchat",
            Platform::Locket => "locket",
            Platform::Other(tag) => tag,
        }
    }

    /// Human-facing label: the tag with its first character upper-cased.
    pub fn label(&self) -> String {
        if let Platform::Whatsapp = self {
            return "WhatsApp".to_string();
        }
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether contact apps know this platform as a social profile.
    pub fn is_social_profile(&self) -> bool {
        matches!(
            self,
            Platform::Whatsapp
                | Platform::Messenger
                | Platform::Instagram
                | Platform::X
                | Platform::Facebook
                | Platform::Snapchat
                | Platform::Locket
        )
    }
}

impl From<String> for Platform {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "whatsapp" => Platform::Whatsapp,
            "email" => Platform::Email,
            "call" => Platform::Call,
            "messenger" => Platform::Messenger,
            "instagram" => Platform::Instagram,
            "x" => Platform::X,
            "facebook" => Platform::Facebook,
            "snapchat" => Platform::Snapchat,
            "locket" => Platform::Locket,
            _ => Platform::Other(tag),
        }
    }
}

impl From<&str> for Platform {
    fn from(tag: &str) -> Self {
        Platform::from(tag.to_string())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{platform, url}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Platform,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SocialLink {
    pub fn new(platform: impl Into<Platform>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            label: None,
        }
    }

    /// Apply the edit form's scheme rule: email urls get `mailto:`, call urls
    /// get `tel:`. Blank urls are left alone.
    pub fn normalized(&self) -> Self {
        let url = self.url.trim();
        let url = match self.platform {
            Platform::Email if !url.is_empty() && !url.starts_with("mailto:") => {
                format!("mailto:{url}")
            }
            Platform::Call if !url.is_empty() && !url.starts_with("tel:") => format!("tel:{url}"),
            _ => self.url.clone(),
        };
        Self {
            platform: self.platform.clone(),
            url,
            label: self.label.clone(),
        }
    }
}

/// Presence badge on the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Status {
    Online,
    Busy,
    Dnd,
    #[default]
    Offline,
    Vacation,
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "online" => Status::Online,
            "busy" => Status::Busy,
            "dnd" => Status::Dnd,
            "vacation" => Status::Vacation,
            _ => Status::Offline,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// The latest status note shown under the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
}

/// Procedural avatar traits. Opaque here: rendering belongs to an external
/// collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarOptions(pub serde_json::Map<String, serde_json::Value>);

impl AvatarOptions {
    pub fn seed(&self) -> Option<&str> {
        self.0.get("seed").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarOptions>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub latest_update: Update,
}

impl UserProfile {
    /// A profile with only the required fields set.
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role: String::new(),
            location: String::new(),
            avatar_url: None,
            avatar: None,
            status: Status::default(),
            socials: Vec::new(),
            goals: Vec::new(),
            latest_update: Update::default(),
        }
    }

    /// Socials with [`SocialLink::normalized`] applied to each entry.
    pub fn normalize_socials(&self) -> Vec<SocialLink> {
        self.socials.iter().map(SocialLink::normalized).collect()
    }
}
