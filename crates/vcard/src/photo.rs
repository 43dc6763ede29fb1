//! Optional avatar embedding.
//!
//! Rendering the procedural avatar is delegated to an [`AvatarRenderer`]. The
//! rendered SVG is embedded as a base64 data URI, which some contact apps
//! reject, so the PHOTO line is opt-in through `VcardOptions::embed_avatar`.

use base64::Engine;
use visitwall_shared::profile::{AvatarOptions, UserProfile};

use crate::error::VcardError;

/// Produces SVG markup for an avatar options record.
pub trait AvatarRenderer {
    fn render_svg(&self, avatar: &AvatarOptions) -> Result<String, VcardError>;
}

/// `data:` URI for an SVG document.
pub fn svg_data_uri(svg: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("data:image/svg+xml;base64,{encoded}")
}

/// PHOTO line for the profile, preferring a freshly rendered avatar over the
/// stored `avatarUrl`. Render failures are logged and fall through.
pub fn photo_line(profile: &UserProfile, renderer: Option<&dyn AvatarRenderer>) -> Option<String> {
    if let (Some(renderer), Some(avatar)) = (renderer, profile.avatar.as_ref()) {
        match renderer.render_svg(avatar) {
            Ok(svg) => return Some(format!("PHOTO;VALUE=URI:{}", svg_data_uri(&svg))),
            Err(e) => {
                tracing::warn!(username = %profile.username, error = %e, "avatar render failed");
            }
        }
    }

    profile
        .avatar_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty() && !url.contains(['\r', '\n']))
        .map(|url| format!("PHOTO;VALUE=URI:{url}"))
}
