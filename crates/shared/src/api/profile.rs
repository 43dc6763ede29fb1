use serde::{Deserialize, Serialize};

use super::ApiResponse;
use crate::error::VisitWallError;
use crate::profile::UserProfile;

/// `data` payload of `GET /user/profile`, `PUT /user/profile` and `GET /user/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub profile: UserProfile,
}

pub type ProfileResponse = ApiResponse<ProfileData>;

impl ProfileResponse {
    /// Unwrap the profile, surfacing an explicit `success: false` as a remote error.
    pub fn into_profile(self) -> Result<UserProfile, VisitWallError> {
        if self.success == Some(false) {
            let message = self
                .message
                .unwrap_or_else(|| "request failed".to_string());
            return Err(VisitWallError::Remote(message));
        }
        self.data
            .map(|d| d.profile)
            .ok_or_else(|| VisitWallError::NotFound("no profile data returned".into()))
    }
}

/// A profile as stored on disk: either the bare record or the full API envelope.
#[derive(Debug, Clone)]
pub enum ProfileDocument {
    Bare(UserProfile),
    Envelope(ProfileResponse),
}

/// Envelope keys; an object carrying any of them is decoded as [`ProfileResponse`].
const ENVELOPE_KEYS: [&str; 3] = ["data", "success", "message"];

impl<'de> Deserialize<'de> for ProfileDocument {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_envelope = ENVELOPE_KEYS.iter().any(|key| value.get(*key).is_some());
        if is_envelope {
            serde_json::from_value(value)
                .map(ProfileDocument::Envelope)
                .map_err(serde::de::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(ProfileDocument::Bare)
                .map_err(serde::de::Error::custom)
        }
    }
}

impl ProfileDocument {
    pub fn into_profile(self) -> Result<UserProfile, VisitWallError> {
        match self {
            ProfileDocument::Bare(profile) => Ok(profile),
            ProfileDocument::Envelope(resp) => resp.into_profile(),
        }
    }
}
