use visitwall_shared::constants::MAX_USERNAME_LENGTH;
use visitwall_shared::error::VisitWallError;

/// Validate a username for use as a contact file stem.
///
/// Trims whitespace, rejects empty strings, strings longer than
/// `MAX_USERNAME_LENGTH` characters, path separators, control characters,
/// and the special names `.` and `..`.
pub fn validate_username(username: &str) -> Result<String, VisitWallError> {
    let trimmed = username.trim().to_string();
    if trimmed.is_empty() {
        return Err(VisitWallError::Validation("username is required".into()));
    }
    if trimmed.chars().count() > MAX_USERNAME_LENGTH {
        return Err(VisitWallError::Validation(format!(
            "username must be {MAX_USERNAME_LENGTH} characters or fewer"
        )));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(VisitWallError::Validation(
            "username must not contain path separators".into(),
        ));
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err(VisitWallError::Validation(
            "username must not contain control characters".into(),
        ));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(VisitWallError::Validation(format!(
            "username {trimmed:?} is reserved"
        )));
    }
    Ok(trimmed)
}
