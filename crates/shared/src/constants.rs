/// Public host that serves `/<username>` profile pages.
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://dev.visitwall.com";
/// MIME type of an exported contact file.
pub const VCARD_MIME_TYPE: &str = "text/vcard; charset=utf-8";
/// File extension of an exported contact file.
pub const VCARD_FILE_EXTENSION: &str = "vcf";
/// Maximum length for usernames, in characters.
pub const MAX_USERNAME_LENGTH: usize = 64;
