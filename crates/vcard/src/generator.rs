//! vCard 3.0 document assembly.

use std::borrow::Cow;

use visitwall_shared::profile::UserProfile;

use crate::escape::escape_text;
use crate::options::VcardOptions;
use crate::photo::{photo_line, AvatarRenderer};
use crate::social::social_lines;

pub const BEGIN: &str = "BEGIN:VCARD";
pub const VERSION: &str = "VERSION:3.0";
pub const END: &str = "END:VCARD";

/// Builds contact documents from profiles. Stateless apart from its options.
pub struct VcardGenerator<'a> {
    options: VcardOptions,
    renderer: Option<&'a dyn AvatarRenderer>,
}

impl<'a> VcardGenerator<'a> {
    pub fn new(options: VcardOptions) -> Self {
        Self {
            options,
            renderer: None,
        }
    }

    /// Attach the avatar collaborator used when `embed_avatar` is on.
    pub fn with_avatar_renderer(mut self, renderer: &'a dyn AvatarRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    fn text<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.escape_values {
            escape_text(value)
        } else {
            // Unescaped values still must not split the record.
            flatten_line_breaks(value)
        }
    }

    /// The document as individual lines, BEGIN through END.
    ///
    /// Profile fields are always emitted, even when empty; social entries
    /// without a value are dropped.
    pub fn lines(&self, profile: &UserProfile) -> Vec<String> {
        let name = self.text(&profile.display_name);
        let note = match self.options.note_label.as_deref() {
            Some(label) => format!("{label} {}", profile.latest_update.text),
            None => profile.latest_update.text.clone(),
        };

        let mut lines = vec![
            BEGIN.to_string(),
            VERSION.to_string(),
            format!("FN:{name}"),
            // No given/family split in the profile: the whole name is the family name.
            format!("N:{name};;;;"),
            format!("TITLE:{}", self.text(&profile.role)),
            // PO box; extended; street; locality; region; postal code; country
            format!("ADR;TYPE=HOME:;;;{};;;", self.text(&profile.location)),
            format!("NOTE:{}", self.text(&note)),
            format!(
                "URL;type=VisitWall:{}",
                self.options.profile_url(&flatten_line_breaks(&profile.username))
            ),
        ];

        for link in &profile.socials {
            lines.extend(social_lines(link));
        }

        if self.options.embed_avatar {
            if let Some(photo) = photo_line(profile, self.renderer) {
                lines.push(photo);
            }
        }

        lines.push(END.to_string());
        lines
    }

    /// The document as newline-joined text.
    pub fn generate(&self, profile: &UserProfile) -> String {
        self.lines(profile).join("\n")
    }
}

fn flatten_line_breaks(value: &str) -> Cow<'_, str> {
    if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace("\r\n", " ").replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

impl Default for VcardGenerator<'_> {
    fn default() -> Self {
        Self::new(VcardOptions::default())
    }
}

/// Generate a contact document with default options.
pub fn generate_vcard(profile: &UserProfile) -> String {
    VcardGenerator::default().generate(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VcardError;
    use visitwall_shared::profile::{AvatarOptions, SocialLink, Update};

    fn ada() -> UserProfile {
        let mut profile = UserProfile::new("ada", "Ada Lovelace");
        profile.role = "Engineer".into();
        profile.location = "London".into();
        profile.latest_update = Update {
            text: "Shipping".into(),
            ..Default::default()
        };
        profile.socials = vec![SocialLink::new("email", "mailto:ada@x.com")];
        profile
    }

    #[test]
    fn reference_profile_matches_line_grammar() {
        let out = generate_vcard(&ada());
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "FN:Ada Lovelace",
                "N:Ada Lovelace;;;;",
                "TITLE:Engineer",
                "ADR;TYPE=HOME:;;;London;;;",
                "NOTE:Shipping",
                "URL;type=VisitWall:https://dev.visitwall.com/ada",
                "EMAIL;TYPE=INTERNET,HOME:ada@x.com",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn frame_is_fixed_for_empty_profile() {
        let lines = VcardGenerator::default().lines(&UserProfile::new("", ""));
        assert_eq!(lines.first().map(String::as_str), Some(BEGIN));
        assert_eq!(lines.get(1).map(String::as_str), Some(VERSION));
        assert_eq!(lines.last().map(String::as_str), Some(END));
        assert_eq!(lines.iter().filter(|l| *l == BEGIN).count(), 1);
        assert_eq!(lines.iter().filter(|l| *l == END).count(), 1);
        assert!(lines.contains(&"TITLE:".to_string()));
        assert!(lines.contains(&"NOTE:".to_string()));
    }

    #[test]
    fn one_fn_and_one_n_line() {
        let lines = VcardGenerator::default().lines(&ada());
        let fns: Vec<_> = lines.iter().filter(|l| l.starts_with("FN:")).collect();
        let ns: Vec<_> = lines.iter().filter(|l| l.starts_with("N:")).collect();
        assert_eq!(fns.len(), 1);
        assert_eq!(ns.len(), 1);
        assert!(fns[0].contains("Ada Lovelace"));
        assert!(ns[0].contains("Ada Lovelace"));
    }

    #[test]
    fn email_entry_has_no_generic_url() {
        let lines = VcardGenerator::default().lines(&ada());
        let urls: Vec<_> = lines.iter().filter(|l| l.starts_with("URL")).collect();
        assert_eq!(urls, vec!["URL;type=VisitWall:https://dev.visitwall.com/ada"]);
    }

    #[test]
    fn blank_social_removes_only_its_lines() {
        let base = ada();
        let mut with_blank = ada();
        with_blank.socials.insert(0, SocialLink::new("whatsapp", "  "));
        assert_eq!(
            VcardGenerator::default().lines(&with_blank),
            VcardGenerator::default().lines(&base)
        );
    }

    #[test]
    fn socials_keep_input_order() {
        let mut profile = ada();
        profile.socials = vec![
            SocialLink::new("call", "tel:+311234567"),
            SocialLink::new("whatsapp", "https://wa.me/31612345678"),
            SocialLink::new("telegram", "https://t.me/x"),
        ];
        let lines = VcardGenerator::default().lines(&profile);
        let body = &lines[8..lines.len() - 1];
        assert_eq!(
            body,
            [
                "TEL;TYPE=CELL,VOICE:+311234567",
                "TEL;TYPE=CELL,MSG:31612345678",
                "URL;type=WhatsApp:https://wa.me/31612345678",
                "X-SOCIALPROFILE;type=whatsapp:https://wa.me/31612345678",
                "URL;type=Telegram:https://t.me/x",
            ]
        );
    }

    #[test]
    fn line_breaks_in_any_field_keep_a_single_frame() {
        let mut profile = ada();
        profile.username = "ada\nEND:VCARD".into();
        profile.display_name = "Ada\r\nEND:VCARD".into();
        profile.latest_update.text = "note\nBEGIN:VCARD".into();
        profile.avatar_url = Some("https://cdn.example.com/x.png\nEND:VCARD".into());
        profile.socials = vec![
            SocialLink::new("instagram", "https://instagram.com/ada\nEND:VCARD\nBEGIN:VCARD"),
            SocialLink::new("email", "mailto:ada@x.com"),
        ];

        for escape_values in [true, false] {
            let generator = VcardGenerator::new(VcardOptions {
                escape_values,
                embed_avatar: true,
                ..Default::default()
            });
            let out = generator.generate(&profile);
            let lines: Vec<&str> = out.split('\n').collect();
            assert_eq!(lines.iter().filter(|l| **l == BEGIN).count(), 1);
            assert_eq!(lines.iter().filter(|l| **l == END).count(), 1);
            assert_eq!(lines.first().copied(), Some(BEGIN));
            assert_eq!(lines.last().copied(), Some(END));
            assert!(!out.contains('\r'));
            assert!(lines.contains(&"EMAIL;TYPE=INTERNET,HOME:ada@x.com"));
            assert!(!out.contains("PHOTO"));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let profile = ada();
        assert_eq!(generate_vcard(&profile), generate_vcard(&profile));
    }

    #[test]
    fn note_label_prefixes_note() {
        let generator = VcardGenerator::new(VcardOptions {
            note_label: Some("Bio:".into()),
            ..Default::default()
        });
        assert!(generator
            .lines(&ada())
            .contains(&"NOTE:Bio: Shipping".to_string()));
    }

    #[test]
    fn text_fields_are_escaped() {
        let mut profile = ada();
        profile.display_name = "Le, Tommy".into();
        profile.location = "Vlaardingen, The Netherlands".into();
        profile.latest_update.text = "line one\nline two; done".into();
        let lines = VcardGenerator::default().lines(&profile);
        assert_eq!(lines[2], "FN:Le\\, Tommy");
        assert_eq!(lines[3], "N:Le\\, Tommy;;;;");
        assert_eq!(lines[5], "ADR;TYPE=HOME:;;;Vlaardingen\\, The Netherlands;;;");
        assert_eq!(lines[6], "NOTE:line one\\nline two\\; done");
    }

    #[test]
    fn escaping_can_be_disabled() {
        let mut profile = ada();
        profile.location = "Vlaardingen, The Netherlands".into();
        let generator = VcardGenerator::new(VcardOptions {
            escape_values: false,
            ..Default::default()
        });
        assert_eq!(
            generator.lines(&profile)[5],
            "ADR;TYPE=HOME:;;;Vlaardingen, The Netherlands;;;"
        );
    }

    struct FixedRenderer;

    impl AvatarRenderer for FixedRenderer {
        fn render_svg(&self, _avatar: &AvatarOptions) -> Result<String, VcardError> {
            Ok("<svg/>".into())
        }
    }

    #[test]
    fn photo_is_gated_by_option() {
        let mut profile = ada();
        profile.avatar = Some(AvatarOptions::default());

        let off = VcardGenerator::default().with_avatar_renderer(&FixedRenderer);
        assert!(!off.generate(&profile).contains("PHOTO"));

        let on = VcardGenerator::new(VcardOptions {
            embed_avatar: true,
            ..Default::default()
        })
        .with_avatar_renderer(&FixedRenderer);
        let lines = on.lines(&profile);
        assert_eq!(
            lines[lines.len() - 2],
            "PHOTO;VALUE=URI:data:image/svg+xml;base64,PHN2Zy8+"
        );
        assert_eq!(lines.last().map(String::as_str), Some(END));
    }
}
