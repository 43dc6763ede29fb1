use std::io::Write;
use std::path::{Path, PathBuf};

use visitwall_shared::api::profile::ProfileDocument;
use visitwall_shared::profile::UserProfile;
use visitwall_vcard::download::{deliver, ContactFile, DirectoryTarget};
use visitwall_vcard::VcardGenerator;

use crate::error::ExportError;
use crate::validation::validate_username;

/// Where generated contact documents go.
pub enum Destination {
    Directory(DirectoryTarget),
    Writer(Box<dyn Write>),
}

/// Outcome of a batch export.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub exported: usize,
    pub failed: usize,
}

/// Read a profile JSON file holding a bare profile or an API envelope.
pub fn load_profile(path: &Path) -> Result<UserProfile, ExportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: ProfileDocument =
        serde_json::from_str(&contents).map_err(|source| ExportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(doc.into_profile()?)
}

/// Validate the username and apply the edit form's social url normalization.
pub fn prepare_profile(mut profile: UserProfile) -> Result<UserProfile, ExportError> {
    profile.username = validate_username(&profile.username)?;
    profile.socials = profile.normalize_socials();
    Ok(profile)
}

pub struct Exporter<'a> {
    generator: VcardGenerator<'a>,
    destination: Destination,
}

impl<'a> Exporter<'a> {
    pub fn new(generator: VcardGenerator<'a>, destination: Destination) -> Self {
        Self {
            generator,
            destination,
        }
    }

    /// Export one profile. Returns the written path for directory exports.
    pub fn export_profile(&mut self, profile: UserProfile) -> Result<Option<PathBuf>, ExportError> {
        let profile = prepare_profile(profile)?;
        let file = ContactFile::for_profile(&self.generator, &profile);

        match &mut self.destination {
            Destination::Directory(target) => {
                deliver(target, &file)?;
                Ok(Some(target.dir().join(&file.file_name)))
            }
            Destination::Writer(out) => {
                out.write_all(&file.bytes)?;
                out.write_all(b"\n")?;
                out.flush()?;
                Ok(None)
            }
        }
    }

    pub fn export_path(&mut self, path: &Path) -> Result<Option<PathBuf>, ExportError> {
        let profile = load_profile(path)?;
        self.export_profile(profile)
    }

    /// Export every input, logging and counting failures instead of stopping.
    pub fn export_all(&mut self, inputs: &[PathBuf]) -> ExportSummary {
        let mut summary = ExportSummary::default();
        for input in inputs {
            match self.export_path(input) {
                Ok(written) => {
                    summary.exported += 1;
                    match written {
                        Some(out) => tracing::info!(input = %input.display(), output = %out.display(), "exported"),
                        None => tracing::debug!(input = %input.display(), "exported to writer"),
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!(input = %input.display(), error = %e, "export failed");
                }
            }
        }
        summary
    }
}
