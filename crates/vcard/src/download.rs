//! Handing a generated contact file to whatever saves it.
//!
//! Delivery is a three step sequence: acquire a transient handle on the file
//! bytes, trigger the save, release the handle. [`deliver`] runs the sequence
//! as one unit and always releases, whether or not the trigger succeeded.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use visitwall_shared::constants::{VCARD_FILE_EXTENSION, VCARD_MIME_TYPE};
use visitwall_shared::profile::UserProfile;

use crate::error::VcardError;
use crate::generator::VcardGenerator;

/// A contact document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ContactFile {
    pub fn new(file_name: impl Into<String>, contents: String) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: VCARD_MIME_TYPE,
            bytes: contents.into_bytes(),
        }
    }

    /// `<username>.vcf` holding the profile's contact document.
    pub fn for_profile(generator: &VcardGenerator<'_>, profile: &UserProfile) -> Self {
        Self::new(
            format!("{}.{VCARD_FILE_EXTENSION}", profile.username),
            generator.generate(profile),
        )
    }
}

/// Something that can save a [`ContactFile`].
pub trait DownloadTarget {
    /// Transient reference to the staged bytes.
    type Handle;

    fn acquire(&mut self, file: &ContactFile) -> Result<Self::Handle, VcardError>;
    fn trigger(&mut self, handle: &Self::Handle, file: &ContactFile) -> Result<(), VcardError>;
    fn release(&mut self, handle: Self::Handle);
}

/// Acquire, trigger and release in order. The handle is released even when
/// the trigger fails; the trigger's result is returned.
pub fn deliver<T: DownloadTarget>(target: &mut T, file: &ContactFile) -> Result<(), VcardError> {
    let handle = target.acquire(file)?;
    let result = target.trigger(&handle, file);
    target.release(handle);
    match &result {
        Ok(()) => tracing::debug!(file_name = %file.file_name, bytes = file.bytes.len(), "contact file delivered"),
        Err(e) => tracing::warn!(file_name = %file.file_name, error = %e, "contact file delivery failed"),
    }
    result
}

/// Saves contact files into a directory.
///
/// The bytes are staged in a temp file next to the destination and renamed
/// into place, so a failed save never leaves a partial `.vcf` behind.
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    /// Creates the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, VcardError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination path for a file name, rejecting names that would escape
    /// the directory.
    pub fn destination(&self, file_name: &str) -> Result<PathBuf, VcardError> {
        let path = Path::new(file_name);
        let plain = path.components().count() == 1
            && path.file_name().map(|n| n == path.as_os_str()).unwrap_or(false);
        if file_name.is_empty() || !plain {
            return Err(VcardError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.dir.join(path))
    }
}

impl DownloadTarget for DirectoryTarget {
    type Handle = TempPath;

    fn acquire(&mut self, file: &ContactFile) -> Result<TempPath, VcardError> {
        let mut staged = tempfile::Builder::new()
            .prefix(".visitwall-")
            .suffix(".part")
            .tempfile_in(&self.dir)?;
        staged.write_all(&file.bytes)?;
        staged.flush()?;
        Ok(staged.into_temp_path())
    }

    fn trigger(&mut self, handle: &TempPath, file: &ContactFile) -> Result<(), VcardError> {
        let dest = self.destination(&file.file_name)?;
        std::fs::rename(handle, &dest)?;
        tracing::info!(path = %dest.display(), "contact file saved");
        Ok(())
    }

    fn release(&mut self, handle: TempPath) {
        // NotFound is the normal case: a successful rename moved the staged file.
        if let Err(e) = handle.close() {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, "failed to remove staged contact file");
            }
        }
    }
}
