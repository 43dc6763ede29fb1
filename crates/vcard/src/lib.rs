//! Contact file export for VisitWall profiles.
//!
//! Turns a [`UserProfile`](visitwall_shared::profile::UserProfile) into a
//! vCard 3.0 document and hands the resulting file to a download target.

pub mod download;
pub mod error;
pub mod escape;
pub mod generator;
pub mod options;
pub mod photo;
pub mod social;

pub use generator::{generate_vcard, VcardGenerator};
pub use options::VcardOptions;
