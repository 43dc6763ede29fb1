//! VisitWall shared library: the profile data model, API envelopes, and constants
//! used by the contact exporter and its callers.

pub mod api;
pub mod constants;
pub mod error;
pub mod profile;
