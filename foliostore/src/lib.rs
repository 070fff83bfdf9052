//! Folio storage utilities crate.
//!
//! This crate contains the small filesystem-backed pieces shared by the
//! folio web server: the JSON-file image slot mapping (`store`) and upload
//! filename derivation (`naming`). These modules are intentionally minimal
//! and focus on the server's persistence needs rather than being
//! general-purpose libraries.
//!
/// Image slot mapping persisted as a single JSON file
pub mod store;
/// Stored-filename derivation for uploads
pub mod naming;
