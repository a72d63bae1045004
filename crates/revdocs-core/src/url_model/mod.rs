//! URL modeling and destination derivation.
//!
//! Maps each document URL to `<base>/<last path segment>/index.{html,pdf}`.
//! Folder names are taken verbatim from the URL path; two URLs sharing a
//! final segment resolve to the same file.

mod destination;
mod path;

pub use destination::{Destination, DocKind};
pub use path::path_segment;
