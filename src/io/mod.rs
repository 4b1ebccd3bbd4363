//! I/O Module
//!
//! Shared plumbing for the file-backed stores.
//!
//! ## Responsibilities
//! - Assemble complete logical lines from a buffered stream
//! - Resolve the filename argument of `load`/`save` against the
//!   remembered filename

mod line_reader;

pub use line_reader::LineReader;

use crate::error::{FlatError, Result};

/// Resolve the filename for a load or save call
///
/// An empty `argument` means "reuse the remembered filename". A non-empty
/// argument replaces the remembered one. Fails with `InvalidArgument` when
/// both are empty.
pub fn resolve_filename(
    argument: &str,
    remembered: &mut String,
    component: &'static str,
) -> Result<String> {
    if argument.is_empty() {
        if remembered.is_empty() {
            return Err(FlatError::invalid_argument(
                component,
                "Internal and argument filenames are empty",
            ));
        }
        return Ok(remembered.clone());
    }

    *remembered = argument.to_string();
    Ok(argument.to_string())
}
