//! Capability traits
//!
//! - [`FileLoader`] / [`FileSaver`]: whole-file load and save
//! - [`Settings`]: sectioned key/value files such as `.ini`
//! - [`Spreadsheet`]: row/column addressed files such as `.csv`
//!
//! The typed getters are provided methods built on `get`. They return
//! `Ok(None)` when the value does not exist, `Err` when it exists but does
//! not convert, and `Ok(Some(_))` otherwise.

use crate::error::{convert, Result, ValueError};

/// Load a store from a file
pub trait FileLoader {
    /// Load from `filename`, or from the remembered filename if it is empty
    fn load(&mut self, filename: &str) -> Result<()>;
}

/// Save a store to a file
pub trait FileSaver {
    /// Save to `filename`, or to the remembered filename if it is empty
    fn save(&mut self, filename: &str) -> Result<()>;
}

/// A settings file: values stored by name under a (possibly unnamed) section
///
/// Setting a value requires it to exist; adding a value requires it not to.
/// Adding to a missing section creates the section.
pub trait Settings: FileLoader + FileSaver {
    fn header_exists(&self, section: &str) -> bool;

    fn value_exists(&self, section: &str, key: &str) -> bool;

    fn add(&mut self, section: &str, key: &str, value: &str) -> Result<()>;

    fn set(&mut self, section: &str, key: &str, value: &str) -> Result<()>;

    fn get(&self, section: &str, key: &str) -> Option<&str>;

    fn get_int(&self, section: &str, key: &str) -> std::result::Result<Option<i64>, ValueError> {
        self.get(section, key).map(|v| convert(v, "i64")).transpose()
    }

    fn get_uint(&self, section: &str, key: &str) -> std::result::Result<Option<u64>, ValueError> {
        self.get(section, key).map(|v| convert(v, "u64")).transpose()
    }

    fn get_float32(
        &self,
        section: &str,
        key: &str,
    ) -> std::result::Result<Option<f32>, ValueError> {
        self.get(section, key).map(|v| convert(v, "f32")).transpose()
    }

    fn get_float64(
        &self,
        section: &str,
        key: &str,
    ) -> std::result::Result<Option<f64>, ValueError> {
        self.get(section, key).map(|v| convert(v, "f64")).transpose()
    }
}

/// A spreadsheet: string cells addressed by row and column
///
/// Setting a cell outside the current bounds grows the sheet with empty
/// rows and cells up to that position.
pub trait Spreadsheet: FileSaver {
    /// Load from `filename`, dropping the first `skip_cols` cells of every
    /// row and the first `skip_rows` lines of the file
    fn load(&mut self, filename: &str, skip_cols: usize, skip_rows: usize) -> Result<()>;

    fn set(&mut self, row: usize, col: usize, value: &str);

    fn get(&self, row: usize, col: usize) -> Option<&str>;

    fn get_int(&self, row: usize, col: usize) -> std::result::Result<Option<i64>, ValueError> {
        self.get(row, col).map(|v| convert(v, "i64")).transpose()
    }

    fn get_uint(&self, row: usize, col: usize) -> std::result::Result<Option<u64>, ValueError> {
        self.get(row, col).map(|v| convert(v, "u64")).transpose()
    }

    fn get_float32(&self, row: usize, col: usize) -> std::result::Result<Option<f32>, ValueError> {
        self.get(row, col).map(|v| convert(v, "f32")).transpose()
    }

    fn get_float64(&self, row: usize, col: usize) -> std::result::Result<Option<f64>, ValueError> {
        self.get(row, col).map(|v| convert(v, "f64")).transpose()
    }
}
