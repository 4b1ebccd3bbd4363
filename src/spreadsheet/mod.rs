//! Spreadsheet Module
//!
//! Delimiter-separated files in the style of `.csv`.
//!
//! ## File Format
//! ```text
//! a,b,c        <- row 0
//! 1,2          <- row 1 (rows may differ in length)
//! ```
//!
//! Rows are separated by newlines and cells by a caller-supplied delimiter
//! string. There is no quoting: a cell cannot contain the delimiter.

mod delim;

pub use delim::SpreadsheetDelim;
