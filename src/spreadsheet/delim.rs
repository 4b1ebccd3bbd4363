//! Delimited spreadsheet store

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use crate::config::Config;
use crate::error::{FlatError, Result};
use crate::io::{resolve_filename, LineReader};
use crate::traits::{FileSaver, Spreadsheet};

const COMPONENT: &str = "SpreadsheetDelim";

/// A spreadsheet whose cells are separated by a delimiter string and whose
/// rows are separated by newlines
///
/// Rows are stored row-major and may be jagged.
#[derive(Debug, Clone)]
pub struct SpreadsheetDelim {
    /// Initial line buffer capacity used while loading
    buffer_capacity: usize,

    /// Filename remembered from the last load or explicit save
    filename: String,

    /// Cell separator, never empty
    delimiter: String,

    rows: Vec<Vec<String>>,
}

impl SpreadsheetDelim {
    /// Create an empty spreadsheet using `delimiter` as cell separator
    ///
    /// Fails with `InvalidArgument` if the delimiter is empty.
    pub fn new(delimiter: &str) -> Result<Self> {
        let config = Config::builder().delimiter(delimiter).build();
        Self::with_config(&config)
    }

    /// Create an empty spreadsheet from the delimiter and buffer capacity
    /// in `config`
    pub fn with_config(config: &Config) -> Result<Self> {
        if config.delimiter.is_empty() {
            return Err(FlatError::invalid_argument(COMPONENT, "Delimiter must not be empty"));
        }

        Ok(Self {
            buffer_capacity: config.buffer_capacity,
            filename: String::new(),
            delimiter: config.delimiter.clone(),
            rows: Vec::new(),
        })
    }

    /// Replace the contents with rows read from `reader`
    ///
    /// The first `skip_rows` lines are dropped whatever they contain. Of the
    /// remaining lines, empty ones are ignored and every other line loses its
    /// first `skip_cols` cells; a line with no cells left is ignored.
    ///
    /// On a read error the rows read so far are kept.
    pub fn read_from<R: BufRead>(
        &mut self,
        reader: R,
        skip_cols: usize,
        skip_rows: usize,
    ) -> Result<()> {
        self.rows.clear();

        let mut lines = LineReader::new(reader, self.buffer_capacity);
        let mut skipped = 0usize;

        loop {
            let eof = lines.read_line().map_err(|e| {
                FlatError::loading(COMPONENT, format!("Failed to read a new line: {}", e))
            })?;

            if skipped < skip_rows {
                skipped += 1;
            } else if !lines.line().is_empty() {
                let text = lines.line_str().map_err(|e| {
                    FlatError::loading(COMPONENT, format!("Failed to read a new line: {}", e))
                })?;

                let cells: Vec<&str> = text.split(self.delimiter.as_str()).collect();

                if cells.len() > skip_cols {
                    self.rows
                        .push(cells[skip_cols..].iter().map(|c| c.to_string()).collect());
                } else {
                    tracing::trace!(
                        cells = cells.len(),
                        skip_cols,
                        "row has no cells left after skipping"
                    );
                }
            }

            if eof {
                break;
            }
        }

        Ok(())
    }

    /// Write every row to `writer`, cells joined by the delimiter
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for row in &self.rows {
            writeln!(writer, "{}", row.join(self.delimiter.as_str())).map_err(|e| {
                FlatError::saving(COMPONENT, format!("Failed to write data row: {}", e))
            })?;
        }

        writer.flush().map_err(|e| {
            FlatError::saving(COMPONENT, format!("Failed to flush spreadsheet: {}", e))
        })
    }

    /// Filename remembered from the last load or explicit save
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl FileSaver for SpreadsheetDelim {
    fn save(&mut self, filename: &str) -> Result<()> {
        let filename = resolve_filename(filename, &mut self.filename, COMPONENT)?;

        let file = File::create(&filename).map_err(|e| {
            FlatError::saving(
                COMPONENT,
                format!("Failed to create {} for writing: {}", filename, e),
            )
        })?;

        self.write_to(BufWriter::new(file))?;

        tracing::debug!(file = %filename, rows = self.rows.len(), "saved spreadsheet");
        Ok(())
    }
}

impl Spreadsheet for SpreadsheetDelim {
    fn load(&mut self, filename: &str, skip_cols: usize, skip_rows: usize) -> Result<()> {
        let filename = resolve_filename(filename, &mut self.filename, COMPONENT)?;

        let file = File::open(&filename).map_err(|e| {
            FlatError::loading(COMPONENT, format!("Failed to load {}: {}", filename, e))
        })?;

        self.read_from(BufReader::new(file), skip_cols, skip_rows)?;

        tracing::debug!(
            file = %filename,
            rows = self.rows.len(),
            skip_cols,
            skip_rows,
            "loaded spreadsheet"
        );
        Ok(())
    }

    fn set(&mut self, row: usize, col: usize, value: &str) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }

        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, String::new);
        }

        cells[col] = value.to_string();
    }

    fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
