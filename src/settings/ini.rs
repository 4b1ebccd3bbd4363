//! Settings store backed by `.ini`-style files

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use crate::config::Config;
use crate::error::{FlatError, Result};
use crate::io::{resolve_filename, LineReader};
use crate::traits::{FileLoader, FileSaver, Settings};

use super::parser::{parse_line, IniLine};
use super::Section;

const COMPONENT: &str = "SettingsIni";

/// The contents of an `.ini`-style settings file
///
/// Sections are keyed by name; `""` is the unnamed section holding pairs
/// that appear before the first header.
#[derive(Debug, Clone)]
pub struct SettingsIni {
    /// Initial line buffer capacity used while loading
    buffer_capacity: usize,

    /// Filename remembered from the last load or explicit save
    filename: String,

    sections: BTreeMap<String, Section>,
}

impl SettingsIni {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create an empty store using the buffer capacity from `config`
    pub fn with_config(config: &Config) -> Self {
        Self {
            buffer_capacity: config.buffer_capacity,
            filename: String::new(),
            sections: BTreeMap::new(),
        }
    }

    /// Replace the contents with settings parsed from `reader`
    ///
    /// The store is cleared first. On a parse or read error it stays empty.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.sections.clear();

        let mut lines = LineReader::new(reader, self.buffer_capacity);
        let mut sections: BTreeMap<String, Section> = BTreeMap::new();
        let mut current: Option<String> = None;
        let mut line_no = 0usize;

        loop {
            let eof = lines.read_line().map_err(|e| {
                FlatError::loading(COMPONENT, format!("Failed to read new line: {}", e))
            })?;
            line_no += 1;

            let text = lines.line_str().map_err(|_| {
                FlatError::parsing(COMPONENT, format!("line {}: not valid UTF-8", line_no))
            })?;

            let parsed = parse_line(text).map_err(|msg| {
                FlatError::parsing(COMPONENT, format!("line {}: {}", line_no, msg))
            })?;

            match parsed {
                IniLine::Blank | IniLine::Comment => {}
                IniLine::Header(name) => {
                    if sections.contains_key(name) {
                        return Err(FlatError::parsing(
                            COMPONENT,
                            format!("line {}: Header name [{}] is specified twice", line_no, name),
                        ));
                    }
                    tracing::trace!(line = line_no, section = name, "header");
                    sections.insert(name.to_string(), Section::new());
                    current = Some(name.to_string());
                }
                IniLine::Pair { key, value } => {
                    let name = current.get_or_insert_with(String::new);
                    sections
                        .entry(name.clone())
                        .or_default()
                        .insert(key.to_string(), value.to_string());
                }
            }

            if eof {
                break;
            }
        }

        self.sections = sections;
        Ok(())
    }

    /// Write all settings to `writer`, unnamed section first
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        if let Some(section) = self.sections.get("") {
            write_pairs(&mut writer, section).map_err(|e| {
                FlatError::saving(
                    COMPONENT,
                    format!("Failed to write headerless value pair: {}", e),
                )
            })?;
        }

        for (name, section) in self.sections.iter().filter(|(name, _)| !name.is_empty()) {
            writeln!(writer, "[{}]", name).map_err(|e| {
                FlatError::saving(COMPONENT, format!("Failed to write header: {}", e))
            })?;

            write_pairs(&mut writer, section).map_err(|e| {
                FlatError::saving(
                    COMPONENT,
                    format!("Failed to write headered value pair: {}", e),
                )
            })?;
        }

        writer
            .flush()
            .map_err(|e| FlatError::saving(COMPONENT, format!("Failed to flush settings: {}", e)))
    }

    /// Filename remembered from the last load or explicit save
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Sections in name order (the unnamed section sorts first)
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SettingsIni {
    fn default() -> Self {
        Self::new()
    }
}

fn write_pairs<W: Write>(writer: &mut W, section: &Section) -> std::io::Result<()> {
    for (key, value) in section.iter() {
        writeln!(writer, "{} = {}", key, value)?;
    }
    Ok(())
}

impl FileLoader for SettingsIni {
    fn load(&mut self, filename: &str) -> Result<()> {
        let filename = resolve_filename(filename, &mut self.filename, COMPONENT)?;

        let file = File::open(&filename).map_err(|e| {
            FlatError::loading(COMPONENT, format!("Failed to open {}: {}", filename, e))
        })?;

        self.read_from(BufReader::new(file))?;

        tracing::debug!(
            file = %filename,
            sections = self.sections.len(),
            "loaded settings"
        );
        Ok(())
    }
}

impl FileSaver for SettingsIni {
    fn save(&mut self, filename: &str) -> Result<()> {
        let filename = resolve_filename(filename, &mut self.filename, COMPONENT)?;

        let file = File::create(&filename).map_err(|e| {
            FlatError::saving(COMPONENT, format!("Failed to open {} for writing: {}", filename, e))
        })?;

        self.write_to(BufWriter::new(file))?;

        tracing::debug!(
            file = %filename,
            sections = self.sections.len(),
            "saved settings"
        );
        Ok(())
    }
}

impl Settings for SettingsIni {
    fn header_exists(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    fn value_exists(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .map_or(false, |s| s.contains(key))
    }

    fn add(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let section_values = self.sections.entry(section.to_string()).or_default();

        if section_values.contains(key) {
            return Err(FlatError::already_exists(
                COMPONENT,
                format!("Value pair {} already exists in [{}]", key, section),
            ));
        }

        section_values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let section_values = self.sections.get_mut(section).ok_or_else(|| {
            FlatError::not_found(
                COMPONENT,
                format!("Could not find header [{}] while setting value", section),
            )
        })?;

        let slot = section_values.get_mut(key).ok_or_else(|| {
            FlatError::not_found(
                COMPONENT,
                format!("Could not find value pair {} while setting value", key),
            )
        })?;

        *slot = value.to_string();
        Ok(())
    }

    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key)
    }
}
