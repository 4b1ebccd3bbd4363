//! SettingsIni Tests
//!
//! Tests verify:
//! - Parsing headers, pairs, comments and the unnamed section
//! - Parse errors abort the load and leave the store empty
//! - Add / Set / Get semantics
//! - Typed getters
//! - Filename resolution for load and save

use std::fs;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use flatfile::{ErrorKind, FileLoader, FileSaver, Settings, SettingsIni};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.ini");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn parse(text: &str) -> flatfile::Result<SettingsIni> {
    let mut settings = SettingsIni::new();
    settings.read_from(text.as_bytes())?;
    Ok(settings)
}

fn parse_err_kind(text: &str) -> ErrorKind {
    parse(text).unwrap_err().kind()
}

/// Hands out `data`, then fails every further read
struct FailingReader {
    data: &'static [u8],
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Accepts `budget` bytes, then fails every write and flush
struct FailingWriter {
    written: Vec<u8>,
    budget: usize,
}

impl FailingWriter {
    fn new(budget: usize) -> Self {
        Self { written: Vec::new(), budget }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        let n = buf.len().min(self.budget);
        self.written.extend_from_slice(&buf[..n]);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        Ok(())
    }
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_two_sections() {
    let settings = parse("[A]\nx = 1\n[B]\ny = 2\n").unwrap();

    assert_eq!(settings.section_count(), 2);
    assert!(settings.header_exists("A"));
    assert!(settings.header_exists("B"));
    assert!(!settings.header_exists(""));
    assert_eq!(settings.get("A", "x"), Some("1"));
    assert_eq!(settings.get("B", "y"), Some("2"));
    assert_eq!(settings.get("A", "y"), None);
}

#[test]
fn test_pairs_before_header_go_to_unnamed_section() {
    let settings = parse("top = 1\n[A]\nx = 2").unwrap();

    assert!(settings.header_exists(""));
    assert_eq!(settings.get("", "top"), Some("1"));
    assert_eq!(settings.get("A", "x"), Some("2"));
    assert_eq!(settings.get("", "x"), None);
}

#[test]
fn test_whitespace_comments_and_blank_lines() {
    let text = "\n   // leading comment\n\t[Main]  \n  name   =   some value  \n\n// x = 1\n";
    let settings = parse(text).unwrap();

    assert_eq!(settings.get("Main", "name"), Some("some value"));
    assert!(!settings.value_exists("Main", "x"));
    assert!(!settings.value_exists("Main", "// x"));
}

#[test]
fn test_value_may_contain_equal_sign() {
    let settings = parse("[A]\nurl = http://h/?a=b\n").unwrap();
    assert_eq!(settings.get("A", "url"), Some("http://h/?a=b"));
}

#[test]
fn test_repeated_key_overwrites() {
    let settings = parse("[A]\nx = 1\nx = 2\n").unwrap();
    assert_eq!(settings.get("A", "x"), Some("2"));
    assert_eq!(settings.section("A").unwrap().len(), 1);
}

#[test]
fn test_empty_header_section_is_kept() {
    let settings = parse("[Empty]\n[Full]\na = b\n").unwrap();
    assert!(settings.header_exists("Empty"));
    assert!(settings.section("Empty").unwrap().is_empty());
}

#[test]
fn test_crlf_input() {
    let settings = parse("[A]\r\nx = 1\r\n").unwrap();
    assert_eq!(settings.get("A", "x"), Some("1"));
}

// =============================================================================
// Parse Error Tests
// =============================================================================

#[test]
fn test_empty_header_name_fails() {
    assert_eq!(parse_err_kind("[]\n"), ErrorKind::Parsing);
}

#[test]
fn test_unterminated_header_fails() {
    assert_eq!(parse_err_kind("[A\nx = 1\n"), ErrorKind::Parsing);
    assert_eq!(parse_err_kind("["), ErrorKind::Parsing);
}

#[test]
fn test_duplicate_header_fails() {
    let err = parse("[A]\nx = 1\n[A]\ny = 2\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
    assert_eq!(err.component(), "SettingsIni");
    assert!(err.message().contains("line 3"));
}

#[test]
fn test_missing_equal_fails() {
    assert_eq!(parse_err_kind("[A]\njust text\n"), ErrorKind::Parsing);
}

#[test]
fn test_empty_key_or_value_fails() {
    assert_eq!(parse_err_kind("= 1\n"), ErrorKind::Parsing);
    assert_eq!(parse_err_kind("x =\n"), ErrorKind::Parsing);
    assert_eq!(parse_err_kind("x =    \n"), ErrorKind::Parsing);
}

#[test]
fn test_failed_parse_leaves_store_empty() {
    let mut settings = parse("[Old]\nkept = no\n").unwrap();
    assert!(settings.header_exists("Old"));

    let err = settings.read_from(&b"[New]\nok = 1\nbroken\n"[..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
    assert!(settings.is_empty());
    assert!(!settings.header_exists("Old"));
    assert!(!settings.header_exists("New"));
}

// =============================================================================
// Add / Set / Get Tests
// =============================================================================

#[test]
fn test_add_creates_section() {
    let mut settings = SettingsIni::new();
    settings.add("S", "k", "v").unwrap();

    assert!(settings.header_exists("S"));
    assert!(settings.value_exists("S", "k"));
    assert_eq!(settings.get("S", "k"), Some("v"));
}

#[test]
fn test_add_existing_fails_and_keeps_value() {
    let mut settings = SettingsIni::new();
    settings.add("S", "k", "first").unwrap();

    let err = settings.add("S", "k", "second").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(settings.get("S", "k"), Some("first"));
}

#[test]
fn test_set_existing_overwrites() {
    let mut settings = SettingsIni::new();
    settings.add("", "k", "1").unwrap();
    settings.set("", "k", "2").unwrap();
    assert_eq!(settings.get("", "k"), Some("2"));
}

#[test]
fn test_set_missing_fails_and_creates_nothing() {
    let mut settings = SettingsIni::new();

    let err = settings.set("S", "k", "v").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!settings.header_exists("S"));

    settings.add("S", "other", "v").unwrap();
    let err = settings.set("S", "k", "v").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!settings.value_exists("S", "k"));
}

#[test]
fn test_value_exists_on_missing_section() {
    let settings = SettingsIni::new();
    assert!(!settings.value_exists("nope", "k"));
    assert_eq!(settings.get("nope", "k"), None);
    assert!(!settings.header_exists("nope"));
}

// =============================================================================
// Typed Getter Tests
// =============================================================================

#[test]
fn test_typed_getters_convert() {
    let settings = parse("[N]\ni = -42\nu = 42\nf = 2.5\n").unwrap();

    assert_eq!(settings.get_int("N", "i"), Ok(Some(-42)));
    assert_eq!(settings.get_uint("N", "u"), Ok(Some(42)));
    assert_eq!(settings.get_float32("N", "f"), Ok(Some(2.5f32)));
    assert_eq!(settings.get_float64("N", "f"), Ok(Some(2.5f64)));
}

#[test]
fn test_typed_getter_on_non_numeric_value() {
    let settings = parse("[N]\nx = x\nneg = -1\n").unwrap();

    let err = settings.get_int("N", "x").unwrap_err();
    assert_eq!(err.value, "x");
    assert_eq!(err.target, "i64");
    assert!(settings.get_float64("N", "x").is_err());
    assert!(settings.get_uint("N", "neg").is_err());
}

#[test]
fn test_typed_getter_on_absent_value() {
    let settings = parse("[N]\nx = 1\n").unwrap();

    assert_eq!(settings.get_int("N", "missing"), Ok(None));
    assert_eq!(settings.get_uint("missing", "x"), Ok(None));
    assert_eq!(settings.get_float32("N", "missing"), Ok(None));
    assert_eq!(settings.get_float64("missing", "missing"), Ok(None));
}

// =============================================================================
// File Tests
// =============================================================================

#[test]
fn test_load_from_file_remembers_filename() {
    let (_temp, path) = setup_temp_file("[A]\nx = 1\n");
    let path_str = path.to_str().unwrap();

    let mut settings = SettingsIni::new();
    settings.load(path_str).unwrap();

    assert_eq!(settings.filename(), path_str);
    assert_eq!(settings.get("A", "x"), Some("1"));

    fs::write(&path, "[A]\nx = 2\n").unwrap();
    settings.load("").unwrap();
    assert_eq!(settings.get("A", "x"), Some("2"));
}

#[test]
fn test_load_without_any_filename_fails() {
    let mut settings = SettingsIni::new();
    assert_eq!(settings.load("").unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_save_without_any_filename_fails() {
    let mut settings = SettingsIni::new();
    settings.add("A", "x", "1").unwrap();
    assert_eq!(settings.save("").unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.ini");

    let mut settings = SettingsIni::new();
    let err = settings.load(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Loading);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("out.ini");

    let mut settings = SettingsIni::new();
    settings.add("A", "x", "1").unwrap();
    let err = settings.save(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Saving);
}

#[test]
fn test_save_writes_unnamed_section_first() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.ini");

    let mut settings = SettingsIni::new();
    settings.add("Zeta", "z", "26").unwrap();
    settings.add("", "top", "0").unwrap();
    settings.add("Alpha", "a", "1").unwrap();
    settings.save(path.to_str().unwrap()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "top = 0\n[Alpha]\na = 1\n[Zeta]\nz = 26\n");
}

#[test]
fn test_explicit_save_filename_is_remembered() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.ini");

    let mut settings = SettingsIni::new();
    settings.add("A", "x", "1").unwrap();
    settings.save(first.to_str().unwrap()).unwrap();
    assert_eq!(settings.filename(), first.to_str().unwrap());

    settings.set("A", "x", "2").unwrap();
    settings.save("").unwrap();

    let mut reloaded = SettingsIni::new();
    reloaded.load(first.to_str().unwrap()).unwrap();
    assert_eq!(reloaded.get("A", "x"), Some("2"));
}

// =============================================================================
// I/O Failure Tests
// =============================================================================

#[test]
fn test_read_failure_mid_file_leaves_store_empty() {
    let mut settings = parse("[Old]\nkept = no\n").unwrap();

    let reader = BufReader::with_capacity(4, FailingReader { data: b"[A]\nx = 1\ny = 2\n" });
    let err = settings.read_from(reader).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Loading);
    assert_eq!(err.component(), "SettingsIni");
    assert!(settings.is_empty());
    assert!(!settings.header_exists("A"));
    assert!(!settings.header_exists("Old"));
}

#[test]
fn test_write_failure_is_a_saving_error() {
    let mut settings = SettingsIni::new();
    settings.add("", "top", "1").unwrap();
    settings.add("A", "x", "2").unwrap();

    // Fails on the first byte, inside the unnamed section
    let err = settings.write_to(FailingWriter::new(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Saving);

    // Fails partway through, after the unnamed section
    let mut writer = FailingWriter::new(10);
    let err = settings.write_to(&mut writer).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Saving);
    assert_eq!(writer.written, b"top = 1\n[A");

    // Values are untouched by the failed save
    assert_eq!(settings.get("A", "x"), Some("2"));
}

#[test]
fn test_flush_failure_is_a_saving_error() {
    let settings = SettingsIni::new();
    let err = settings.write_to(FailingWriter::new(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Saving);
}
