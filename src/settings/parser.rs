//! Line classification for settings files

/// A single trimmed line of a settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IniLine<'a> {
    /// Empty or whitespace-only
    Blank,

    /// Starts with `//`
    Comment,

    /// `[name]`
    Header(&'a str),

    /// `key = value`
    Pair { key: &'a str, value: &'a str },
}

/// Classify one raw line, returning a message on malformed input
pub(crate) fn parse_line(raw: &str) -> Result<IniLine<'_>, &'static str> {
    let line = raw.trim();

    if line.is_empty() {
        return Ok(IniLine::Blank);
    }

    if line.starts_with("//") {
        return Ok(IniLine::Comment);
    }

    if let Some(rest) = line.strip_prefix('[') {
        let name = rest
            .strip_suffix(']')
            .ok_or("Invalid header syntax encountered")?;

        if name.is_empty() {
            return Err("No header name specified between brackets");
        }

        return Ok(IniLine::Header(name));
    }

    let (key, value) = line
        .split_once('=')
        .ok_or("Expected to find an equal-character")?;

    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return Err("Value pair encountered without name");
    }

    if value.is_empty() {
        return Err("Value pair encountered without value");
    }

    Ok(IniLine::Pair { key, value })
}
