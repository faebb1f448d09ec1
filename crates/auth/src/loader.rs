//! Line-oriented parser for service API key files
//!
//! File format:
//! ```text
//! # comments start with #
//! billing = 3f9a6c1e2b7d4a50
//! search  = 9d8c7b6a5f4e3d2c
//! ```
//!
//! Only the first occurrence of the separator splits a line, so keys may
//! contain the separator themselves.

use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Read};

use tracing::{Span, warn};

use crate::error::{AuthError, Result};

/// Longest accepted line in bytes, including its line terminator
///
/// A newline-terminated line can therefore hold at most 65535 bytes of
/// content.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Summary of a single load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines recorded as entries (duplicates included)
    pub loaded: usize,
    /// Lines dropped silently because they contain no separator
    pub skipped: usize,
    /// Lines dropped with a warning because the name or key is empty
    pub rejected: usize,
}

/// Entries parsed from one source, not yet merged into a store
#[derive(Debug, Default)]
pub(crate) struct ParsedKeys {
    pub(crate) valid_keys: HashSet<String>,
    pub(crate) keys_by_name: HashMap<String, String>,
    pub(crate) report: LoadReport,
}

/// Outcome of parsing a single line
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Blank or comment
    Ignored,
    /// No separator on the line
    Unsplit,
    /// Separator present but name or key empty after trimming
    Invalid,
    /// `(service_name, api_key)`
    Entry(&'a str, &'a str),
}

/// Classify one line (without its terminator)
pub(crate) fn parse_line<'a>(line: &'a str, separator: &str) -> Line<'a> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Ignored;
    }

    // Split the raw line, not the trimmed one
    let Some((name, key)) = line.split_once(separator) else {
        return Line::Unsplit;
    };

    let name = name.trim();
    let key = key.trim();
    if name.is_empty() || key.is_empty() {
        return Line::Invalid;
    }

    Line::Entry(name, key)
}

/// Parse every line of `reader`
///
/// `origin` names the source in warnings and errors. Warnings are only
/// emitted when `diagnostics` is set.
pub(crate) fn parse_keys<R: BufRead>(
    mut reader: R,
    separator: &str,
    origin: &str,
    diagnostics: Option<&Span>,
) -> Result<ParsedKeys> {
    let mut parsed = ParsedKeys::default();
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();

        let read = (&mut reader)
            .take(MAX_LINE_LENGTH as u64)
            .read_until(b'\n', &mut buf)
            .map_err(|e| AuthError::scan(origin, line_num + 1, e))?;
        if read == 0 {
            break;
        }
        line_num += 1;

        if read == MAX_LINE_LENGTH && !buf.ends_with(b"\n") {
            return Err(AuthError::scan(
                origin,
                line_num,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line exceeds {} bytes", MAX_LINE_LENGTH),
                ),
            ));
        }

        // Invalid UTF-8 is data, not an I/O failure
        let decoded = String::from_utf8_lossy(&buf);
        let line = strip_terminator(&decoded);

        match parse_line(line, separator) {
            Line::Ignored => {}
            Line::Unsplit => parsed.report.skipped += 1,
            Line::Invalid => {
                parsed.report.rejected += 1;
                if let Some(span) = diagnostics {
                    warn!(
                        parent: span,
                        line = %line,
                        file_path = %origin,
                        "Invalid line in service API keys file"
                    );
                }
            }
            Line::Entry(name, key) => {
                parsed.report.loaded += 1;
                parsed
                    .keys_by_name
                    .insert(name.to_string(), key.to_string());
                parsed.valid_keys.insert(key.to_string());
            }
        }
    }

    Ok(parsed)
}

/// Drop a trailing `\n` or `\r\n`
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
