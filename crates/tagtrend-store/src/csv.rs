//! Minimal comma-separated row codec.
//!
//! Snapshot files are written by this crate (and by earlier tooling) with
//! RFC 4180 style quoting: fields containing a comma, quote, CR or LF are
//! wrapped in double quotes and inner quotes are doubled. Alias lists are the
//! usual reason a field needs quoting.

use std::io::{self, Write};
use std::mem::take;

const SEP: char = ',';

/// Split `text` into rows of fields. Quote and CRLF tolerant; blank lines are
/// skipped and an unterminated quote runs to the end of input.
#[must_use]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            SEP if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    row.push(field);
    flush_row(&mut rows, &mut row);

    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

fn needs_quotes(field: &str) -> bool {
    field.contains([SEP, '"', '\n', '\r'])
}

/// Write one row followed by `\n`.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_row<W, S>(mut w: W, row: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEP}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}
