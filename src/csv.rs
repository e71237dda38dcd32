// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline, even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Position of each wanted column in a header row (case-insensitive, trimmed).
pub fn header_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string (Copy/Export) from headers + rows.
pub fn to_export_string(
    headers: &[&str],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r.as_slice(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let rows = parse_rows("a,\"b,c\",\"say \"\"hi\"\"\"\r\n1,2,3\r\n", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b,c"), s!("say \"hi\"")],
            vec![s!("1"), s!("2"), s!("3")],
        ]);
    }

    #[test]
    fn trailing_row_without_newline_is_kept() {
        let rows = parse_rows("x,y\n1,2", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![s!("1"), s!("2")]);
    }

    #[test]
    fn empty_trailing_field_is_kept() {
        let rows = parse_rows("a,b,\n", ',');
        assert_eq!(rows, vec![vec![s!("a"), s!("b"), s!()]]);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["Congo, Republic of the", "1"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"Congo, Republic of the\",1\n");

        let mut tsv = Vec::new();
        write_row(&mut tsv, &["Congo, Republic of the", "1"], '\t').unwrap();
        assert_eq!(String::from_utf8(tsv).unwrap(), "Congo, Republic of the\t1\n");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let h = vec![s!("Long"), s!(" lat "), s!("region")];
        assert_eq!(header_index(&h, "lat"), Some(1));
        assert_eq!(header_index(&h, "group"), None);
    }
}
