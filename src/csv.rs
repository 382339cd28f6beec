// src/csv.rs
use std::io::{self, Write};

/* ---------------- Delimiters ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
    pub fn ext(&self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
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

/// Stringify a whole table, header line first when present.
pub fn rows_to_string(headers: &Option<Vec<String>>, rows: &[Vec<String>], delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
