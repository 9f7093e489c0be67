// src/csv.rs
use std::io::{self, Write};
use std::iter::repeat_n;

use crate::{
    model::{field_table, EntityType, AREA_FIELDS, UNIVERSITY_FIELDS},
    service::Resolved,
};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
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

/* ---------------- Entity rows ---------------- */

const BASE_COLUMNS: &[&str] = &["id", "type", "name", "slug", "url"];

/// One table for all categories: base columns, then area stats, then university stats.
pub fn export_headers() -> Vec<String> {
    BASE_COLUMNS
        .iter()
        .chain(AREA_FIELDS.iter().map(|(key, _)| key))
        .chain(UNIVERSITY_FIELDS.iter().map(|(key, _)| key))
        .map(|c| s!(*c))
        .collect()
}

/// Missing statistics (and the other category's columns) export as empty cells.
pub fn export_row(item: &Resolved<'_>) -> Vec<String> {
    let e = item.entity;
    let mut row = vec![e.id.clone(), s!(e.kind.label()), e.name.clone(), e.slug.clone(), e.url.clone()];

    let stats: Vec<String> = match item.detail {
        Some(d) => d.fields().iter().map(|f| f.value.map(|v| v.to_string()).unwrap_or_default()).collect(),
        None => vec![s!(); field_table(e.kind).len()],
    };

    match e.kind {
        EntityType::University => {
            row.extend(repeat_n(s!(), AREA_FIELDS.len()));
            row.extend(stats);
        }
        EntityType::State | EntityType::County => {
            row.extend(stats);
            row.extend(repeat_n(s!(), UNIVERSITY_FIELDS.len()));
        }
    }
    row
}

/// Build the whole export text.
pub fn to_export_string(items: &[Resolved<'_>], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, &export_headers(), sep);
    }
    for item in items {
        let _ = write_row(&mut buf, &export_row(item), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
