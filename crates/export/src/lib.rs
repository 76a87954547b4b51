use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use findmyshift::StaffRecord;
use serde::Serialize;
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Html,
    Txt,
}

impl OutputFormat {
    pub fn extension(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid format: {0}. Supported formats: json, csv, html, txt")]
    InvalidFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Error writing json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error writing csv: {0}")]
    Csv(#[from] csv::Error),
}

type Result<T> = std::result::Result<T, ExportError>;

/// Writes `records` to `path` as `format`. The format is checked before the
/// file is created.
pub fn save_to_file<P: AsRef<Path>>(path: P, records: &[StaffRecord], format: &str) -> Result<()> {
    let format =
        OutputFormat::from_str(format).map_err(|_| ExportError::InvalidFormat(format.into()))?;

    export(path, records, format)
}

pub fn export<P: AsRef<Path>>(path: P, records: &[StaffRecord], format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), %format, records = records.len(), "exporting");

    match format {
        OutputFormat::Json => write_json(path, records),
        OutputFormat::Csv => write_csv(path, records),
        OutputFormat::Html => write_html(path, records),
        OutputFormat::Txt => write_txt(path, records),
    }
}

fn write_json(path: &Path, records: &[StaffRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);

    records.serialize(&mut serializer)?;
    writer.flush()?;

    Ok(())
}

fn write_csv(path: &Path, records: &[StaffRecord]) -> Result<()> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    w.write_record(["staff_id", "display_name"])?;
    for record in records {
        w.write_record([record.staff_id.as_str(), record.display_name.as_str()])?;
    }
    w.flush()?;

    Ok(())
}

fn write_html(path: &Path, records: &[StaffRecord]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    file.write_all(b"<table>")?;
    file.write_all(b"<tr><th>Employee Name</th></tr>")?;
    for record in records {
        write!(file, "<tr><td>{}</td></tr>", escape_html(&record.display_name))?;
    }
    file.write_all(b"</table>")?;
    file.flush()?;

    Ok(())
}

fn write_txt(path: &Path, records: &[StaffRecord]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    for record in records {
        writeln!(file, "{}", record.display_name)?;
    }
    file.flush()?;

    Ok(())
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }

    out
}
