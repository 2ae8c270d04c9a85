//! CSV output for observations.

use proxsearch_domain::{Observation, ObservationSink};
use std::borrow::Cow;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Header row of the output file.
pub const CSV_HEADER: [&str; 3] = ["Filename", "Full Observation", "Core Sentence"];

/// Output file path for `output_name`: ".csv" is appended unless present.
pub fn output_path(output_name: &str) -> PathBuf {
    if output_name.to_ascii_lowercase().ends_with(".csv") {
        PathBuf::from(output_name)
    } else {
        PathBuf::from(format!("{}.csv", output_name))
    }
}

/// Incremental CSV writer for observations.
///
/// The header is written on creation; each observation becomes one row.
/// Rows end with CRLF.
pub struct CsvWriter<W: Write> {
    inner: BufWriter<W>,
    rows: usize,
}

impl<W: Write> CsvWriter<W> {
    /// Create a writer and emit the header row.
    pub fn new(writer: W) -> io::Result<Self> {
        let mut csv = Self {
            inner: BufWriter::new(writer),
            rows: 0,
        };
        csv.write_record(&CSV_HEADER)?;
        Ok(csv)
    }

    /// Number of data rows written.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }

    fn write_record(&mut self, fields: &[&str]) -> io::Result<()> {
        let line = fields
            .iter()
            .map(|f| escape_csv_field(f))
            .collect::<Vec<_>>()
            .join(",");
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\r\n")
    }
}

impl<W: Write> ObservationSink for CsvWriter<W> {
    type Error = io::Error;

    fn write(&mut self, observation: &Observation) -> io::Result<()> {
        self.write_record(&observation.fields())?;
        self.rows += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Escape a field for CSV output.
fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("results"), PathBuf::from("results.csv"));
        assert_eq!(output_path("results.csv"), PathBuf::from("results.csv"));
        assert_eq!(output_path("RESULTS.CSV"), PathBuf::from("RESULTS.CSV"));
        assert_eq!(output_path("out/run.1"), PathBuf::from("out/run.1.csv"));
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field("with\nnewline"), "\"with\nnewline\"");
        assert_eq!(escape_csv_field("with\rreturn"), "\"with\rreturn\"");
    }

    #[test]
    fn test_header_only_when_empty() {
        let writer = CsvWriter::new(Vec::new()).unwrap();
        assert_eq!(writer.rows(), 0);
        let bytes = writer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Filename,Full Observation,Core Sentence\r\n"
        );
    }

    #[test]
    fn test_rows_in_column_order() {
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        writer
            .write(&Observation::new(
                "a.pdf",
                "The flood caused damage, widely. Prices rose.",
                "The flood caused damage, widely.",
            ))
            .unwrap();
        ObservationSink::flush(&mut writer).unwrap();
        assert_eq!(writer.rows(), 1);

        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            "Filename,Full Observation,Core Sentence\r\n\
             a.pdf,\"The flood caused damage, widely. Prices rose.\",\"The flood caused damage, widely.\"\r\n"
        );
    }
}
