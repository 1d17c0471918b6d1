//! Tabular output for the list commands.
//!
//! Every listing is a fixed set of columns. Table output is tab-separated
//! with upper-case headers and human dates; CSV and TSV go through the `csv`
//! crate with lower-case headers; JSON is an array of objects.

use crate::error::CliError;
use hotelbao::config::OutputFormat;
use hotelbao::Config;
use std::io::Write;

/// One listing ready to print.
pub struct Listing {
    columns: &'static [&'static str],
    table_rows: Vec<Vec<String>>,
    records: Vec<Vec<String>>,
    json: Vec<serde_json::Value>,
}

impl Listing {
    /// Starts an empty listing with the given column names.
    pub fn new(columns: &'static [&'static str]) -> Self {
        Self {
            columns,
            table_rows: Vec::new(),
            records: Vec::new(),
            json: Vec::new(),
        }
    }

    /// Adds one row.
    ///
    /// `table` holds the cells shown to people, `record` the cells written
    /// to CSV/TSV, and `json` the object emitted for JSON output.
    pub fn push(&mut self, table: Vec<String>, record: Vec<String>, json: serde_json::Value) {
        self.table_rows.push(table);
        self.records.push(record);
        self.json.push(json);
    }

    /// Writes the listing to stdout.
    pub fn print(&self, format: OutputFormat) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, format)
    }

    /// Writes the listing to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Csv => self.write_delimited(out, b','),
            OutputFormat::Tsv => self.write_delimited(out, b'\t'),
        }
    }

    fn write_table<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let header_line = self
            .columns
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, "{header_line}")?;

        for row in &self.table_rows {
            writeln!(out, "{}", row.join("\t"))?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut *out, &self.json)
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        writeln!(out)?;
        Ok(())
    }

    fn write_delimited<W: Write>(&self, out: &mut W, delimiter: u8) -> Result<(), CliError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(out);

        writer.write_record(self.columns).map_err(csv_error)?;
        for record in &self.records {
            writer.write_record(record).map_err(csv_error)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Pick the output format: the `--format` flag, then the configured
/// `output_format`, then table.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Parser for `--format`, case-insensitive.
pub fn parse_format(text: &str) -> Result<OutputFormat, String> {
    text.parse()
}

/// Text for an optional cell in table output.
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "N/A".to_string(),
    }
}
