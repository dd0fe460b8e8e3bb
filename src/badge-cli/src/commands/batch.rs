//! Batch card decoding

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Header row of the tab-separated output
const HEADER: &str = "hex\tfacility_code\tcard_number\tbit_pattern";

/// Counts from a batch run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub decoded: usize,
    pub errors: usize,
}

/// Decode one hex value per line into tab-separated rows
///
/// Blank lines are skipped. Lines that fail to decode, including lines that
/// are not valid UTF-8, are written with the error message in place of the
/// fields and counted, without stopping the run.
pub fn decode_lines<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    writeln!(writer, "{}", HEADER)?;

    for (line_no, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.context("Failed to read line")?;

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                let lossy = String::from_utf8_lossy(e.as_bytes());
                let text = escape_field(lossy.trim());
                let err = badge::DecodeError::InvalidHex;
                tracing::warn!(line = line_no + 1, hex = %text, error = %err, "line is not UTF-8");
                writeln!(writer, "{}\terror: {}", text, err)?;
                summary.errors += 1;
                continue;
            }
        };

        let hex = line.trim();
        if hex.is_empty() {
            continue;
        }

        match badge::decode_hex(hex) {
            Ok(card) => {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    hex, card.facility_code, card.card_number, card.bit_pattern
                )?;
                summary.decoded += 1;
            }
            Err(e) => {
                let text = escape_field(hex);
                tracing::warn!(line = line_no + 1, hex = %text, error = %e, "failed to decode");
                writeln!(writer, "{}\terror: {}", text, e)?;
                summary.errors += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Escape tabs and stray carriage returns so a field stays in its column
fn escape_field(field: &str) -> String {
    field.replace('\t', "\\t").replace('\r', "\\r")
}

/// Handle the batch command
pub fn handle(input: &Path, output: Option<&Path>) -> Result<()> {
    let file =
        fs::File::open(input).with_context(|| format!("Failed to open input file: {:?}", input))?;
    let reader = BufReader::new(file);

    let summary = match output {
        Some(path) => {
            let out_file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            let mut writer = BufWriter::new(out_file);
            decode_lines(reader, &mut writer)?
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            decode_lines(reader, &mut writer)?
        }
    };

    eprintln!(
        "Decoded {} cards ({} errors)",
        summary.decoded, summary.errors
    );

    Ok(())
}
