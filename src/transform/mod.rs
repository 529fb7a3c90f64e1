//! Row-by-row conversion of tech files.
//!
//! Every cell whose exact value is a palette color name is replaced with the
//! color's hex code. All other cells, row order and field counts are left
//! untouched. There is no header row: the first line is converted like any
//! other.
//!
//! Empty lines are kept as empty rows. On failure the output file may be
//! left partially written. Rows converted before the error are kept; nothing
//! is rolled back.

pub mod error;
pub mod result;

use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Write};
use std::ops::Range;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::color::palette;
use crate::Config;

pub use error::TransformError;
pub use result::Summary;

/// Convert a single cell.
///
/// Returns the hex code for palette names and the borrowed input otherwise.
pub fn transform_cell(cell: &str) -> Cow<'_, str> {
    match palette::lookup(cell) {
        Some(rgb) => {
            let hex = rgb.to_hex();
            tracing::trace!(cell, hex = hex.as_str(), "converted color cell");
            Cow::Owned(hex)
        }
        None => Cow::Borrowed(cell),
    }
}

/// Convert every cell of a row, keeping field count and order.
pub fn transform_row(row: &StringRecord) -> StringRecord {
    row.iter().map(transform_cell).collect()
}

fn is_line_break(byte: u8) -> bool {
    byte == b'\r' || byte == b'\n'
}

/// Number of line breaks in `input[range]`. `\r\n`, `\n` and a lone `\r`
/// each count once.
fn count_line_breaks(input: &[u8], range: Range<usize>) -> usize {
    range
        .filter(|&i| match input[i] {
            b'\n' => true,
            b'\r' => input.get(i + 1) != Some(&b'\n'),
            _ => false,
        })
        .count()
}

/// Offset of the first byte at or after `from` that is not a line break.
fn skip_line_breaks(input: &[u8], from: usize) -> usize {
    input[from..]
        .iter()
        .position(|&b| !is_line_break(b))
        .map_or(input.len(), |n| from + n)
}

/// Empty lines directly before `end`.
///
/// The run of line breaks ending at `end` holds the previous record's
/// terminator (if there is one) followed by one break per empty line.
fn blank_lines_before(input: &[u8], end: usize, after_record: bool) -> usize {
    let start = input[..end]
        .iter()
        .rposition(|&b| !is_line_break(b))
        .map_or(0, |i| i + 1);
    count_line_breaks(input, start..end).saturating_sub(usize::from(after_record))
}

/// Write `count` empty rows straight to the underlying writer.
///
/// The csv writer renders an empty record as `""`, while an empty line must
/// stay empty.
fn write_blank_lines<W: Write>(
    writer: &mut csv::Writer<W>,
    count: usize,
    line: usize,
) -> Result<(), TransformError> {
    if count == 0 {
        return Ok(());
    }
    writer
        .flush()
        .and_then(|()| writer.get_mut().write_all(&b"\r\n".repeat(count)))
        .map_err(|source| TransformError::Write {
            line,
            source: source.into(),
        })
}

/// Convert delimited text from `reader` into `writer`.
///
/// The input is read fully, then records are converted and written one at a
/// time. Quoting follows the `csv` crate defaults on both sides, and records
/// are terminated with `\r\n`. Empty lines are kept as empty rows.
pub fn transform<R: Read, W: Write>(mut reader: R, writer: W) -> Result<Summary, TransformError> {
    let mut input = Vec::new();
    reader
        .read_to_end(&mut input)
        .map_err(TransformError::Read)?;

    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    let mut summary = Summary::default();
    let mut record = StringRecord::new();
    // 1-based line of the next unscanned byte
    let mut line = 1;
    let mut scanned = 0;
    let mut after_record = false;

    loop {
        let from = records.position().byte() as usize;
        let content = skip_line_breaks(&input, from);
        line += count_line_breaks(&input, scanned..content);
        scanned = content;

        let more = records
            .read_record(&mut record)
            .map_err(|source| TransformError::MalformedRow { line, source })?;

        let blanks = blank_lines_before(&input, content, after_record);
        write_blank_lines(&mut writer, blanks, line)?;
        summary.rows += blanks;
        if !more {
            break;
        }

        let converted = transform_row(&record);
        summary.replaced += record
            .iter()
            .zip(converted.iter())
            .filter(|(before, after)| before != after)
            .count();
        summary.cells += record.len();
        summary.rows += 1;
        after_record = true;

        writer
            .write_record(&converted)
            .map_err(|source| TransformError::Write { line, source })?;
    }

    writer.flush().map_err(TransformError::Flush)?;
    Ok(summary)
}

/// Convert the file at `config.input` and write the result to `config.output`.
///
/// The input is opened first, so an unreadable input never creates or
/// truncates the output. An existing output file is overwritten in full.
pub fn transform_file(config: &Config) -> Result<Summary, TransformError> {
    let input = File::open(&config.input).map_err(|source| TransformError::InputOpen {
        path: config.input.clone(),
        source,
    })?;
    let output = File::create(&config.output).map_err(|source| TransformError::OutputOpen {
        path: config.output.clone(),
        source,
    })?;

    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        "converting tech file"
    );

    let summary = transform(input, output)?;
    tracing::debug!(
        rows = summary.rows,
        cells = summary.cells,
        replaced = summary.replaced,
        "conversion finished"
    );
    Ok(summary)
}
