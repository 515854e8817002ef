use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, trace, warn};

use crate::cedict_parser::{CedictLine, parse_line};
use crate::config;
use crate::errors::{ConfigError, ConvertError, LineError, ParseError, Result};
use crate::render::{OutputFormat, Renderer};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of entries written to the output
    pub entries: usize,
    /// Comments and empty lines
    pub skipped: usize,
    /// Lines which could not be parsed, in input order
    pub errors: Vec<LineError>,
}

/// Convert the dictionary file `input` into `output` using `format`.
///
/// The renderer is created and the input is opened before the output file is
/// created, so an unsupported format or a missing input leaves `output` untouched.
pub fn convert_file(input: &Path, output: &Path, format: OutputFormat) -> Result<ConversionReport> {
    if input == output {
        return Err(ConfigError::SameInputAndOutput(input.to_owned()).into());
    }
    let mut renderer = format.renderer()?;

    let file_in = File::open(input).map_err(|source| ConvertError::Io {
        path: input.to_owned(),
        source,
    })?;
    let file_out = File::create(output).map_err(|source| ConvertError::Io {
        path: output.to_owned(),
        source,
    })?;

    info!(
        "Converting {} to {} ({format})",
        input.display(),
        output.display()
    );
    let mut writer_out = BufWriter::new(file_out);
    let report = convert(BufReader::new(file_in), &mut writer_out, renderer.as_mut())?;
    writer_out.flush().map_err(|source| ConvertError::Io {
        path: output.to_owned(),
        source,
    })?;
    Ok(report)
}

/// Parse every line of `reader` and write the rendered entries to `writer`.
///
/// Lines which can't be parsed are logged at `warn` level with their line
/// number and collected in the report, the conversion continues with the
/// next line. The log depends on the filter of the installed logger,
/// `ConversionReport::errors` always holds every rejected line.
/// Read and write failures abort the conversion.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    renderer: &mut dyn Renderer,
) -> Result<ConversionReport> {
    let mut report = ConversionReport::default();

    writer.write_all(renderer.document_preamble().as_bytes())?;

    for (line_idx, raw_line) in reader.split(b'\n').enumerate() {
        let line_number = line_idx + 1;
        let raw_line = raw_line?;

        let parsed = match decode_line(raw_line, line_number) {
            Ok(line) => parse_line(&line),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(CedictLine::Entry(entry)) => {
                writer.write_all(renderer.entry_prefix(&entry).as_bytes())?;
                writer.write_all(renderer.entry_body(&entry)?.as_bytes())?;
                writer.write_all(renderer.entry_postfix(&entry).as_bytes())?;
                report.entries += 1;
            }
            Ok(CedictLine::Skip) => {
                trace!("Skipping line {line_number}");
                report.skipped += 1;
            }
            Err(error) => {
                let err = LineError { line_number, error };
                warn!("{err}");
                report.errors.push(err);
            }
        }
    }

    writer.write_all(renderer.document_postamble().as_bytes())?;

    info!(
        "{} entries, {} skipped lines, {} invalid lines",
        report.entries,
        report.skipped,
        report.errors.len()
    );
    Ok(report)
}

/// Line without line ending (and without byte order mark on the first line)
fn decode_line(mut raw_line: Vec<u8>, line_number: usize) -> std::result::Result<String, ParseError> {
    if raw_line.last() == Some(&b'\r') {
        raw_line.pop();
    }
    let mut line = String::from_utf8(raw_line).map_err(|_err| ParseError::InvalidUtf8)?;
    if line_number == 1 && line.starts_with(config::BYTE_ORDER_MARK) {
        line.remove(0);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::JsonRenderer;

    fn convert_str(input: &[u8]) -> (String, ConversionReport) {
        let mut out: Vec<u8> = Vec::new();
        let mut renderer = JsonRenderer::new();
        let report = convert(input, &mut out, &mut renderer).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn test_convert_partial_failure() {
        let input = "你好 你好 [ni3 hao3] /hello/hi/\n\
                     中國 中国 Zhong1 guo2 /China/\n\
                     綠 绿 [lu:4] /green/\n";
        let (out, report) = convert_str(input.as_bytes());

        assert_eq!(report.entries, 2);
        assert_eq!(
            report.errors,
            vec![LineError {
                line_number: 2,
                error: ParseError::InvalidEntry
            }]
        );
        assert!(out.contains("\"traditional\":\"你好\""));
        assert!(out.contains("\"traditional\":\"綠\""));
        assert!(!out.contains("中國"));

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_convert_reports_every_invalid_line() {
        let input = "# header\n\
                     一 一 [yi1] /one/\n\
                     甲 甲 [jia3] ///\n\
                     二 二 [er4] /two/\n\
                     乙 乙 jia3 /second/\n";
        let (out, report) = convert_str(input.as_bytes());

        assert_eq!(report.entries, 2);
        assert_eq!(report.skipped, 1);
        let line_numbers: Vec<usize> = report.errors.iter().map(|e| e.line_number).collect();
        assert_eq!(line_numbers, vec![3, 5]);
        assert!(!out.contains("甲"));
        assert!(!out.contains("乙"));
    }

    #[test]
    fn test_convert_skips_header() {
        let input = "# CC-CEDICT\n\
                     #! version=1\n\
                     \n\
                     一 一 [yi1] /one/\n";
        let (out, report) = convert_str(input.as_bytes());
        assert_eq!(report.entries, 1);
        assert_eq!(report.skipped, 3);
        assert!(report.errors.is_empty());
        assert!(out.starts_with("[\n    {"));
    }

    #[test]
    fn test_convert_crlf_and_bom() {
        let input = "\u{feff}一 一 [yi1] /one/\r\n二 二 [er4] /two/\r\n";
        let (out, report) = convert_str(input.as_bytes());
        assert_eq!(report.entries, 2);
        assert!(report.errors.is_empty());
        assert!(out.contains("{\"traditional\":\"一\""));
        assert!(!out.contains('\r'));
    }

    #[test]
    fn test_convert_invalid_utf8() {
        let mut input = b"\xff\xfe broken\n".to_vec();
        input.extend_from_slice("一 一 [yi1] /one/\n".as_bytes());
        let (_out, report) = convert_str(&input);
        assert_eq!(report.entries, 1);
        assert_eq!(
            report.errors,
            vec![LineError {
                line_number: 1,
                error: ParseError::InvalidUtf8
            }]
        );
    }

    #[test]
    fn test_convert_empty_input() {
        let (out, report) = convert_str(b"");
        assert_eq!(out, "[\n\n]");
        assert_eq!(report, ConversionReport::default());
    }

    #[test]
    fn test_line_error_message() {
        let err = LineError {
            line_number: 42,
            error: ParseError::InvalidEntry,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dictionary entry on line 42: Dictionary entry is invalid"
        );
    }
}
