mod json;
mod xml;

pub use json::JsonRenderer;
pub use xml::XmlRenderer;

use std::fmt;
use std::str::FromStr;

use crate::cedict_parser::DictionaryEntry;
use crate::errors::{ConfigError, ConvertError, Result};

/// Turns dictionary entries into fragments of an output document.
///
/// The conversion writes `document_preamble`, then prefix, body and postfix
/// of every entry in input order, then `document_postamble`.
pub trait Renderer {
    fn document_preamble(&mut self) -> String;

    fn document_postamble(&mut self) -> String;

    fn entry_prefix(&mut self, entry: &DictionaryEntry) -> String;

    /// Complete serialization of one entry
    fn entry_body(&mut self, entry: &DictionaryEntry) -> Result<String>;

    fn entry_postfix(&mut self, entry: &DictionaryEntry) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Xml,
    Csv,
}

impl OutputFormat {
    /// Fails for formats without renderer, nothing has been written at this point
    pub fn renderer(self) -> Result<Box<dyn Renderer>> {
        match self {
            OutputFormat::Json => Ok(Box::new(JsonRenderer::new())),
            OutputFormat::Xml => Ok(Box::new(XmlRenderer::new())),
            OutputFormat::Csv => Err(ConvertError::NotImplemented(self)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::UnknownFormat(s.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Xml => write!(f, "XML"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("xml".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Format 'yaml' is unknown");
        assert!(matches!(
            "JSON".parse::<OutputFormat>(),
            Err(ConfigError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_csv_not_implemented() {
        let err = OutputFormat::Csv.renderer().err().unwrap();
        assert!(matches!(err, ConvertError::NotImplemented(OutputFormat::Csv)));
        assert_eq!(err.to_string(), "CSV output is not implemented");
        assert!(OutputFormat::Json.renderer().is_ok());
        assert!(OutputFormat::Xml.renderer().is_ok());
    }
}
