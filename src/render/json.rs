use crate::cedict_parser::DictionaryEntry;
use crate::config;
use crate::errors::Result;
use crate::render::Renderer;

/// A JSON array with one object per entry
#[derive(Debug)]
pub struct JsonRenderer {
    is_first: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        JsonRenderer { is_first: true }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn document_preamble(&mut self) -> String {
        config::JSON_PREAMBLE.to_owned()
    }

    fn document_postamble(&mut self) -> String {
        config::JSON_POSTAMBLE.to_owned()
    }

    fn entry_prefix(&mut self, _entry: &DictionaryEntry) -> String {
        if self.is_first {
            self.is_first = false;
            config::JSON_INDENT.to_owned()
        } else {
            format!("{}{}", config::JSON_ENTRY_SEP, config::JSON_INDENT)
        }
    }

    fn entry_body(&mut self, entry: &DictionaryEntry) -> Result<String> {
        Ok(serde_json::to_string(entry)?)
    }

    fn entry_postfix(&mut self, _entry: &DictionaryEntry) -> String {
        String::new()
    }
}
