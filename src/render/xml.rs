use std::io;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use quick_xml::Writer;
use quick_xml::events::BytesText;

use crate::cedict_parser::DictionaryEntry;
use crate::config;
use crate::errors::{ConvertError, Result};
use crate::render::Renderer;

/// `<cc-cedict created="...">` with one `<entry>` element per entry
#[derive(Debug)]
pub struct XmlRenderer {
    created: DateTime<FixedOffset>,
}

impl XmlRenderer {
    pub fn new() -> Self {
        Self::with_timestamp(Local::now().fixed_offset())
    }

    pub fn with_timestamp(created: DateTime<FixedOffset>) -> Self {
        XmlRenderer { created }
    }
}

impl Default for XmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for XmlRenderer {
    fn document_preamble(&mut self) -> String {
        format!(
            "{}\n<{} created=\"{}\">\n",
            config::XML_DECLARATION,
            config::XML_ROOT,
            self.created.to_rfc3339_opts(SecondsFormat::Secs, false)
        )
    }

    fn document_postamble(&mut self) -> String {
        format!("</{}>", config::XML_ROOT)
    }

    fn entry_prefix(&mut self, _entry: &DictionaryEntry) -> String {
        String::new()
    }

    fn entry_body(&mut self, entry: &DictionaryEntry) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', config::XML_INDENT_SIZE);
        write_entry(&mut writer, entry).map_err(ConvertError::Xml)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| ConvertError::Xml(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn entry_postfix(&mut self, _entry: &DictionaryEntry) -> String {
        "\n".to_owned()
    }
}

fn write_entry<W: io::Write>(writer: &mut Writer<W>, entry: &DictionaryEntry) -> io::Result<()> {
    writer.create_element("entry").write_inner_content(|w| {
        write_text(w, "traditional", &entry.traditional)?;
        write_text(w, "simplified", &entry.simplified)?;
        write_list(
            w,
            "referenced-traditional",
            "character",
            entry.referenced_traditional.iter().map(char::to_string),
        )?;
        write_list(
            w,
            "referenced-simplified",
            "character",
            entry.referenced_simplified.iter().map(char::to_string),
        )?;
        write_text(w, "pinyin-numeric", &entry.pinyin_numeric)?;
        write_text(w, "pinyin-diacritic", &entry.pinyin_diacritic)?;
        write_list(w, "definitions", "definition", entry.definitions.iter())?;
        write_list(
            w,
            "definitions-diacritic",
            "definition",
            entry.definitions_diacritic.iter(),
        )?;
        Ok(())
    })?;
    Ok(())
}

fn write_text<W: io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn write_list<W, I, S>(writer: &mut Writer<W>, name: &str, item_name: &str, items: I) -> io::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    writer.create_element(name).write_inner_content(|w| {
        for item in items {
            write_text(w, item_name, item.as_ref())?;
        }
        Ok(())
    })?;
    Ok(())
}
