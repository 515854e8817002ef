/// Lines starting with this character are comments (CC-CEDICT license/header block)
pub const COMMENT_PREFIX: char = '#';

/// Delimiter between the definitions of an entry
pub const DEFINITION_SEP: char = '/';

/// CC-CEDICT writes ü as `u:`, (escape, replacement)
pub const UMLAUT_ESCAPES: [(&str, &str); 2] = [("u:", "ü"), ("U:", "Ü")];

pub const BYTE_ORDER_MARK: char = '\u{feff}';

pub const JSON_PREAMBLE: &str = "[\n";
pub const JSON_POSTAMBLE: &str = "\n]";
pub const JSON_INDENT: &str = "    ";
pub const JSON_ENTRY_SEP: &str = ",\n";

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" ?>"#;
pub const XML_ROOT: &str = "cc-cedict";
pub const XML_INDENT_SIZE: usize = 2;
