/*
CC-CEDICT line format

TRADITIONAL SIMPLIFIED [PINYIN] /DEFINITION 1/DEFINITION 2/.../

- encoded in utf-8, one entry per line
- lines starting with # are comments (license and meta data header)
- headwords and the pinyin field are separated by a single space
- pinyin syllables are separated by spaces and end with a tone number 1-5,
  u: is used for ü
- definitions may contain other words with their pronunciation in brackets,
  e.g. "variant of 好[hao3]"

entry = traditional " " simplified " [" pinyin "] " definitions
traditional = {any char - " "}+
simplified = {any char}+  (up to " [")
pinyin = {any char - "]"}+
definitions = "/" definition {"/" [definition]} "/"
*/

use std::sync::LazyLock;

use itertools::Itertools;
use nom::{
    IResult, Parser,
    bytes::complete::{take_till1, take_until1},
    character::complete::char,
    combinator::{all_consuming, rest, verify},
    sequence::{delimited, terminated},
};
use regex::{Captures, Regex};
use serde::Serialize;

use crate::config;
use crate::errors::ParseError;
use crate::hanzi::han_characters;
use crate::pinyin::{normalize_umlaut, pinyin_mark_from_num};

/// Bracketed pinyin within a definition, e.g. `[hao3]`
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.+?\]").expect("valid bracket regex"));

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub traditional: String,
    pub simplified: String,
    pub referenced_traditional: Vec<char>,
    pub referenced_simplified: Vec<char>,
    pub pinyin_numeric: String,
    pub pinyin_diacritic: String,
    pub definitions: Vec<String>,
    pub definitions_diacritic: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CedictLine {
    Entry(DictionaryEntry),
    /// Empty line or comment
    Skip,
}

/// The raw fields of an entry line, borrowed from the line
#[derive(Debug, PartialEq, Eq)]
struct EntryFields<'a> {
    traditional: &'a str,
    simplified: &'a str,
    pinyin: &'a str,
    definitions: &'a str,
}

pub fn parse_line(line: &str) -> Result<CedictLine, ParseError> {
    if line.trim().is_empty() || line.starts_with(config::COMMENT_PREFIX) {
        return Ok(CedictLine::Skip);
    }

    let (_remainder, fields) = parse_entry_fields(line).map_err(|_err| ParseError::InvalidEntry)?;

    let pinyin_numeric = normalize_umlaut(fields.pinyin);
    let pinyin_diacritic = pinyin_mark_from_num(&pinyin_numeric);
    let definitions = split_definitions(fields.definitions);
    let definitions_diacritic = definitions
        .iter()
        .map(|d| definition_mark_from_num(d))
        .collect_vec();

    Ok(CedictLine::Entry(DictionaryEntry {
        traditional: fields.traditional.to_owned(),
        simplified: fields.simplified.to_owned(),
        referenced_traditional: han_characters(fields.traditional),
        referenced_simplified: han_characters(fields.simplified),
        pinyin_numeric,
        pinyin_diacritic,
        definitions,
        definitions_diacritic,
    }))
}

fn parse_entry_fields(line: &str) -> IResult<&str, EntryFields<'_>> {
    let traditional = terminated(take_till1(|c: char| c == ' '), char(' '));
    let simplified = terminated(take_until1(" ["), char(' '));
    let pinyin = terminated(
        delimited(char('['), take_till1(|c: char| c == ']'), char(']')),
        char(' '),
    );
    // at least one non-empty definition, "//" and "///" are rejected
    let definitions = verify(rest, |d: &str| {
        d.starts_with(config::DEFINITION_SEP)
            && d.ends_with(config::DEFINITION_SEP)
            && d.split(config::DEFINITION_SEP).any(|s| !s.is_empty())
    });

    all_consuming((traditional, simplified, pinyin, definitions))
        .parse(line.trim_end())
        .map(|(remainder, (traditional, simplified, pinyin, definitions))| {
            (
                remainder,
                EntryFields {
                    traditional,
                    simplified,
                    pinyin,
                    definitions,
                },
            )
        })
}

/// "/a//b/" -> ["a", "b"]
fn split_definitions(definitions: &str) -> Vec<String> {
    definitions
        .split(config::DEFINITION_SEP)
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Convert only the bracketed parts of a definition, the rest stays as it is
fn definition_mark_from_num(definition: &str) -> String {
    BRACKETED
        .replace_all(definition, |caps: &Captures| {
            pinyin_mark_from_num(&normalize_umlaut(&caps[0]))
        })
        .into_owned()
}
