use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config;

/// A run of pinyin letters directly followed by a tone number
static NUMERIC_SYLLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-ZüÜ]+)([1-5])").expect("valid syllable regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    First,
    Second,
    Third,
    Fourth,
    /// 5, rendered without a mark
    Neutral,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::First,
        Tone::Second,
        Tone::Third,
        Tone::Fourth,
        Tone::Neutral,
    ];

    pub const fn from_digit(digit: char) -> Option<Tone> {
        Some(match digit {
            '1' => Tone::First,
            '2' => Tone::Second,
            '3' => Tone::Third,
            '4' => Tone::Fourth,
            '5' => Tone::Neutral,
            _ => return None,
        })
    }
}

/// Letters which can carry a tone mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkableLetter {
    A,
    E,
    I,
    O,
    U,
    UUmlaut,
    M,
    R,
    CapitalA,
    CapitalE,
    CapitalI,
    CapitalO,
    CapitalU,
    CapitalUUmlaut,
    CapitalM,
    CapitalR,
}

impl MarkableLetter {
    pub const ALL: [MarkableLetter; 16] = [
        MarkableLetter::A,
        MarkableLetter::E,
        MarkableLetter::I,
        MarkableLetter::O,
        MarkableLetter::U,
        MarkableLetter::UUmlaut,
        MarkableLetter::M,
        MarkableLetter::R,
        MarkableLetter::CapitalA,
        MarkableLetter::CapitalE,
        MarkableLetter::CapitalI,
        MarkableLetter::CapitalO,
        MarkableLetter::CapitalU,
        MarkableLetter::CapitalUUmlaut,
        MarkableLetter::CapitalM,
        MarkableLetter::CapitalR,
    ];

    pub const fn from_char(c: char) -> Option<MarkableLetter> {
        Some(match c {
            'a' => MarkableLetter::A,
            'e' => MarkableLetter::E,
            'i' => MarkableLetter::I,
            'o' => MarkableLetter::O,
            'u' => MarkableLetter::U,
            'ü' => MarkableLetter::UUmlaut,
            'm' => MarkableLetter::M,
            'r' => MarkableLetter::R,
            'A' => MarkableLetter::CapitalA,
            'E' => MarkableLetter::CapitalE,
            'I' => MarkableLetter::CapitalI,
            'O' => MarkableLetter::CapitalO,
            'U' => MarkableLetter::CapitalU,
            'Ü' => MarkableLetter::CapitalUUmlaut,
            'M' => MarkableLetter::CapitalM,
            'R' => MarkableLetter::CapitalR,
            _ => return None,
        })
    }

    /// The letter with the given tone mark, possibly followed by a combining character
    pub const fn with_tone(self, tone: Tone) -> &'static str {
        TONE_GLYPHS[self as usize][tone as usize]
    }
}

/// Indexed by `MarkableLetter` and `Tone`. Where Unicode has no precomposed
/// character the base letter is followed by U+0304, U+030C or U+0300.
const TONE_GLYPHS: [[&str; 5]; 16] = [
    ["ā", "á", "ǎ", "à", "a"],
    ["ē", "é", "ě", "è", "e"],
    ["ī", "í", "ǐ", "ì", "i"],
    ["ō", "ó", "ǒ", "ò", "o"],
    ["ū", "ú", "ǔ", "ù", "u"],
    ["ǖ", "ǘ", "ǚ", "ǜ", "ü"],
    ["m\u{304}", "ḿ", "m\u{30c}", "m\u{300}", "m"],
    ["r\u{304}", "ŕ", "ř", "r\u{300}", "r"],
    ["Ā", "Á", "Ǎ", "À", "A"],
    ["Ē", "É", "Ě", "È", "E"],
    ["Ī", "Í", "Ǐ", "Ì", "I"],
    ["Ō", "Ó", "Ǒ", "Ò", "O"],
    ["Ū", "Ú", "Ǔ", "Ù", "U"],
    ["Ǖ", "Ǘ", "Ǚ", "Ǜ", "Ü"],
    ["M\u{304}", "Ḿ", "M\u{30c}", "M\u{300}", "M"],
    ["R\u{304}", "Ŕ", "Ř", "R\u{300}", "R"],
];

/// (lowercase letter cluster, index of the letter within the cluster that gets the mark)
///
/// Longest clusters first, the first cluster found in the syllable wins.
const MARK_POSITIONS: [(&str, usize); 23] = [
    ("iao", 1),
    ("uai", 1),
    ("ai", 0),
    ("ao", 0),
    ("ei", 0),
    ("ia", 1),
    ("ie", 1),
    ("io", 1),
    ("iu", 1),
    ("ou", 0),
    ("ua", 1),
    ("ue", 1),
    ("ui", 1),
    ("uo", 1),
    ("üe", 1),
    ("a", 0),
    ("e", 0),
    ("i", 0),
    ("o", 0),
    ("u", 0),
    ("ü", 0),
    ("m", 0),
    ("r", 0),
];

/// Replace the `u:` notation used by CC-CEDICT with `ü`
pub fn normalize_umlaut(pinyin: &str) -> String {
    config::UMLAUT_ESCAPES
        .iter()
        .fold(pinyin.to_owned(), |acc, (escape, umlaut)| {
            acc.replace(escape, umlaut)
        })
}

/// Convert all syllables with a tone number into syllables with a tone mark,
/// e.g. "ni3 hao3" -> "nǐ hǎo". Anything that is not a run of letters
/// followed by a tone number 1 to 5 is copied verbatim.
pub fn pinyin_mark_from_num(pinyin_num: &str) -> String {
    NUMERIC_SYLLABLE
        .replace_all(pinyin_num, |caps: &Captures| {
            let tone = caps[2].chars().next().and_then(Tone::from_digit);
            match tone {
                Some(tone) => pinyin_syllable_mark(&caps[1], tone),
                None => caps[0].to_owned(),
            }
        })
        .into_owned()
}

/// Put the mark for `tone` on the letters of one syllable (without tone number).
/// If no letter can carry the mark the letters are returned unchanged.
pub fn pinyin_syllable_mark(letters: &str, tone: Tone) -> String {
    let Some(idx) = mark_position(letters) else {
        return letters.to_owned();
    };
    let Some(marked) = letters[idx..].chars().next() else {
        return letters.to_owned();
    };
    let Some(letter) = MarkableLetter::from_char(marked) else {
        return letters.to_owned();
    };
    format!(
        "{}{}{}",
        &letters[..idx],
        letter.with_tone(tone),
        &letters[idx + marked.len_utf8()..]
    )
}

/// Byte index of the letter which receives the tone mark
fn mark_position(letters: &str) -> Option<usize> {
    // folding keeps the byte length of every char, indices are valid for `letters`
    let folded: String = letters
        .chars()
        .map(|c| if c == 'Ü' { 'ü' } else { c.to_ascii_lowercase() })
        .collect();

    MARK_POSITIONS.iter().find_map(|&(cluster, offset)| {
        let start = folded.find(cluster)?;
        folded[start..]
            .char_indices()
            .nth(offset)
            .map(|(i, _)| start + i)
    })
}
