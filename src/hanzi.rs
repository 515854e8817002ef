use std::sync::LazyLock;

use regex::Regex;

static HAN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}").expect("valid Han script regex"));

/// All Han characters of `word` in their original order, duplicates included.
/// Latin letters, digits and punctuation such as `，` or `·` are dropped.
pub fn han_characters(word: &str) -> Vec<char> {
    HAN_CHAR
        .find_iter(word)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_han_characters() {
        assert_eq!(han_characters("你好"), vec!['你', '好']);
        assert_eq!(han_characters("卡拉OK"), vec!['卡', '拉']);
        assert_eq!(han_characters("哈哈"), vec!['哈', '哈']);
        assert_eq!(han_characters("阿Q精神"), vec!['阿', '精', '神']);
        assert_eq!(han_characters("一日三秋，不見如隔"), "一日三秋不見如隔".chars().collect::<Vec<_>>());
        assert_eq!(han_characters("伊麗莎白·泰勒"), "伊麗莎白泰勒".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_han_characters_none() {
        assert!(han_characters("").is_empty());
        assert!(han_characters("AA").is_empty());
        assert!(han_characters("%").is_empty());
        assert!(han_characters("，").is_empty());
    }
}
