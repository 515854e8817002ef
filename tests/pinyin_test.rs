use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cedict_structurizer::pinyin::pinyin_mark_from_num;

#[test]
fn test_pinyin_conversion_from_file() {
    // relative to the package root, where cargo runs integration tests
    let path = Path::new("tests/pinyin_pairs.txt");
    let file = File::open(path).expect("Failed to open pinyin_pairs.txt");
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.expect("Failed to read line");

        let Some((pinyin_num, expected_mark)) = line.split_once(';') else {
            panic!("Invalid line format: {line}");
        };

        let result = pinyin_mark_from_num(pinyin_num);
        assert_eq!(result, expected_mark, "Failed on input: {pinyin_num}");
        assert_eq!(
            result.split(' ').count(),
            pinyin_num.split(' ').count(),
            "Syllable count changed for: {pinyin_num}"
        );
    }
}
