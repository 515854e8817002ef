pub mod cedict_parser;
pub mod config;
pub mod convert;
pub mod errors;
pub mod hanzi;
pub mod pinyin;
pub mod render;
