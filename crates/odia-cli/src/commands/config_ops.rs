use std::fs;

use odia_core::dictionary::Dictionary;
use odia_core::grammar::{Family, Grammar};

/// Install custom tables before anything touches the globals.
pub fn install_custom(grammar: Option<&str>, dict: Option<&str>, settings: Option<&str>) {
    if let Some(file) = grammar {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(Grammar::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = dict {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(Dictionary::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(odia_core::settings::init_custom(content), "Error in {file}: {}");
    }
}

pub fn grammar_export() {
    print!("{}", odia_core::grammar::default_toml());
}

pub fn grammar_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let g = die!(Grammar::from_toml(&content), "Error: {}");
    println!(
        "OK: vowels={}, consonants={}, specials={}, nasals={}",
        g.pattern_count(Family::Vowel),
        g.pattern_count(Family::Consonant),
        g.pattern_count(Family::Special),
        g.pattern_count(Family::Nasal),
    );
}

pub fn dict_export() {
    print!("{}", odia_core::dictionary::default_toml());
}

pub fn dict_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let dict = die!(Dictionary::from_toml(&content), "Error: {}");
    println!("OK: {} entries", dict.len());
}

pub fn settings_export() {
    print!("{}", odia_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        odia_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: suggestions.limit={}, session.quick_select={}, session.append_space={}",
        s.suggestions.limit, s.session.quick_select, s.session.append_space
    );
}
