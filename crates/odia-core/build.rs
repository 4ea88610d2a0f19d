fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/grammar/default_grammar.toml",
        include_str!("src/grammar/default_grammar.toml"),
    );
    validate_toml(
        "src/dictionary/default_dictionary.toml",
        include_str!("src/dictionary/default_dictionary.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
