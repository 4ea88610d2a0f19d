use clap::{Parser, Subcommand};

use odia_cli::commands::{config_ops, translit_ops};

#[derive(Parser)]
#[command(name = "odiatool", about = "Odia transliteration diagnostics")]
struct Cli {
    /// Custom grammar TOML to use instead of the embedded one
    #[arg(long, global = true)]
    grammar: Option<String>,
    /// Custom dictionary TOML
    #[arg(long, global = true)]
    dict: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Latin text (arguments, or stdin lines when none)
    Translit {
        inputs: Vec<String>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Ranked suggestions for a partial word
    Suggest {
        partial: String,
        /// Maximum number of suggestions (default: settings suggestions.limit)
        #[arg(short, long)]
        n: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Extract the word before a caret position
    Word {
        buffer: String,
        /// Caret as a char offset (default: end of buffer)
        #[arg(long)]
        cursor: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Typing hint for the last letter of the input
    Hint { input: String },
    /// Convert a number to Odia digits
    Numeral {
        value: String,
        /// Parse Odia digits back to a decimal number
        #[arg(long)]
        to_ascii: bool,
    },
    /// Replay a key script through an editing session.
    ///
    /// Plain chars type text, ' ' is Space, a newline is Enter. Named keys:
    /// <space> <enter> <bs> <esc> <up> <down> <mode> <sel:N> <lt>
    Simulate {
        keys: String,
        /// Print buffer and candidates after every key
        #[arg(short, long)]
        verbose: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded grammar TOML
    GrammarExport,
    /// Validate a grammar TOML file
    GrammarValidate { file: String },
    /// Print the embedded dictionary TOML
    DictExport,
    /// Validate a dictionary TOML file
    DictValidate { file: String },
    /// Print the embedded settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();
    config_ops::install_custom(
        cli.grammar.as_deref(),
        cli.dict.as_deref(),
        cli.settings.as_deref(),
    );

    match cli.command {
        Command::Translit { inputs, json } => translit_ops::translit_cmd(&inputs, json),
        Command::Suggest { partial, n, json } => translit_ops::suggest_cmd(&partial, n, json),
        Command::Word {
            buffer,
            cursor,
            json,
        } => translit_ops::word_cmd(&buffer, cursor, json),
        Command::Hint { input } => translit_ops::hint_cmd(&input),
        Command::Numeral { value, to_ascii } => translit_ops::numeral_cmd(&value, to_ascii),
        Command::Simulate {
            keys,
            verbose,
            json,
        } => translit_ops::simulate_cmd(&keys, verbose, json),
        Command::GrammarExport => config_ops::grammar_export(),
        Command::GrammarValidate { file } => config_ops::grammar_validate(&file),
        Command::DictExport => config_ops::dict_export(),
        Command::DictValidate { file } => config_ops::dict_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
