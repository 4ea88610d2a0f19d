use std::io::{self, BufRead};
use std::process;

use serde::Serialize;

use odia_core::{
    extract_current_word, from_odia_numeral, ranked_suggestions, to_odia_numeral, transliterate,
    typing_hint,
};
use odia_session::{CandidateAction, EditorSession, KeyEvent, KeyResponse};

use super::keys::parse_keys;

fn print_json<T: Serialize>(value: &T) {
    println!("{}", die!(serde_json::to_string(value), "Error: {}"));
}

#[derive(Serialize)]
struct TranslitLine<'a> {
    input: &'a str,
    output: String,
}

/// Transliterate each argument, or each stdin line when there are none.
pub fn translit_cmd(inputs: &[String], json: bool) {
    let emit = |input: &str| {
        let output = transliterate(input);
        if json {
            print_json(&TranslitLine { input, output });
        } else {
            println!("{output}");
        }
    };
    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Error reading stdin: {}");
            emit(&line);
        }
    } else {
        for input in inputs {
            emit(input);
        }
    }
}

#[derive(Serialize)]
struct SuggestionLine {
    rank: usize,
    source: String,
    text: String,
}

pub fn suggest_cmd(partial: &str, limit: Option<usize>, json: bool) {
    let limit = limit.unwrap_or_else(|| odia_core::settings::settings().suggestions.limit);
    let ranked = ranked_suggestions(partial, limit);
    if json {
        let lines: Vec<SuggestionLine> = ranked
            .into_iter()
            .map(|s| SuggestionLine {
                rank: s.rank,
                source: format!("{:?}", s.source).to_lowercase(),
                text: s.text,
            })
            .collect();
        print_json(&lines);
        return;
    }
    if ranked.is_empty() {
        println!("(no suggestions)");
    }
    for s in &ranked {
        println!("{}. {}  [{:?}]", s.rank + 1, s.text, s.source);
    }
}

#[derive(Serialize)]
struct WordInfo<'a> {
    word: &'a str,
    cursor: usize,
    transliteration: String,
}

/// Show the word a caret at `cursor` (default: end) would commit.
pub fn word_cmd(buffer: &str, cursor: Option<usize>, json: bool) {
    let cursor = cursor.unwrap_or_else(|| buffer.chars().count());
    let word = extract_current_word(buffer, cursor);
    let info = WordInfo {
        word,
        cursor,
        transliteration: transliterate(word),
    };
    if json {
        print_json(&info);
    } else if word.is_empty() {
        println!("(no word)");
    } else {
        println!("{} -> {}", info.word, info.transliteration);
    }
}

pub fn hint_cmd(input: &str) {
    match typing_hint(input) {
        Some(hint) => println!("{hint}"),
        None => println!("(no hint)"),
    }
}

/// Convert a decimal number to Odia digits, or back with `to_ascii`.
pub fn numeral_cmd(value: &str, to_ascii: bool) {
    if to_ascii {
        match from_odia_numeral(value) {
            Some(n) => println!("{n}"),
            None => {
                eprintln!("Error: no number in {value:?}");
                process::exit(1);
            }
        }
    } else {
        let n: u64 = die!(value.trim().parse(), "Error: invalid number {value:?}: {}");
        println!("{}", to_odia_numeral(n));
    }
}

#[derive(Serialize)]
struct SimStep {
    event: String,
    consumed: bool,
    text: String,
    cursor: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<String>,
}

#[derive(Serialize)]
struct SimResult {
    steps: Vec<SimStep>,
    text: String,
    cursor: usize,
    word_count: usize,
    odia_active: bool,
}

fn describe(resp: &KeyResponse) -> String {
    match &resp.candidates {
        CandidateAction::Show { surfaces, selected } => surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == *selected as usize {
                    format!("[{}.{s}]", i + 1)
                } else {
                    format!("{}.{s}", i + 1)
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        CandidateAction::Hide => "(hide)".to_string(),
        CandidateAction::Keep => String::new(),
    }
}

/// How `replay` reports each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepLog {
    Silent,
    Print,
    Record,
}

fn replay(session: &mut EditorSession<'_>, events: Vec<KeyEvent>, log: StepLog) -> Vec<SimStep> {
    let mut steps = Vec::new();
    for event in events {
        let label = format!("{event:?}");
        let resp = session.handle_key(event);
        match log {
            StepLog::Record => steps.push(SimStep {
                event: label,
                consumed: resp.consumed,
                text: session.text().to_string(),
                cursor: session.cursor(),
                candidates: session.candidates().to_vec(),
            }),
            StepLog::Print => println!(
                "{label:<16} {:<24} {}",
                format!("{:?}", session.text()),
                describe(&resp)
            ),
            StepLog::Silent => {}
        }
    }
    steps
}

/// Drive an editing session with a key script and report each step.
pub fn simulate_cmd(script: &str, verbose: bool, json: bool) {
    let events = die!(parse_keys(script), "Error: {}");
    let mut session = EditorSession::with_defaults();
    let log = match (json, verbose) {
        (true, _) => StepLog::Record,
        (false, true) => StepLog::Print,
        (false, false) => StepLog::Silent,
    };
    let steps = replay(&mut session, events, log);

    let status = session.status();
    if json {
        print_json(&SimResult {
            steps,
            text: session.text().to_string(),
            cursor: session.cursor(),
            word_count: status.word_count,
            odia_active: status.odia_active,
        });
    } else {
        println!("{}", session.text());
        println!(
            "cursor={} words={} odia={}",
            session.cursor(),
            status.word_count,
            status.odia_active
        );
    }
}
