//! Turns a line typed at the prompt into keys.
//!
//! Digits become one key each, so `12+3=` and `1 2 + 3 =` are the same
//! input. Operators and functions accept both their keypad symbol and an
//! ASCII spelling (`*` / `x` / `×`, `sqrt` / `√`, `pi` / `π`, ...).

use thiserror::Error;

use crate::engine::{BinaryOp, Digit, Key, UnaryFn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown key '{token}' at column {column}")]
    UnknownToken { token: String, column: usize },
}

/// Single-character keys that are not part of a word.
const SYMBOLS: &[(char, Key)] = &[
    ('.', Key::Decimal),
    ('+', Key::Op(BinaryOp::Add)),
    ('-', Key::Op(BinaryOp::Sub)),
    ('−', Key::Op(BinaryOp::Sub)),
    ('*', Key::Op(BinaryOp::Mul)),
    ('×', Key::Op(BinaryOp::Mul)),
    ('/', Key::Op(BinaryOp::Div)),
    ('÷', Key::Op(BinaryOp::Div)),
    ('=', Key::Equals),
    ('%', Key::Percent),
    ('±', Key::ToggleSign),
    ('√', Key::Fn(UnaryFn::Sqrt)),
];

/// Word spellings, matched case-insensitively.
pub const WORDS: &[(&str, Key)] = &[
    ("x", Key::Op(BinaryOp::Mul)),
    ("c", Key::Clear),
    ("ac", Key::Clear),
    ("clear", Key::Clear),
    ("neg", Key::ToggleSign),
    ("mode", Key::ToggleScientificMode),
    ("sin", Key::Fn(UnaryFn::Sin)),
    ("cos", Key::Fn(UnaryFn::Cos)),
    ("tan", Key::Fn(UnaryFn::Tan)),
    ("ln", Key::Fn(UnaryFn::Ln)),
    ("log", Key::Fn(UnaryFn::Log)),
    ("sqrt", Key::Fn(UnaryFn::Sqrt)),
    ("x²", Key::Fn(UnaryFn::Square)),
    ("sq", Key::Fn(UnaryFn::Square)),
    ("x³", Key::Fn(UnaryFn::Cube)),
    ("cube", Key::Fn(UnaryFn::Cube)),
    ("eˣ", Key::Fn(UnaryFn::Exp)),
    ("exp", Key::Fn(UnaryFn::Exp)),
    ("inv", Key::Fn(UnaryFn::Reciprocal)),
    ("π", Key::Fn(UnaryFn::Pi)),
    ("pi", Key::Fn(UnaryFn::Pi)),
    ("e", Key::Fn(UnaryFn::E)),
];

const RECIPROCAL: &str = "1/x";

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '²' || c == '³'
}

fn lookup_word(word: &str) -> Option<Key> {
    let word = word.to_lowercase();
    WORDS
        .iter()
        .find(|(spelling, _)| *spelling == word)
        .map(|(_, key)| *key)
}

/// Parse a whole line. Either every token is understood or nothing is
/// returned, so a typo never applies half a line.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, InputError> {
    let chars: Vec<char> = line.chars().collect();
    let mut keys = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let column = i + 1;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // `1/x` only counts as a key when it does not continue a number.
        let starts_number = i == 0 || !(chars[i - 1].is_ascii_digit() || chars[i - 1] == '.');
        if starts_number && chars[i..].iter().take(3).copied().eq(RECIPROCAL.chars()) {
            keys.push(Key::Fn(UnaryFn::Reciprocal));
            i += 3;
            continue;
        }

        if let Some(digit) = Digit::from_char(c) {
            keys.push(Key::Digit(digit));
            i += 1;
            continue;
        }

        if let Some((_, key)) = SYMBOLS.iter().find(|(symbol, _)| *symbol == c) {
            keys.push(*key);
            i += 1;
            continue;
        }

        if is_word_char(c) {
            let end = chars[i..]
                .iter()
                .position(|&c| !is_word_char(c))
                .map_or(chars.len(), |n| i + n);
            let word: String = chars[i..end].iter().collect();
            match lookup_word(&word) {
                Some(key) => keys.push(key),
                None => return Err(InputError::UnknownToken { token: word, column }),
            }
            i = end;
            continue;
        }

        return Err(InputError::UnknownToken {
            token: c.to_string(),
            column,
        });
    }

    Ok(keys)
}
