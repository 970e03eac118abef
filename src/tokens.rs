//! # Tokens: Eight-Symbol Letter, Digit and Emoji Tokens
//!
//! Three token families share one set of five generation styles. Each family
//! is an alphabet plus two category pools used by the alternating style; every
//! style works on alphabet indices and maps them to symbols at the end.
//!
//! | # | Style | Construction |
//! |---|-------|--------------|
//! | 1 | Random | 8 uniform symbols |
//! | 2 | Checksum | 7 uniform symbols, then `alphabet[sum mod len]` |
//! | 3 | Paired | 4 pairs `(x, x + offset mod len)` |
//! | 4 | Mirrored | 4 symbols, then their complements `len-1-x` reversed |
//! | 5 | Alternating | first pool, second pool, first pool, ... |
//!
//! The checksum sums ASCII codes for letters, digit values for digits and set
//! indices for emoji.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::error::RainError;

/// Symbols per token.
pub const TOKEN_LEN: usize = 8;
const HALF: usize = TOKEN_LEN / 2;

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];
const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const EMOJI: [&str; 50] = [
    "😀", "😂", "🥰", "😍", "🤔", "😴", "🥳", "🤯", "😡", "😭", "👍", "👎", "🙏", "💪", "👀",
    "🧠", "🔥", "💯", "🚀", "🎉", "❤️", "💔", "⭐️", "✨", "☀️", "🌙", "🌍", "✈️", "🚗", "💻",
    "🐶", "🐱", "🐭", "🦊", "🐻", "🐼", "🐨", "🦁", "🐸", "🐢", "🍕", "🍔", "🍓", "🥑", "☕️",
    "🍺", "📚", "🎸", "⚽️", "🏆",
];

const CONSONANTS: [usize; 21] = [
    1, 2, 3, 5, 6, 7, 9, 10, 11, 12, 13, 15, 16, 17, 18, 19, 21, 22, 23, 24, 25,
];
const VOWELS: [usize; 5] = [0, 4, 8, 14, 20];
const EVEN_DIGITS: [usize; 5] = [0, 2, 4, 6, 8];
const ODD_DIGITS: [usize; 5] = [1, 3, 5, 7, 9];
const FACES: [usize; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const OBJECTS: [usize; 10] = [40, 41, 42, 43, 44, 45, 46, 47, 48, 49];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Letters,
    Digits,
    Emoji,
}

impl Family {
    pub fn alphabet(self) -> &'static [&'static str] {
        match self {
            Family::Letters => &LETTERS,
            Family::Digits => &DIGITS,
            Family::Emoji => &EMOJI,
        }
    }

    /// Log file the family's sessions are appended to.
    pub fn log_file(self) -> &'static str {
        match self {
            Family::Letters => "string.log",
            Family::Digits => "integer.log",
            Family::Emoji => "emoji.log",
        }
    }

    /// Plural noun used in prompts and session lines.
    pub fn noun(self) -> &'static str {
        match self {
            Family::Letters => "strings",
            Family::Digits => "numbers",
            Family::Emoji => "sequences",
        }
    }

    /// What the menu asks the user to generate.
    pub fn subject(self) -> &'static str {
        match self {
            Family::Letters => "string generation",
            Family::Digits => "numeric string generation",
            Family::Emoji => "emoji sequence generation",
        }
    }

    fn pair_offset(self) -> usize {
        match self {
            Family::Letters => 5,
            Family::Digits => 3,
            Family::Emoji => 5,
        }
    }

    fn checksum_weight(self, index: usize) -> usize {
        match self {
            Family::Letters => b'A' as usize + index,
            Family::Digits | Family::Emoji => index,
        }
    }

    /// Category pools for the alternating style, in alternation order.
    fn categories(self) -> (&'static [usize], &'static [usize]) {
        match self {
            Family::Letters => (&CONSONANTS, &VOWELS),
            Family::Digits => (&EVEN_DIGITS, &ODD_DIGITS),
            Family::Emoji => (&FACES, &OBJECTS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Random,
    Checksum,
    Paired,
    Mirrored,
    Alternating,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Random,
        Style::Checksum,
        Style::Paired,
        Style::Mirrored,
        Style::Alternating,
    ];

    /// Menu number (1-5) to style. Anything else is invalid input.
    pub fn from_selector(selector: i64) -> Result<Style, RainError> {
        usize::try_from(selector)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Style::ALL.get(i).copied())
            .ok_or_else(|| {
                RainError::invalid(format!("style must be between 1 and 5, got {}", selector))
            })
    }

    pub fn number(self) -> u8 {
        match self {
            Style::Random => 1,
            Style::Checksum => 2,
            Style::Paired => 3,
            Style::Mirrored => 4,
            Style::Alternating => 5,
        }
    }

    pub fn label(self, family: Family) -> &'static str {
        match (self, family) {
            (Style::Random, _) => "Random Style",
            (Style::Checksum, _) => "Checksum Style",
            (Style::Paired, _) => "Paired Style",
            (Style::Mirrored, _) => "Mirrored Style",
            (Style::Alternating, Family::Letters) => "Alternating Phonetic Style",
            (Style::Alternating, Family::Digits) => "Alternating Parity Style",
            (Style::Alternating, Family::Emoji) => "Alternating Categories Style (Face/Object)",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Alphabet indices of one token.
pub fn generate_indices<R: Rng + ?Sized>(family: Family, style: Style, rng: &mut R) -> Vec<usize> {
    let len = family.alphabet().len();
    let mut idx = Vec::with_capacity(TOKEN_LEN);
    match style {
        Style::Random => {
            idx.extend((0..TOKEN_LEN).map(|_| rng.gen_range(0..len)));
        }
        Style::Checksum => {
            idx.extend((0..TOKEN_LEN - 1).map(|_| rng.gen_range(0..len)));
            let sum: usize = idx.iter().map(|&i| family.checksum_weight(i)).sum();
            idx.push(sum % len);
        }
        Style::Paired => {
            for _ in 0..HALF {
                let first = rng.gen_range(0..len);
                idx.push(first);
                idx.push((first + family.pair_offset()) % len);
            }
        }
        Style::Mirrored => {
            idx.extend((0..HALF).map(|_| rng.gen_range(0..len)));
            for i in (0..HALF).rev() {
                idx.push(len - 1 - idx[i]);
            }
        }
        Style::Alternating => {
            let (first, second) = family.categories();
            for pos in 0..TOKEN_LEN {
                let pool = if pos % 2 == 0 { first } else { second };
                // pools are non-empty constants
                idx.push(pool.choose(rng).copied().unwrap_or(0));
            }
        }
    }
    idx
}

/// One token rendered as a string.
pub fn generate<R: Rng + ?Sized>(family: Family, style: Style, rng: &mut R) -> String {
    let alphabet = family.alphabet();
    generate_indices(family, style, rng)
        .into_iter()
        .map(|i| alphabet[i])
        .collect()
}
