//! Search alphabets for cracking experiments
//!
//! The charset fixes both the brute-force enumeration order and the quantum
//! register width: one character needs enough qubits to index the alphabet.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{QcrackError, Result};

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const LOWER16: &[u8] = b"abcdefghijklmnop";
const ALNUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PRINTABLE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Alphabet a password is drawn from and enumerated over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Lowercase ASCII letters (26 symbols)
    #[default]
    Lower,
    /// First 16 lowercase letters; keeps registers to 4 qubits per character
    Lower16,
    /// Letters and digits (62 symbols)
    Alnum,
    /// Letters, digits, and punctuation (94 symbols)
    Printable,
}

impl Charset {
    /// The alphabet in enumeration order
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Charset::Lower => LOWER,
            Charset::Lower16 => LOWER16,
            Charset::Alnum => ALNUM,
            Charset::Printable => PRINTABLE,
        }
    }

    /// Number of symbols in the alphabet
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols().len()
    }

    /// Qubits needed to index one character of the alphabet
    pub fn qubits_per_char(&self) -> u32 {
        let max_index = (self.len() - 1) as u32;
        u32::BITS - max_index.leading_zeros()
    }

    /// Whether `ch` can appear in a password over this alphabet
    pub fn contains(&self, ch: char) -> bool {
        ch.is_ascii() && self.symbols().contains(&(ch as u8))
    }

    /// Number of candidate passwords of `length` characters
    pub fn search_space(&self, length: u32) -> Result<u128> {
        (self.len() as u128)
            .checked_pow(length)
            .ok_or(QcrackError::SearchSpaceOverflow {
                charset_len: self.len(),
                length,
            })
    }
}

impl FromStr for Charset {
    type Err = QcrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lower" => Ok(Charset::Lower),
            "lower16" => Ok(Charset::Lower16),
            "alnum" => Ok(Charset::Alnum),
            "printable" => Ok(Charset::Printable),
            other => Err(QcrackError::UnknownCharset(other.to_string())),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Lower => write!(f, "lower"),
            Charset::Lower16 => write!(f, "lower16"),
            Charset::Alnum => write!(f, "alnum"),
            Charset::Printable => write!(f, "printable"),
        }
    }
}

/// Generate a uniform random password of `length` symbols
pub fn random_password(charset: Charset, length: usize) -> String {
    let symbols = charset.symbols();
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| symbols[rng.gen_range(0..symbols.len())] as char)
        .collect()
}
