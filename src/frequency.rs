use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{CodecError, Result};
use crate::Symbol;

pub type FrequencyMap = BTreeMap<Symbol, usize>;

/// How raw input bytes are split into symbols.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// One symbol per byte.
    #[default]
    Bytes,
    /// UTF-8 text, one symbol per UTF-16 code unit.
    Utf16,
}

impl Alphabet {
    pub fn symbols(&self, input: &[u8]) -> Result<Vec<Symbol>> {
        match self {
            Alphabet::Bytes => Ok(input.iter().map(|&b| b as Symbol).collect()),
            Alphabet::Utf16 => Ok(std::str::from_utf8(input)?.encode_utf16().collect()),
        }
    }

    pub fn to_bytes(&self, symbols: &[Symbol]) -> Result<Vec<u8>> {
        match self {
            Alphabet::Bytes => symbols
                .iter()
                .map(|&s| u8::try_from(s).map_err(|_| CodecError::SymbolOutOfRange(s)))
                .collect(),
            Alphabet::Utf16 => Ok(String::from_utf16(symbols)?.into_bytes()),
        }
    }
}

impl FromStr for Alphabet {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bytes" => Ok(Alphabet::Bytes),
            "utf16" => Ok(Alphabet::Utf16),
            _ => Err(CodecError::UnknownAlphabet(s.to_string())),
        }
    }
}

/// Stops at the first zero symbol when `stop_at_nul` is set.
pub fn significant_symbols(symbols: &[Symbol], stop_at_nul: bool) -> &[Symbol] {
    if !stop_at_nul {
        return symbols;
    }

    match symbols.iter().position(|&s| s == 0) {
        Some(end) => &symbols[..end],
        None => symbols,
    }
}

pub fn count_frequencies(symbols: &[Symbol]) -> FrequencyMap {
    symbols.iter().fold(FrequencyMap::new(), |mut acc, &symbol| {
        *acc.entry(symbol).or_insert(0) += 1;
        acc
    })
}
