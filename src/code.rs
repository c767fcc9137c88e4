use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A prefix code word, most significant (first written) bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns a copy of this code extended by one bit.
    pub fn with(&self, bit: bool) -> Self {
        let mut bits = Vec::with_capacity(self.0.len() + 1);
        bits.extend_from_slice(&self.0);
        bits.push(bit);
        Self(bits)
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid bit {0:?}, expected '0' or '1'")]
pub struct ParseCodeError(char);

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseCodeError(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse() {
        let code: Code = "010011".parse().unwrap();
        assert_eq!(code.len(), 6);
        assert_eq!(code.to_string(), "010011");
        assert_eq!("".parse::<Code>().unwrap(), Code::new());
        assert_eq!("01x".parse::<Code>(), Err(ParseCodeError('x')));
        assert_eq!(
            ParseCodeError('x').to_string(),
            "invalid bit 'x', expected '0' or '1'"
        );
    }

    #[test]
    fn test_prefix() {
        let a: Code = "01".parse().unwrap();
        let b: Code = "011".parse().unwrap();
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert!(Code::new().is_prefix_of(&a));
        assert_eq!(a.with(true), b);
    }
}
