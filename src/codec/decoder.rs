use log::debug;

use crate::bit_stream::unpack;
use crate::code::Code;
use crate::error::{CodecError, Result};
use crate::format::EncodedArtifact;

use super::CodecOptions;

pub struct Decoder {
    options: CodecOptions,
}

impl Decoder {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Replays the body against the table stored in the header, emitting a
    /// symbol every time the accumulated bits form a complete code.
    pub fn decode(&self, artifact: &EncodedArtifact) -> Result<Vec<u8>> {
        let header = &artifact.header;
        let reverse = header.reverse_table()?;
        let max_len = header.table.max_code_len();

        let bits = unpack(&artifact.body, header.padding)?;
        debug!(
            "{} body bits against {} codes of at most {} bits",
            bits.len(),
            reverse.len(),
            max_len
        );

        let mut symbols = Vec::new();
        let mut candidate = Code::new();
        for (position, bit) in bits.into_iter().enumerate() {
            candidate.push(bit);
            if let Some(&symbol) = reverse.get(&candidate) {
                symbols.push(symbol);
                candidate.clear();
            } else if candidate.len() >= max_len {
                return Err(CodecError::malformed_body(format!(
                    "bits ending at {position} match no code"
                )));
            }
        }

        if !candidate.is_empty() {
            return Err(CodecError::malformed_body(format!(
                "body ends in the middle of a code after {candidate}"
            )));
        }

        self.options.alphabet.to_bytes(&symbols)
    }
}
