//! Huffman compression for byte streams and UTF-16 text.
//!
//! ```no_run
//! use huff::CodecOptions;
//!
//! let options = CodecOptions::default();
//! let encoded = huff::encode(b"abracadabra", &options)?;
//! assert_eq!(huff::decode(&encoded, &options)?, b"abracadabra");
//! # Ok::<(), huff::CodecError>(())
//! ```

pub mod bit_stream;
pub mod code;
pub mod codec;
pub mod error;
pub mod format;
pub mod frequency;
pub mod huffman;
pub mod tree;

use std::path::Path;
use std::str::FromStr;

pub use code::Code;
pub use codec::{CodecOptions, Decoder, Encoder};
pub use error::{CodecError, Result};
pub use format::{EncodedArtifact, Header};
pub use frequency::Alphabet;
pub use huffman::CodeTable;
pub use tree::TreeNode;

/// One code unit of the input alphabet.
pub type Symbol = u16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
}

impl FromStr for Operation {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "e" => Ok(Operation::Encode),
            "d" => Ok(Operation::Decode),
            _ => Err(CodecError::InvalidOperation(s.to_string())),
        }
    }
}

pub fn encode(input: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
    Encoder::new(*options).encode(input)?.to_bytes()
}

pub fn decode(encoded: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
    let artifact = EncodedArtifact::try_from(encoded)?;
    Decoder::new(*options).decode(&artifact)
}

pub struct FileSizes {
    pub input_size: usize,
    pub output_size: usize,
}

/// Encodes `input` into `output`, returning the artifact so that callers can
/// inspect its code table.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &CodecOptions,
) -> Result<(EncodedArtifact, FileSizes)> {
    let data = std::fs::read(input.as_ref())?;
    let artifact = Encoder::new(*options).encode(&data)?;
    let written = artifact.write_file(output)?;

    let sizes = FileSizes {
        input_size: data.len(),
        output_size: written,
    };
    Ok((artifact, sizes))
}

pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &CodecOptions,
) -> Result<(EncodedArtifact, FileSizes)> {
    let artifact = EncodedArtifact::read_file(input)?;
    let decoded = Decoder::new(*options).decode(&artifact)?;
    std::fs::write(output.as_ref(), &decoded)?;

    let sizes = FileSizes {
        input_size: artifact.encoded_len(),
        output_size: decoded.len(),
    };
    Ok((artifact, sizes))
}
