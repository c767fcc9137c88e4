mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

use crate::frequency::Alphabet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub alphabet: Alphabet,
    /// Treat the first zero symbol as the end of the input, as older
    /// encoders did.
    pub stop_at_nul: bool,
}
