use thiserror::Error;

use crate::Symbol;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("input has no symbols to build a tree from")]
    EmptyInput,

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("malformed body: {0}")]
    MalformedBody(String),

    #[error("code for symbol {symbol} is {length} bits long, at most 255 can be stored")]
    CodeTooLong { symbol: Symbol, length: usize },

    #[error("symbol {0} does not fit in a byte")]
    SymbolOutOfRange(Symbol),

    #[error("input is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("decoded symbols are not valid UTF-16")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),

    #[error("unknown alphabet {0:?}, use 'bytes' or 'utf16'")]
    UnknownAlphabet(String),

    #[error("unknown operation {0:?}, use 'e' to encode or 'd' to decode")]
    InvalidOperation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Binary(#[from] binary_rw::BinaryError),
}

impl CodecError {
    pub(crate) fn malformed_header<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        log::error!("{}", message);
        CodecError::MalformedHeader(message)
    }

    pub(crate) fn malformed_body<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        log::error!("{}", message);
        CodecError::MalformedBody(message)
    }
}
