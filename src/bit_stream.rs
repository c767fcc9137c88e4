use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{CodecError, Result};

/// Bits packed most significant first, with the last byte padded by zeros.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub padding: u8,
}

impl PackedBits {
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 - self.padding as usize
    }
}

pub fn padding_for(bit_len: usize) -> u8 {
    ((8 - bit_len % 8) % 8) as u8
}

pub fn pack<I: IntoIterator<Item = bool>>(bits: I) -> Result<PackedBits> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    let mut bit_len = 0usize;
    for bit in bits {
        writer.write_bit(bit)?;
        bit_len += 1;
    }
    writer.byte_align()?;

    Ok(PackedBits {
        bytes: writer.into_writer(),
        padding: padding_for(bit_len),
    })
}

pub fn unpack(bytes: &[u8], padding: u8) -> Result<Vec<bool>> {
    if padding > 7 {
        return Err(CodecError::malformed_body(format!(
            "padding of {padding} bits is more than a byte"
        )));
    }
    let bit_len = (bytes.len() * 8)
        .checked_sub(padding as usize)
        .ok_or_else(|| {
            CodecError::malformed_body(format!("padding of {padding} bits on an empty body"))
        })?;

    let mut reader = BitReader::endian(Cursor::new(bytes), BigEndian);
    let mut bits = Vec::with_capacity(bit_len);
    for _ in 0..bit_len {
        bits.push(reader.read_bit()?);
    }
    Ok(bits)
}
