use binary_rw::{BinaryReader, BinaryWriter, Endian, MemoryStream, WriteStream};

use crate::bit_stream::{pack, padding_for, unpack};
use crate::code::Code;
use crate::error::{CodecError, Result};
use crate::huffman::{CodeTable, ReverseTable};
use crate::Symbol;

/// Readers only keep the low byte of a stored code length.
pub const MAX_CODE_LEN: usize = 0xFF;

/// Everything that precedes the packed body of an encoded file:
///
/// ```text
/// i32  body padding, 0..=7
/// i32  number of table entries
/// per entry:
///   u16  symbol
///   i32  code length in bits
///   u8*  code, packed into ceil(length / 8) bytes
/// ```
///
/// All integers are big endian.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub padding: u8,
    pub table: CodeTable,
}

impl Header {
    pub fn new(padding: u8, table: CodeTable) -> Self {
        Self { padding, table }
    }

    pub fn reverse_table(&self) -> Result<ReverseTable> {
        self.table.reverse()
    }

    pub fn write<W: WriteStream>(&self, stream: &mut W) -> Result<()> {
        let mut writer = BinaryWriter::new(stream, Endian::Big);

        writer.write_i32(self.padding as i32)?;
        writer.write_i32(self.table.len() as i32)?;

        for (symbol, code) in self.table.iter() {
            if code.len() > MAX_CODE_LEN {
                return Err(CodecError::CodeTooLong {
                    symbol,
                    length: code.len(),
                });
            }

            writer.write_u16(symbol)?;
            writer.write_i32(code.len() as i32)?;
            let packed = pack(code.bits().iter().copied())?;
            writer.write_bytes(&packed.bytes)?;
        }

        Ok(())
    }

    /// Number of bytes `write` produces for this header.
    pub fn encoded_len(&self) -> usize {
        let entries: usize = self
            .table
            .iter()
            .map(|(_, code)| 2 + 4 + (code.len() + 7) / 8)
            .sum();
        4 + 4 + entries
    }

    /// Parses a header from the start of `data` and hands back the bytes
    /// that follow it. The buffer is moved into the stream and reused for
    /// the remainder, so the file is never held twice.
    pub fn read(data: Vec<u8>) -> Result<(Self, Vec<u8>)> {
        let total = data.len();
        let mut stream = MemoryStream::from(data);
        let mut reader = HeaderReader {
            reader: BinaryReader::new(&mut stream, Endian::Big),
            remaining: total,
        };

        let padding = reader.read_i32("body padding")?;
        if !(0..=7).contains(&padding) {
            return Err(CodecError::malformed_header(format!(
                "body padding must be between 0 and 7, got {padding}"
            )));
        }

        let table_size = reader.read_i32("table size")?;
        if table_size < 0 {
            return Err(CodecError::malformed_header(format!(
                "negative table size {table_size}"
            )));
        }

        let mut table = CodeTable::new();
        for index in 0..table_size {
            let symbol = reader.read_u16("table entry symbol")?;
            let length = (reader.read_i32("table entry code length")? & 0xFF) as usize;
            if length == 0 {
                return Err(CodecError::malformed_header(format!(
                    "entry {index} for symbol {symbol} has an empty code"
                )));
            }

            let bytes = reader.read_bytes((length + 7) / 8, "table entry code")?;
            let code = Code::from(unpack(&bytes, padding_for(length))?);

            if table.insert(symbol, code).is_some() {
                return Err(CodecError::malformed_header(format!(
                    "symbol {symbol} appears twice in the table"
                )));
            }
        }

        let consumed = total - reader.remaining;
        drop(reader);

        let mut rest: Vec<u8> = stream.into();
        rest.drain(..consumed);
        Ok((Self::new(padding as u8, table), rest))
    }
}

/// Refuses reads that would run past the end of the header data.
struct HeaderReader<'a> {
    reader: BinaryReader<'a>,
    remaining: usize,
}

impl<'a> HeaderReader<'a> {
    fn claim(&mut self, len: usize, field: &str) -> Result<()> {
        if self.remaining < len {
            return Err(CodecError::malformed_header(format!(
                "file ends before the {field}, wanted {len} bytes but {} are left",
                self.remaining
            )));
        }
        self.remaining -= len;
        Ok(())
    }

    fn read_i32(&mut self, field: &str) -> Result<i32> {
        self.claim(4, field)?;
        Ok(self.reader.read_i32()?)
    }

    fn read_u16(&mut self, field: &str) -> Result<u16> {
        self.claim(2, field)?;
        Ok(self.reader.read_u16()?)
    }

    fn read_bytes(&mut self, len: usize, field: &str) -> Result<Vec<u8>> {
        self.claim(len, field)?;
        Ok(self.reader.read_bytes(len)?)
    }
}
