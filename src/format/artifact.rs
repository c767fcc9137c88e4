use std::path::Path;

use binary_rw::{BinaryWriter, Endian, MemoryStream, WriteStream};

use crate::error::{CodecError, Result};

use super::Header;

/// A complete encoded file: the self-describing header followed by the
/// packed body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedArtifact {
    pub header: Header,
    pub body: Vec<u8>,
}

impl EncodedArtifact {
    pub fn new(header: Header, body: Vec<u8>) -> Self {
        Self { header, body }
    }

    pub fn write<W: WriteStream>(&self, stream: &mut W) -> Result<()> {
        self.header.write(stream)?;

        let mut writer = BinaryWriter::new(stream, Endian::Big);
        writer.write_bytes(&self.body)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut stream = MemoryStream::new();
        self.write(&mut stream)?;
        Ok(stream.into())
    }

    /// Size of the artifact once written.
    pub fn encoded_len(&self) -> usize {
        self.header.encoded_len() + self.body.len()
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::try_from(bytes)
    }

    /// The file is assembled in memory first; a failed write may still leave
    /// a truncated file behind. Returns the number of bytes written.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        Ok(bytes.len())
    }
}

impl TryFrom<&[u8]> for EncodedArtifact {
    type Error = CodecError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from(data.to_vec())
    }
}

impl TryFrom<Vec<u8>> for EncodedArtifact {
    type Error = CodecError;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        let (header, body) = Header::read(data)?;

        if body.is_empty() && header.padding != 0 {
            return Err(CodecError::malformed_body(format!(
                "padding of {} bits on an empty body",
                header.padding
            )));
        }

        Ok(Self { header, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::CodeTable;

    fn sample() -> EncodedArtifact {
        let table: CodeTable = vec![(0x61, "1".parse().unwrap()), (0x62, "0".parse().unwrap())]
            .into_iter()
            .collect();
        EncodedArtifact::new(Header::new(4, table), vec![0b1110_0000])
    }

    #[test]
    fn test_bytes_roundtrip() {
        let artifact = sample();
        let bytes = artifact.to_bytes().unwrap();
        assert_eq!(bytes.last(), Some(&0b1110_0000));
        assert_eq!(artifact.encoded_len(), bytes.len());
        assert_eq!(EncodedArtifact::try_from(&bytes[..]).unwrap(), artifact);
        assert_eq!(EncodedArtifact::try_from(bytes).unwrap(), artifact);
    }

    #[test]
    fn test_padding_without_body() {
        let mut artifact = sample();
        artifact.body.clear();
        let bytes = artifact.to_bytes().unwrap();
        assert!(matches!(
            EncodedArtifact::try_from(&bytes[..]),
            Err(CodecError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("huff-artifact-does-not-exist.huff");
        assert!(matches!(
            EncodedArtifact::read_file(&path),
            Err(CodecError::Io(_))
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("huff-artifact-{}.huff", std::process::id()));
        let artifact = sample();
        let written = artifact.write_file(&path).unwrap();
        let on_disk = std::fs::metadata(&path).unwrap().len() as usize;
        let read = EncodedArtifact::read_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, on_disk);
        assert_eq!(written, artifact.encoded_len());
        assert_eq!(read.unwrap(), artifact);
    }
}
