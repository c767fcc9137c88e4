mod artifact;
mod header;

pub use artifact::EncodedArtifact;
pub use header::{Header, MAX_CODE_LEN};
