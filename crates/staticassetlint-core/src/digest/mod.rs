//! Digest module: Filename digest extraction and content hashing
//!
//! The length of the hex run embedded in a filename selects the algorithm;
//! the file's bytes are then streamed through that algorithm and compared.

mod compute;
mod extract;

pub use compute::{digest_file, digest_reader};
pub use extract::{extract_hex_digest, ExpectedDigest};

/// Hash algorithms recognised in digest-bearing filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    /// All algorithms, longest digest first
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha1, Self::Md5];

    /// Infer the algorithm from the length of a hex digest
    #[must_use]
    pub const fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            64 => Some(Self::Sha256),
            40 => Some(Self::Sha1),
            32 => Some(Self::Md5),
            _ => None,
        }
    }

    /// Number of hex characters in a digest of this algorithm
    #[must_use]
    pub const fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Md5 => write!(f, "md5"),
            Self::Sha1 => write!(f, "sha1"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}
