//! Streaming digest computation

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use super::Algorithm;
use crate::error::FileReadError;

/// Size of chunks for streaming hash computation
const CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// In-progress hash state for one algorithm
enum Hasher {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256),
}

impl Hasher {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(Md5::new()),
            Algorithm::Sha1 => Self::Sha1(Sha1::new()),
            Algorithm::Sha256 => Self::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => h.update(data),
            Self::Sha1(h) => h.update(data),
            Self::Sha256(h) => h.update(data),
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Self::Md5(h) => hex::encode(h.finalize()),
            Self::Sha1(h) => hex::encode(h.finalize()),
            Self::Sha256(h) => hex::encode(h.finalize()),
        }
    }
}

/// Stream a reader once through every requested algorithm
///
/// Returns lowercase hex digests in the same order as `algorithms`.
///
/// # Errors
/// Returns an error if reading from `reader` fails.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithms: &[Algorithm],
) -> std::io::Result<Vec<String>> {
    let mut hashers: Vec<Hasher> = algorithms.iter().copied().map(Hasher::new).collect();
    let mut buffer = vec![0; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        for hasher in &mut hashers {
            hasher.update(&buffer[..n]);
        }
    }

    Ok(hashers.into_iter().map(Hasher::finalize_hex).collect())
}

/// Compute the lowercase hex digest of a file's contents
///
/// # Errors
/// Returns an error if the file cannot be opened or read to the end.
pub fn digest_file(path: &Path, algorithm: Algorithm) -> Result<String, FileReadError> {
    let file = File::open(path).map_err(|e| FileReadError::new(path, e))?;
    let mut digests =
        digest_reader(file, &[algorithm]).map_err(|e| FileReadError::new(path, e))?;
    let digest = digests.pop().unwrap_or_default();
    tracing::debug!("{} {}: {}", algorithm, path.display(), digest);
    Ok(digest)
}
