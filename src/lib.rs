//! SHA-1 (FIPS 180-1) computed from first principles.
//!
//! ```
//! let digest = sha1sum::Digest::of(b"abc");
//! assert_eq!(digest.to_string(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

use std::fmt;

pub mod compress;
pub mod padding;
pub mod util;

pub use compress::{compress, compress_bytes, Sha1Error};
pub use padding::{pad, PaddedMessage};

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 20;

pub fn sha1_hash(bytes: &[u8]) -> [u8; DIGEST_SIZE] {
    compress(&pad(bytes))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub fn of(bytes: &[u8]) -> Self {
        Digest(sha1_hash(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> [u8; DIGEST_SIZE] {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&util::to_string(&self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
