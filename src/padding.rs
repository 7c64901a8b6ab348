//! Merkle–Damgård padding.
//!
//! A message of `L` bytes becomes `L` bytes, a `0x80` marker, the fewest
//! zero bytes that leave 8 bytes before a block boundary, and `L * 8` as a
//! big-endian `u64`. Bit-lengths past `u64::MAX` wrap; messages of 2^61 bytes
//! or more are not supported.

use crate::compress::Sha1Error;
use crate::BLOCK_SIZE;

const MARKER: u8 = 0x80;
const LENGTH_FIELD_SIZE: usize = 8;

/// A buffer whose length is a positive multiple of [`BLOCK_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Vec<[u8; BLOCK_SIZE]>,
}

impl PaddedMessage {
    pub fn blocks(&self) -> &[[u8; BLOCK_SIZE]] {
        &self.blocks
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.blocks.as_flattened()
    }

    pub fn len(&self) -> usize {
        self.blocks.len() * BLOCK_SIZE
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }
}

/// Only the block structure is checked; marker and length field are the
/// caller's business.
impl TryFrom<&[u8]> for PaddedMessage {
    type Error = Sha1Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Sha1Error> {
        if bytes.is_empty() || bytes.len() % BLOCK_SIZE != 0 {
            return Err(Sha1Error::InvalidPaddedLength(bytes.len()));
        }
        let mut blocks: Vec<[u8; BLOCK_SIZE]> = vec![[0; BLOCK_SIZE]; bytes.len() / BLOCK_SIZE];
        blocks.as_flattened_mut().copy_from_slice(bytes);
        Ok(PaddedMessage { blocks })
    }
}

impl AsRef<[u8]> for PaddedMessage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Smallest multiple of [`BLOCK_SIZE`] with room for `n` bytes, the marker
/// and the length field.
pub fn padded_len(n: usize) -> usize {
    (n + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

pub fn pad(bytes: &[u8]) -> PaddedMessage {
    let n = bytes.len();
    let message_length: u64 = (n as u64).wrapping_mul(8);
    let total = padded_len(n);

    let mut blocks: Vec<[u8; BLOCK_SIZE]> = vec![[0; BLOCK_SIZE]; total / BLOCK_SIZE];
    let buffer = blocks.as_flattened_mut();
    buffer[..n].copy_from_slice(bytes);
    buffer[n] = MARKER;
    buffer[total - LENGTH_FIELD_SIZE..].copy_from_slice(&message_length.to_be_bytes());

    PaddedMessage { blocks }
}
