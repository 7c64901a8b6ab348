use thiserror::Error;
use tracing::trace;

use crate::padding::PaddedMessage;
use crate::util::{from_words, to_words};
use crate::{BLOCK_SIZE, DIGEST_SIZE};

const H0: u32 = 0x67452301;
const H1: u32 = 0xEFCDAB89;
const H2: u32 = 0x98BADCFE;
const H3: u32 = 0x10325476;
const H4: u32 = 0xC3D2E1F0;

#[derive(Debug, Error)]
pub enum Sha1Error {
    #[error("padded message length must be a positive multiple of 64 but is {0}")]
    InvalidPaddedLength(usize),
}

/// Runs the compression function over every block and serializes the final
/// state.
pub fn compress(message: &PaddedMessage) -> [u8; DIGEST_SIZE] {
    let mut state: [u32; 5] = [H0, H1, H2, H3, H4];

    for block in message.blocks() {
        process_block(&mut state, block);
    }
    trace!(bytes = message.len(), blocks = message.num_blocks(), "compressed padded message");

    from_words(&state)
}

/// Same as [`compress`] for a raw buffer that claims to be padded already.
pub fn compress_bytes(bytes: &[u8]) -> Result<[u8; DIGEST_SIZE], Sha1Error> {
    let message = PaddedMessage::try_from(bytes)?;
    Ok(compress(&message))
}

fn schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 80] {
    let mut w: [u32; 80] = [0; 80];
    w[..16].copy_from_slice(&to_words(block));

    for i in 16..80 {
        w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
    }
    w
}

fn process_block(state: &mut [u32; 5], block: &[u8; BLOCK_SIZE]) {
    let w = schedule(block);

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
            20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
            _ => (b ^ c ^ d, 0xCA62C1D6),
        };
        let temp = a.rotate_left(5)
                         .wrapping_add(f)
                         .wrapping_add(e)
                         .wrapping_add(k)
                         .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
        *h = h.wrapping_add(v);
    }
}
