use crate::{BLOCK_SIZE, DIGEST_SIZE};

pub mod io;

pub fn to_string(bytes: &[u8]) -> String {
     bytes.iter().map(|&byte| format!("{byte:02x}")).collect::<Vec<_>>().join("")
}

/// Reads a block as 16 big-endian words.
pub(crate) fn to_words(block: &[u8; BLOCK_SIZE]) -> [u32; 16] {
    let mut w: [u32; 16] = [0; 16];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    w
}

pub(crate) fn from_words(words: &[u32; 5]) -> [u8; DIGEST_SIZE] {
    let mut arr: [u8; DIGEST_SIZE] = [0; DIGEST_SIZE];
    for (i, word) in words.iter().enumerate() {
        arr[i*4..(i+1)*4].copy_from_slice(&word.to_be_bytes());
    }
    arr
}
