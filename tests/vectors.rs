use std::thread;

use sha1sum::padding::padded_len;
use sha1sum::util::to_string;
use sha1sum::{compress_bytes, pad, sha1_hash, Digest, DIGEST_SIZE};

fn repeated(byte: u8, n: usize) -> Vec<u8> {
    vec![byte; n]
}

#[test]
fn test_published_vectors() {
    let vectors: [(&[u8], &str); 4] = [
        (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
         "84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
        (b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
         "a49b2446a02c645bf419f995b67091253a04a259"),
    ];
    for (message, expected) in vectors {
        assert_eq!(to_string(&sha1_hash(message)), expected, "message of {} bytes", message.len());
    }
}

#[test]
fn test_block_boundary_lengths() {
    let vectors = [
        (55, "c1c8bbdc22796e28c0e15163d20899b65621d65a"),
        (56, "c2db330f6083854c99d4b5bfb6e8f29f201be699"),
        (63, "03f09f5b158a7a8cdad920bddc29b81c18a551f5"),
        (64, "0098ba824b5c16427bd7a1122a5a442a25ec644d"),
        (65, "11655326c708d70319be2610e8a57d9a5b959d3b"),
        (119, "ee971065aaa017e0632a8ca6c77bb3bf8b1dfc56"),
        (120, "f34c1488385346a55709ba056ddd08280dd4c6d6"),
    ];
    for (n, expected) in vectors {
        let message = repeated(b'a', n);
        assert_eq!(pad(&message).len() % 64, 0);
        assert_eq!(pad(&message).len(), padded_len(n));
        assert_eq!(Digest::of(&message).to_string(), expected, "{n} x 'a'");
    }
}

#[test]
fn test_one_million_a() {
    let message = repeated(b'a', 1_000_000);
    assert_eq!(to_string(&sha1_hash(&message)), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

#[test]
fn test_digest_is_always_twenty_bytes() {
    for n in [0, 1, 20, 64, 200, 4096] {
        let digest = sha1_hash(&repeated(0xff, n));
        assert_eq!(digest.len(), DIGEST_SIZE);
    }
}

#[test]
fn test_standalone_engine_agrees_with_combined_operation() {
    let message = b"standalone compression of a pre-padded buffer";
    let padded = pad(message);
    assert_eq!(compress_bytes(padded.as_bytes()).unwrap(), sha1_hash(message));
    assert!(compress_bytes(message).is_err());
}

#[test]
fn test_concurrent_hashing() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| thread::spawn(move || {
            let message = repeated(i, 10_000);
            (sha1_hash(&message), sha1_hash(&message))
        }))
        .collect();

    let digests: Vec<[u8; 20]> = handles
        .into_iter()
        .map(|h| {
            let (first, second) = h.join().unwrap();
            assert_eq!(first, second);
            first
        })
        .collect();

    for (i, digest) in digests.iter().enumerate() {
        assert_eq!(*digest, sha1_hash(&repeated(i as u8, 10_000)));
    }
}
