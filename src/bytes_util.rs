// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Byte-array utility functions operating on already-materialized slices, independent of any
//! stream cursor. These are the primitives a parser reaches for after pulling a raw byte run out
//! of a [`crate::stream::ByteStream`].

use std::cmp::Ordering;

use crate::errors::{unsupported_error, Result, StreamError};

/// Names the text encoding used by [`bytes_to_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Each byte is its own code point in `[0, 255]`.
    Ascii,
    /// UTF-8.
    Utf8,
    /// UCS-2, big-endian, BMP code points only (no surrogate pairs).
    Ucs2,
    /// UTF-16, little-endian.
    Utf16Le,
}

/// Returns the longest prefix of `data` that does not end with `pad`.
pub fn bytes_strip_right(data: &[u8], pad: u8) -> &[u8] {
    let mut len = data.len();
    while len > 0 && data[len - 1] == pad {
        len -= 1;
    }
    &data[..len]
}

/// Returns the prefix of `data` up to and including the first occurrence of `term`, or the whole
/// of `data` if `term` does not occur. When `include` is false, the terminator itself is dropped
/// from the returned slice.
pub fn bytes_terminate(data: &[u8], term: u8, include: bool) -> &[u8] {
    match data.iter().position(|&b| b == term) {
        Some(i) => &data[..if include { i + 1 } else { i }],
        None => data,
    }
}

/// Decodes `data` to a `String` under the named `encoding`.
pub fn bytes_to_str(data: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Ascii => Ok(data.iter().map(|&b| b as char).collect()),
        Encoding::Utf8 => std::str::from_utf8(data)
            .map(|s| s.to_owned())
            .map_err(|e| StreamError::Other(Box::new(e))),
        Encoding::Ucs2 => {
            if data.len() % 2 != 0 {
                return unsupported_error("ucs2 input length must be a multiple of 2");
            }
            let mut out = String::with_capacity(data.len() / 2);
            for pair in data.chunks_exact(2) {
                let code = u16::from_be_bytes([pair[0], pair[1]]);
                out.push(char::from_u32(code as u32).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Ok(out)
        }
        Encoding::Utf16Le => {
            if data.len() % 2 != 0 {
                return unsupported_error("utf16le input length must be a multiple of 2");
            }
            let units: Vec<u16> =
                data.chunks_exact(2).map(|p| u16::from_le_bytes([p[0], p[1]])).collect();
            String::from_utf16(&units).map_err(|e| StreamError::Other(Box::new(e)))
        }
    }
}

/// XORs every byte of `data` with the single byte `key`.
pub fn process_xor_one(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|&b| b ^ key).collect()
}

/// XORs every byte of `data` with `key`, repeating `key` as necessary.
///
/// # Panics
///
/// Panics if `key` is empty.
pub fn process_xor_many(data: &[u8], key: &[u8]) -> Vec<u8> {
    assert!(!key.is_empty(), "process_xor_many key must not be empty");
    data.iter().enumerate().map(|(i, &b)| b ^ key[i % key.len()]).collect()
}

/// Rotates every byte of `data` left by `amount` bits (negative values rotate right). Only
/// `group_size == 1` is supported.
pub fn process_rotate_left(data: &[u8], amount: i32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        return unsupported_error("process_rotate_left only supports group_size == 1");
    }
    let shift = (amount & 7) as u32;
    Ok(data.iter().map(|&b| b.rotate_left(shift)).collect())
}

/// Inflates `data` as a raw zlib stream.
#[cfg(feature = "zlib")]
pub fn process_zlib(data: &[u8]) -> Result<Vec<u8>> {
    use std::io::Read;

    log::debug!("inflating {} byte(s) of zlib data", data.len());

    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(|e| {
        log::debug!("zlib inflate failed");
        StreamError::Other(Box::new(e))
    })?;
    Ok(out)
}

/// Lexicographically compares `a` and `b`, returning a negative, zero, or positive value in the
/// same sense as `a.len() as i64 - b.len() as i64` when one is a prefix of the other.
pub fn byte_array_compare(a: &[u8], b: &[u8]) -> i64 {
    if std::ptr::eq(a, b) {
        return 0;
    }
    match a.cmp(b) {
        Ordering::Equal => a.len() as i64 - b.len() as i64,
        Ordering::Less => -1,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_bytes_strip_right() {
        assert_eq!(bytes_strip_right(b"hello\0\0\0", 0), b"hello");
        assert_eq!(bytes_strip_right(b"\0\0\0", 0), b"");
        assert_eq!(bytes_strip_right(b"no-pad", 0), b"no-pad");
    }

    #[test]
    fn verify_bytes_strip_right_idempotent() {
        let once = bytes_strip_right(b"abc   ", b' ');
        let twice = bytes_strip_right(once, b' ');
        assert_eq!(once, twice);
    }

    #[test]
    fn verify_bytes_terminate() {
        assert_eq!(bytes_terminate(b"abc\0def", 0, false), b"abc");
        assert_eq!(bytes_terminate(b"abc\0def", 0, true), b"abc\0");
        assert_eq!(bytes_terminate(b"abc", 0, false), b"abc");
    }

    #[test]
    fn verify_bytes_to_str_ascii_and_utf8() {
        assert_eq!(bytes_to_str(b"abc", Encoding::Ascii).unwrap(), "abc");
        assert_eq!(bytes_to_str("héllo".as_bytes(), Encoding::Utf8).unwrap(), "héllo");
    }

    #[test]
    fn verify_bytes_to_str_ucs2() {
        // "Hi" as big-endian UCS-2.
        let data = [0x00, 0x48, 0x00, 0x69];
        assert_eq!(bytes_to_str(&data, Encoding::Ucs2).unwrap(), "Hi");
    }

    #[test]
    fn verify_bytes_to_str_utf16le() {
        // "Hi" as little-endian UTF-16.
        let data = [0x48, 0x00, 0x69, 0x00];
        assert_eq!(bytes_to_str(&data, Encoding::Utf16Le).unwrap(), "Hi");
    }

    #[test]
    fn verify_process_xor_one_involution() {
        let data = b"The quick brown fox";
        let once = process_xor_one(data, 0x5A);
        let twice = process_xor_one(&once, 0x5A);
        assert_eq!(twice, data);
    }

    #[test]
    fn verify_process_xor_many_involution() {
        let data = b"The quick brown fox";
        let key = b"key";
        let once = process_xor_many(data, key);
        let twice = process_xor_many(&once, key);
        assert_eq!(twice, data);
    }

    #[test]
    fn verify_process_rotate_left_inverse() {
        let data = [0b0000_0001u8, 0b1000_0000];
        let rotated = process_rotate_left(&data, 3, 1).unwrap();
        let back = process_rotate_left(&rotated, -3, 1).unwrap();
        assert_eq!(&back[..], &data[..]);
    }

    #[test]
    fn verify_process_rotate_left_rejects_group_size() {
        let err = process_rotate_left(&[0u8], 1, 2).unwrap_err();
        assert!(matches!(err, StreamError::Unsupported(_)));
    }

    #[cfg(feature = "zlib")]
    #[test]
    fn verify_process_zlib_round_trip() {
        use std::io::Write;

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"hello hello hello").unwrap();
        let compressed = encoder.finish().unwrap();

        let decompressed = process_zlib(&compressed).unwrap();
        assert_eq!(decompressed, b"hello hello hello");
    }

    #[test]
    fn verify_byte_array_compare() {
        assert_eq!(byte_array_compare(b"abc", b"abc"), 0);
        assert!(byte_array_compare(b"abc", b"abd") < 0);
        assert!(byte_array_compare(b"abd", b"abc") > 0);
        assert!(byte_array_compare(b"ab", b"abc") < 0);
    }
}
