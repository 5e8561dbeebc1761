/*
 * Copyright (C) 2024 taylor.fish <contact@taylor.fish>
 *
 * This file is part of sortable-base64.
 *
 * sortable-base64 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * sortable-base64 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with sortable-base64. If not, see <https://www.gnu.org/licenses/>.
 */

//! Functions for encoding bytes as sortable base64.

use super::encoded_length;
use super::BufferTooSmall;
use super::Digit;

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Bits left over from the previous byte, waiting for the next one.
#[derive(Clone, Copy)]
enum Pending {
    None,
    Two(u8),
    Four(u8),
}

fn pack(bytes: &[u8], mut emit: impl FnMut(Digit)) {
    let mut pending = Pending::None;
    for &b in bytes {
        pending = match pending {
            // ........ aaaaaaaa
            //          ^^^^^^..
            Pending::None => {
                emit(Digit::from_low_bits(b >> 2));
                Pending::Two(b & 0x03)
            }
            // ......aa bbbbbbbb
            //       ^^ ^^^^....
            Pending::Two(p) => {
                emit(Digit::from_low_bits(p << 4 | b >> 4));
                Pending::Four(b & 0x0f)
            }
            // ....bbbb cccccccc
            //     ^^^^ ^^^^^^^^
            Pending::Four(p) => {
                emit(Digit::from_low_bits(p << 2 | b >> 6));
                emit(Digit::from_low_bits(b));
                Pending::None
            }
        };
    }

    // Missing low-order bits are zero.
    match pending {
        Pending::None => {}
        Pending::Two(p) => emit(Digit::from_low_bits(p << 4)),
        Pending::Four(p) => emit(Digit::from_low_bits(p << 2)),
    }
}

/// Encodes `bytes` as ASCII digits into `out`, returning the number of bytes
/// written.
///
/// Nothing is written if `out` is shorter than
/// [`encoded_length(bytes.len())`](encoded_length).
pub fn encode_to_slice(
    bytes: &[u8],
    out: &mut [u8],
) -> Result<usize, BufferTooSmall> {
    let needed = encoded_length(bytes.len());
    if out.len() < needed {
        return Err(BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    let mut len = 0;
    pack(bytes, |d| {
        out[len] = d.ascii();
        len += 1;
    });
    debug_assert_eq!(len, needed);
    Ok(len)
}

/// Encodes `bytes` as a sortable base64 string.
///
/// The result has exactly [`encoded_length(bytes.len())`](encoded_length)
/// characters.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode<T: AsRef<[u8]>>(bytes: T) -> String {
    let bytes = bytes.as_ref();
    let mut code = String::with_capacity(encoded_length(bytes.len()));
    pack(bytes, |d| code.push(d.symbol()));
    code
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn one_byte() {
        assert_eq!(encode([0x00_u8]), ".."); // 000000|00 (0000)
        assert_eq!(encode([0x04_u8]), "0."); // 000001|00 (0000)
        assert_eq!(encode([0xa5_u8]), "dF"); // 101001|01 (0000)
    }

    #[test]
    fn two_bytes() {
        assert_eq!(encode([0x00_u8, 0x00]), "...");
        assert_eq!(encode([0x04_u8, 0x10]), "00.");
        assert_eq!(encode([0xa5_u8, 0xa5]), "dPJ");
    }

    #[test]
    fn three_bytes() {
        assert_eq!(encode([0x00_u8, 0x00, 0x00]), "....");
        assert_eq!(encode([0x04_u8, 0x10, 0x41]), "0000");
        assert_eq!(encode([0xa5_u8, 0xa5, 0xa5]), "dPL_");
        assert_eq!(encode([0xff_u8, 0xff, 0xff]), "zzzz");
    }

    #[test]
    fn empty() {
        assert_eq!(encode([0_u8; 0]), "");
        assert_eq!(encode_to_slice(&[], &mut []), Ok(0));
    }

    #[test]
    fn slice_matches_string() {
        let bytes = b"sortable keys";
        let mut out = [0; 32];
        let len = encode_to_slice(bytes, &mut out).unwrap();
        assert_eq!(&out[..len], encode(bytes).as_bytes());
    }

    #[test]
    fn slice_too_small() {
        let mut out = [b'#'; 3];
        assert_eq!(
            encode_to_slice(&[1, 2, 3], &mut out),
            Err(BufferTooSmall {
                needed: 4,
                available: 3,
            }),
        );
        assert_eq!(out, [b'#'; 3]);
    }
}
