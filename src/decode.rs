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

//! Functions and types for decoding sortable base64 data.

use super::decoded_length;
use super::BufferTooSmall;
use super::Digit;

use core::fmt::{self, Formatter};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An error encountered while decoding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Encountered a character that is not a digit. `index` counts
    /// characters from the start of the input.
    BadChar { ch: char, index: usize },
    /// Encountered a byte that is not the ASCII code of a digit. `index`
    /// counts bytes from the start of the input.
    BadByte { byte: u8, index: usize },
    /// The output buffer given to [`decode_to_slice`] was too short.
    BufferTooSmall(BufferTooSmall),
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadChar { ch, index } => {
                write!(f, "bad character {:?} at position {}", ch, index)
            }
            Self::BadByte { byte, index } => {
                write!(f, "bad character 0x{:02x} at byte {}", byte, index)
            }
            Self::BufferTooSmall(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

impl From<BufferTooSmall> for DecodeError {
    fn from(e: BufferTooSmall) -> Self {
        Self::BufferTooSmall(e)
    }
}

/// Bits carried over from digits that did not complete a byte.
#[derive(Clone, Copy)]
enum Pending {
    None,
    Six(u8),
    Four(u8),
    Two(u8),
}

/// Folds each digit into the pending bits and emits every completed byte.
/// Stops at the first error. Leftover bits at the end are padding and are
/// discarded, whatever their value.
fn unpack<I>(digits: I, mut emit: impl FnMut(u8)) -> DecodeResult<()>
where
    I: Iterator<Item = DecodeResult<Digit>>,
{
    let mut pending = Pending::None;
    for digit in digits {
        let d = u8::from(digit?);
        pending = match pending {
            // ........ ..aaaaaa
            Pending::None => Pending::Six(d),
            // ....aaaa aabbbbbb
            //     ^^^^ ^^^^
            Pending::Six(p) => {
                emit(p << 2 | d >> 4);
                Pending::Four(d & 0x0f)
            }
            // ......bb bbcccccc
            //       ^^ ^^^^^^
            Pending::Four(p) => {
                emit(p << 4 | d >> 2);
                Pending::Two(d & 0x03)
            }
            // ........ ccdddddd
            //          ^^^^^^^^
            Pending::Two(p) => {
                emit(p << 6 | d);
                Pending::None
            }
        };
    }
    Ok(())
}

fn ascii_digits(
    code: &[u8],
) -> impl Iterator<Item = DecodeResult<Digit>> + '_ {
    code.iter().enumerate().map(|(index, &byte)| {
        Digit::from_ascii(byte).ok_or(Error::BadByte {
            byte,
            index,
        })
    })
}

/// Decodes ASCII digits from `code` into `out`, returning the number of
/// bytes written.
///
/// `out` must hold at least [`decoded_length(code.len())`](decoded_length)
/// bytes. If `code` contains a byte outside the alphabet, everything written
/// to `out` so far is zeroed before the error is returned.
pub fn decode_to_slice(code: &[u8], out: &mut [u8]) -> DecodeResult<usize> {
    let needed = decoded_length(code.len());
    if out.len() < needed {
        return Err(BufferTooSmall {
            needed,
            available: out.len(),
        }
        .into());
    }

    let mut len = 0;
    let result = unpack(ascii_digits(code), |b| {
        out[len] = b;
        len += 1;
    });
    if let Err(e) = result {
        out[..len].fill(0);
        return Err(e);
    }
    Ok(len)
}

/// Decodes a sortable base64 string.
///
/// Fails with [`DecodeError::BadChar`] if any character of `code` is not a
/// digit; no partially decoded data is returned in that case.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn try_decode(code: &str) -> DecodeResult<Vec<u8>> {
    let digits = code.chars().enumerate().map(|(index, ch)| {
        Digit::from_symbol(ch).ok_or(Error::BadChar {
            ch,
            index,
        })
    });

    // Valid input is all ASCII, so its byte length is its digit count.
    let mut bytes = Vec::with_capacity(decoded_length(code.len()));
    unpack(digits, |b| bytes.push(b))?;
    Ok(bytes)
}

/// Decodes sortable base64 data given as raw bytes, such as a key read back
/// from a store.
///
/// Fails with [`DecodeError::BadByte`] on any byte that is not the ASCII
/// code of a digit.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn try_decode_bytes<T: AsRef<[u8]>>(code: T) -> DecodeResult<Vec<u8>> {
    let code = code.as_ref();
    let mut bytes = Vec::with_capacity(decoded_length(code.len()));
    unpack(ascii_digits(code), |b| bytes.push(b))?;
    Ok(bytes)
}
