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

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

//! A base64 variant whose encoded text sorts in the same order as the
//! original bytes.
//!
//! The digits are `.`, `0`–`9`, `A`–`Z`, `_` and `a`–`z`, in that order,
//! which is also their ASCII order. Bytes are packed most significant bit
//! first, three bytes to four digits, with no padding characters. As a
//! result, comparing two encoded strings gives the same answer as comparing
//! the byte sequences they came from, so encoded values can serve directly
//! as keys in indexes, filenames and key-value stores.
//!
//! ```
//! use sortable_base64::{encode, try_decode};
//!
//! let a = encode([0x00_u8]);
//! let b = encode([0x04_u8]);
//! let c = encode([0xa5_u8]);
//! assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("..", "0.", "dF"));
//! assert!(a < b && b < c);
//! assert_eq!(try_decode(&c).unwrap(), [0xa5_u8]);
//! assert!(try_decode("?").is_err());
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;

#[cfg(feature = "alloc")]
extern crate alloc;

use core::fmt::{self, Display, Formatter};

pub use alphabet::Digit;

pub use decode::decode_to_slice;
pub use decode::{DecodeError, DecodeResult};
#[cfg(feature = "alloc")]
pub use decode::{try_decode, try_decode_bytes};

pub use encode::encode_to_slice;
#[cfg(feature = "alloc")]
pub use encode::encode;

/// The number of digits produced by encoding `byte_count` bytes.
///
/// Each full group of 3 bytes becomes 4 digits; a trailing group of 1 or 2
/// bytes becomes 2 or 3 digits.
pub const fn encoded_length(byte_count: usize) -> usize {
    byte_count + byte_count.div_ceil(3)
}

/// The number of bytes produced by decoding `symbol_count` digits.
///
/// This inverts [`encoded_length`]. Counts for which
/// [`is_canonical_length`] is false are still accepted: the final digit
/// carries no complete byte and is dropped.
pub const fn decoded_length(symbol_count: usize) -> usize {
    symbol_count - symbol_count.div_ceil(4)
}

/// Whether `symbol_count` is the length of some encoded byte sequence.
///
/// Lengths of the form `4k + 1` never come out of the encoder.
pub const fn is_canonical_length(symbol_count: usize) -> bool {
    symbol_count % 4 != 1
}

/// The output buffer passed to [`encode_to_slice`] or [`decode_to_slice`]
/// was shorter than required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferTooSmall {
    pub needed: usize,
    pub available: usize,
}

impl Display for BufferTooSmall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "output buffer too small: need {} bytes, have {}",
            self.needed, self.available,
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for BufferTooSmall {}
