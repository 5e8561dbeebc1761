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

//! The 64-symbol digit set and its reverse lookup table.

/// The symbols, in digit order. Each symbol's ASCII code is strictly greater
/// than the one before it, so comparing encoded strings compares the digits.
pub const SYMBOLS: &[u8; 64] =
    b".0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const NO: i8 = -1;

// Indexed by ASCII code; -1 marks characters outside the alphabet.
#[rustfmt::skip]
static VALUES: [i8; 128] = [
//   0   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, // 0x
    NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, // 1x
    NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO, NO,  0, NO, // 2x  !"#$%&'()*+,-./
     1,  2,  3,  4,  5,  6,  7,  8,  9, 10, NO, NO, NO, NO, NO, NO, // 3x 0123456789:;<=>?
    NO, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, // 4x @ABCDEFGHIJKLMNO
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, NO, NO, NO, NO, 37, // 5x PQRSTUVWXYZ[\]^_
    NO, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, // 6x `abcdefghijklmno
    53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, NO, NO, NO, NO, NO, // 7x pqrstuvwxyz{|}~
];

/// A digit value in `0..64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` if `x` is 64 or greater.
    pub fn new(x: u8) -> Option<Self> {
        (x < 64).then(|| Self(x))
    }

    /// Keeps the low 6 bits of `x`.
    pub(crate) fn from_low_bits(x: u8) -> Self {
        Self(x & 0x3f)
    }

    /// Looks up the digit for an ASCII byte. Every byte outside the
    /// alphabet, including every byte above 0x7f, yields `None`.
    pub fn from_ascii(b: u8) -> Option<Self> {
        let value = *VALUES.get(usize::from(b))?;
        u8::try_from(value).ok().map(Self)
    }

    /// Looks up the digit for a character.
    pub fn from_symbol(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::from_ascii)
    }

    /// The ASCII code of this digit's symbol.
    pub fn ascii(self) -> u8 {
        SYMBOLS[usize::from(self.0)]
    }

    pub fn symbol(self) -> char {
        char::from(self.ascii())
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

/// Whether `c` belongs to the alphabet.
pub fn is_symbol(c: char) -> bool {
    Digit::from_symbol(c).is_some()
}
