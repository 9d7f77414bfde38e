// Copyright 2026 the dnswire authors.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Crate-private helpers.

/// A wrapper around [`str`] references whose [`PartialEq`] and [`Eq`]
/// implementations are ASCII-case-insensitive. The `FromStr`
/// implementations in this crate use it to match mnemonics.
pub struct Caseless<'a>(pub &'a str);

impl PartialEq for Caseless<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl Eq for Caseless<'_> {}

/// Returns the two lower-case ASCII hex digits encoding `octet`, most
/// significant first.
pub fn ascii_hex_digits(octet: u8) -> [char; 2] {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    [
        char::from(DIGITS[usize::from(octet >> 4)]),
        char::from(DIGITS[usize::from(octet & 0xf)]),
    ]
}

/// Reads a network-byte-order `u16` at index `start` of `octets`, if
/// enough octets are present.
pub fn read_u16(octets: &[u8], start: usize) -> Option<u16> {
    let array = octets.get(start..start + 2)?.try_into().unwrap();
    Some(u16::from_be_bytes(array))
}

/// Reads a network-byte-order `u32` at index `start` of `octets`, if
/// enough octets are present.
pub fn read_u32(octets: &[u8], start: usize) -> Option<u32> {
    let array = octets.get(start..start + 4)?.try_into().unwrap();
    Some(u32::from_be_bytes(array))
}
