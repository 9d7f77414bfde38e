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

//! Implementation of the [`Error`] type for name-related errors.

use std::fmt;

/// An error type used to report problems constructing, decoding, and
/// encoding domain names.
///
/// Offsets carried by the variants refer to positions in the input
/// being processed: the wire buffer for [`Name::from_wire`], the text
/// for the [`FromStr`] implementation.
///
/// [`Name::from_wire`]: super::Name::from_wire
/// [`FromStr`]: std::str::FromStr
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The name has no labels. On the wire, this means the terminator
    /// was the first octet read.
    EmptyName,

    /// The label starting at the contained offset is not valid under
    /// this crate's label rules.
    InvalidLabel(usize),

    /// The name's stored representation failed the re-check performed
    /// before encoding.
    InvalidName,

    /// The input ended at the contained offset, where the length octet
    /// of the next label (or the terminator) was expected.
    MissingTerminator(usize),

    /// The name would be longer than 255 octets on the wire. The
    /// contained value is the wire length the name would have reached,
    /// terminator included.
    NameTooLong(usize),

    /// The label whose length octet is at the contained offset cannot
    /// be read in full: its length octet has the reserved upper bits
    /// set (a value over 63), or its content extends past the end of
    /// the input.
    TruncatedName(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::EmptyName => f.write_str("name has no labels"),
            Self::InvalidLabel(offset) => {
                write!(f, "invalid label at offset {}", offset)
            }
            Self::InvalidName => f.write_str("stored name representation is invalid"),
            Self::MissingTerminator(offset) => {
                write!(f, "input ended at offset {} without a name terminator", offset)
            }
            Self::NameTooLong(wire_len) => {
                write!(
                    f,
                    "name would be {} octets on the wire (the maximum is 255)",
                    wire_len
                )
            }
            Self::TruncatedName(offset) => {
                write!(f, "cannot read the label at offset {} in full", offset)
            }
        }
    }
}

impl std::error::Error for Error {}
