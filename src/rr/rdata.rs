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

//! Implementation of the [`Rdata`] type.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use super::Type;
use crate::util::ascii_hex_digits;

////////////////////////////////////////////////////////////////////////
// RDATA TYPE                                                          //
////////////////////////////////////////////////////////////////////////

/// A type for record RDATA.
///
/// The RDATA of a record is limited to 65,535 octets. The `Rdata` type
/// is a wrapper over `[u8]` that can only be constructed if the
/// underlying data has a valid length.
///
/// This crate never decomposes RDATA into its type-specific internal
/// structure; embedded fields (including embedded domain names, e.g. in
/// MX records) are the caller's concern. Consequently equality is
/// bitwise, which is also the comparison [RFC 3597 § 6] prescribes for
/// RRs of unknown type.
///
/// [RFC 3597 § 6]: https://datatracker.ietf.org/doc/html/rfc3597#section-6
#[repr(transparent)]
pub struct Rdata {
    octets: [u8],
}

impl Rdata {
    /// Converts a `&[u8]` to a `&Rdata`, without checking the length;
    /// for internal use only.
    pub(super) fn from_unchecked(octets: &[u8]) -> &Self {
        unsafe { &*(octets as *const [u8] as *const Self) }
    }

    /// Returns an empty `&Rdata`.
    pub fn empty() -> &'static Self {
        Self::from_unchecked(&[])
    }

    /// Checks this `Rdata` against the shape rule for `rr_type`, if
    /// there is one. A RDATA must be exactly four octets long (an IPv4
    /// address). NULL RDATA may have any length up to the 65,535-octet
    /// cap, and every other type is treated as opaque here.
    pub fn validate_for_type(&self, rr_type: Type) -> bool {
        match rr_type {
            Type::A => self.len() == 4,
            // For NULL, there is nothing to check!
            _ => true,
        }
    }

    /// Returns whether the [`Rdata`] is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns the length of the [`Rdata`].
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns the underlying octet slice.
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }
}

impl<'a> TryFrom<&'a [u8]> for &'a Rdata {
    type Error = RdataTooLongError;

    fn try_from(octets: &'a [u8]) -> Result<Self, Self::Error> {
        if octets.len() > (u16::MAX as usize) {
            Err(RdataTooLongError)
        } else {
            Ok(Rdata::from_unchecked(octets))
        }
    }
}

impl<'a, const N: usize> TryFrom<&'a [u8; N]> for &'a Rdata {
    type Error = RdataTooLongError;

    fn try_from(octets: &'a [u8; N]) -> Result<Self, Self::Error> {
        octets[..].try_into()
    }
}

impl AsRef<[u8]> for Rdata {
    fn as_ref(&self) -> &[u8] {
        &self.octets
    }
}

impl PartialEq for Rdata {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl Eq for Rdata {}

impl Hash for Rdata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets.hash(state)
    }
}

impl ToOwned for Rdata {
    type Owned = Box<Self>;

    fn to_owned(&self) -> Self::Owned {
        let boxed_octets: Box<[u8]> = self.octets.into();
        unsafe { Box::from_raw(Box::into_raw(boxed_octets) as *mut Rdata) }
    }
}

impl Clone for Box<Rdata> {
    fn clone(&self) -> Self {
        self.as_ref().to_owned()
    }
}

impl TryFrom<Vec<u8>> for Box<Rdata> {
    type Error = RdataTooLongError;

    fn try_from(vec: Vec<u8>) -> Result<Self, Self::Error> {
        if vec.len() > (u16::MAX as usize) {
            Err(RdataTooLongError)
        } else {
            let boxed_octets: Box<[u8]> = vec.into_boxed_slice();
            unsafe { Ok(Box::from_raw(Box::into_raw(boxed_octets) as *mut Rdata)) }
        }
    }
}

impl fmt::Display for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // We output using the RFC 3597 format for RDATA of unknown
        // type.
        write!(f, "\\# {}", self.len())?;
        if !self.is_empty() {
            f.write_char(' ')?;
            for octet in self.octets.iter() {
                let [high, low] = ascii_hex_digits(*octet);
                f.write_char(high)?;
                f.write_char(low)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// An error signaling that a `&[u8]` cannot be converted to an `&Rdata`
/// because it is too long.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RdataTooLongError;

impl fmt::Display for RdataTooLongError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("RDATA is too long")
    }
}

impl std::error::Error for RdataTooLongError {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_checks_the_length_cap() {
        let at_cap = vec![0; u16::MAX as usize];
        let over_cap = vec![0; u16::MAX as usize + 1];
        assert!(<&Rdata>::try_from(at_cap.as_slice()).is_ok());
        assert_eq!(
            <&Rdata>::try_from(over_cap.as_slice()),
            Err(RdataTooLongError)
        );
        assert!(Box::<Rdata>::try_from(at_cap).is_ok());
        assert_eq!(Box::<Rdata>::try_from(over_cap), Err(RdataTooLongError));
    }

    #[test]
    fn validate_for_type_checks_a_rdata() {
        let four: &Rdata = b"\x7f\x00\x00\x01".try_into().unwrap();
        let three: &Rdata = b"\x7f\x00\x00".try_into().unwrap();
        let five: &Rdata = b"\x7f\x00\x00\x01\x01".try_into().unwrap();
        assert!(four.validate_for_type(Type::A));
        assert!(!three.validate_for_type(Type::A));
        assert!(!five.validate_for_type(Type::A));
    }

    #[test]
    fn validate_for_type_accepts_any_null_rdata() {
        let long = [0xff; 512];
        let rdatas: &[&Rdata] = &[
            Rdata::empty(),
            b"\x00".try_into().unwrap(),
            long[..].try_into().unwrap(),
        ];
        for rdata in rdatas {
            assert!(rdata.validate_for_type(Type::NULL));
        }
    }

    #[test]
    fn validate_for_type_treats_other_types_as_opaque() {
        // MX RDATA has internal structure (a preference and an exchange
        // name), but this codec does not look inside it.
        let bogus_mx: &Rdata = b"\x12".try_into().unwrap();
        assert!(bogus_mx.validate_for_type(Type::MX));
        assert!(bogus_mx.validate_for_type(Type::from(0xff00)));
    }

    #[test]
    fn display_uses_rfc3597_format() {
        let rdata: &Rdata = b"\x0a\x00\x00\x1c".try_into().unwrap();
        assert_eq!(rdata.to_string(), "\\# 4 0a00001c");
        assert_eq!(Rdata::empty().to_string(), "\\# 0");
    }
}
