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

//! Provides the [`Ttl`] structure for DNS RR TTLs.

use std::fmt;

////////////////////////////////////////////////////////////////////////
// TTLS                                                                //
////////////////////////////////////////////////////////////////////////

/// The time to live (TTL) of a DNS record.
///
/// There are contradictory definitions of the TTL field in [RFC 1035]
/// (see [erratum 2130]), so [RFC 2181 § 8] clarified that TTL values
/// are unsigned integers between 0 and 2³¹ - 1, inclusive. Because the
/// TTL field is 32 bits wide, the most significant bit is zero.
///
/// This type wraps `u32` to implement [RFC 2181 § 8]. The [`TryFrom`]
/// implementation is the only way to instantiate a `Ttl`, and it
/// rejects values with the most significant bit set; this crate treats
/// such a wire value as a malformed record rather than clamping it.
///
/// [Erratum 2130]: https://www.rfc-editor.org/errata/eid2130
/// [RFC 1035]: https://datatracker.ietf.org/doc/html/rfc1035
/// [RFC 2181 § 8]: https://datatracker.ietf.org/doc/html/rfc2181#section-8
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Ttl(u32);

impl TryFrom<u32> for Ttl {
    type Error = TtlOutOfRangeError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        if raw > i32::MAX as u32 {
            Err(TtlOutOfRangeError)
        } else {
            Ok(Self(raw))
        }
    }
}

impl From<Ttl> for u32 {
    fn from(ttl: Ttl) -> Self {
        ttl.0
    }
}

impl fmt::Debug for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// An error signaling that a `u32` cannot be converted to a [`Ttl`]
/// because its most significant bit is set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TtlOutOfRangeError;

impl fmt::Display for TtlOutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TTL value has its most significant bit set")
    }
}

impl std::error::Error for TtlOutOfRangeError {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_ttls_are_accepted() {
        let i32_max = i32::MAX as u32;
        assert_eq!(u32::from(Ttl::try_from(0).unwrap()), 0);
        assert_eq!(u32::from(Ttl::try_from(23).unwrap()), 23);
        assert_eq!(u32::from(Ttl::try_from(i32_max).unwrap()), i32_max);
    }

    #[test]
    fn large_ttls_are_rejected() {
        assert_eq!(
            Ttl::try_from(i32::MAX as u32 + 1),
            Err(TtlOutOfRangeError)
        );
        assert_eq!(Ttl::try_from(u32::MAX), Err(TtlOutOfRangeError));
    }
}
