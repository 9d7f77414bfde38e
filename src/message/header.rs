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

//! Implementation of the [`Header`] type, the message-header codec.

use std::fmt;

use super::constants::*;
use super::{Opcode, Rcode};

////////////////////////////////////////////////////////////////////////
// HEADERS                                                             //
////////////////////////////////////////////////////////////////////////

/// The header of a DNS message ([RFC 1035 § 4.1.1]).
///
/// The Z field is not represented. It must be zero on the wire, so
/// [`Header::from_wire`] rejects input with any Z bit set, and
/// [`Header::to_wire`] always emits it as zero.
///
/// [RFC 1035 § 4.1.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub rcode: Rcode,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Decodes a message header from `octets`, which must be exactly 12
    /// octets long.
    ///
    /// After unpacking, the header is validated: a nonzero Z field, a
    /// reserved OPCODE or RCODE value, and the AA bit in a message that
    /// is not a response are all rejected, in that order.
    pub fn from_wire(octets: &[u8]) -> Result<Self, Error> {
        if octets.len() != HEADER_SIZE {
            return Err(Error::InvalidLength(octets.len()));
        }
        let z = (octets[Z_BYTE] & Z_MASK) >> Z_SHIFT;
        if z != 0 {
            return Err(Error::ReservedZField(z));
        }
        let raw_opcode = (octets[OPCODE_BYTE] & OPCODE_MASK) >> OPCODE_SHIFT;
        let opcode = Opcode::try_from(raw_opcode).or(Err(Error::ReservedOpcode(raw_opcode)))?;
        let raw_rcode = octets[RCODE_BYTE] & RCODE_MASK;
        let rcode = Rcode::try_from(raw_rcode).or(Err(Error::ReservedRcode(raw_rcode)))?;
        let qr = octets[QR_BYTE] & QR_MASK != 0;
        let aa = octets[AA_BYTE] & AA_MASK != 0;
        if !qr && aa {
            return Err(Error::InconsistentAuthority);
        }
        // NOTE: the unwraps are okay, since we have already checked the
        // length of the input.
        Ok(Self {
            id: u16::from_be_bytes(octets[ID_START..ID_END].try_into().unwrap()),
            qr,
            opcode,
            aa,
            tc: octets[TC_BYTE] & TC_MASK != 0,
            rd: octets[RD_BYTE] & RD_MASK != 0,
            ra: octets[RA_BYTE] & RA_MASK != 0,
            rcode,
            qdcount: u16::from_be_bytes(octets[QDCOUNT_START..QDCOUNT_END].try_into().unwrap()),
            ancount: u16::from_be_bytes(octets[ANCOUNT_START..ANCOUNT_END].try_into().unwrap()),
            nscount: u16::from_be_bytes(octets[NSCOUNT_START..NSCOUNT_END].try_into().unwrap()),
            arcount: u16::from_be_bytes(octets[ARCOUNT_START..ARCOUNT_END].try_into().unwrap()),
        })
    }

    /// Packs this header into its 12-octet wire form.
    ///
    /// The OPCODE and RCODE ranges are guaranteed by the field types,
    /// so the only validation left to perform here is the QR/AA
    /// consistency check; a header with the AA bit set in a message
    /// that is not a response is refused.
    pub fn to_wire(&self) -> Result<[u8; HEADER_SIZE], Error> {
        if !self.qr && self.aa {
            return Err(Error::InconsistentAuthority);
        }
        let mut octets = [0; HEADER_SIZE];
        octets[ID_START..ID_END].copy_from_slice(&self.id.to_be_bytes());
        if self.qr {
            octets[QR_BYTE] |= QR_MASK;
        }
        octets[OPCODE_BYTE] |= u8::from(self.opcode) << OPCODE_SHIFT;
        if self.aa {
            octets[AA_BYTE] |= AA_MASK;
        }
        if self.tc {
            octets[TC_BYTE] |= TC_MASK;
        }
        if self.rd {
            octets[RD_BYTE] |= RD_MASK;
        }
        if self.ra {
            octets[RA_BYTE] |= RA_MASK;
        }
        octets[RCODE_BYTE] |= u8::from(self.rcode);
        octets[QDCOUNT_START..QDCOUNT_END].copy_from_slice(&self.qdcount.to_be_bytes());
        octets[ANCOUNT_START..ANCOUNT_END].copy_from_slice(&self.ancount.to_be_bytes());
        octets[NSCOUNT_START..NSCOUNT_END].copy_from_slice(&self.nscount.to_be_bytes());
        octets[ARCOUNT_START..ARCOUNT_END].copy_from_slice(&self.arcount.to_be_bytes());
        Ok(octets)
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// Errors that [`Header`] decoding and encoding may produce.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The AA bit is set, but the QR bit is not. Only responses carry
    /// authority.
    InconsistentAuthority,

    /// The input is not exactly 12 octets long. The payload is the
    /// length observed.
    InvalidLength(usize),

    /// The OPCODE field holds a reserved value (3 through 15).
    ReservedOpcode(u8),

    /// The RCODE field holds a reserved value (6 through 15).
    ReservedRcode(u8),

    /// The Z field is nonzero.
    ReservedZField(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InconsistentAuthority => {
                f.write_str("the AA bit is set in a message that is not a response")
            }
            Self::InvalidLength(len) => {
                write!(f, "a message header is 12 octets, but {len} were provided")
            }
            Self::ReservedOpcode(value) => write!(f, "OPCODE value {value} is reserved"),
            Self::ReservedRcode(value) => write!(f, "RCODE value {value} is reserved"),
            Self::ReservedZField(value) => {
                write!(f, "the Z field is {value}, but it must be zero")
            }
        }
    }
}

impl std::error::Error for Error {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
