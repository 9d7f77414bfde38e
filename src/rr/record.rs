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

//! Implementation of the [`Record`] type, the resource-record codec.

use std::fmt;

use crate::class::Class;
use crate::name::{self, Name};
use crate::util::{read_u16, read_u32};

use super::{Rdata, Ttl, Type};

////////////////////////////////////////////////////////////////////////
// RECORDS                                                             //
////////////////////////////////////////////////////////////////////////

/// A DNS resource record ([RFC 1035 § 3.2.1]).
///
/// The `rdlength` field is kept separately from the RDATA itself, since
/// the two are allowed to disagree in an in-memory record. [`Record::to_wire`]
/// refuses to serialize such a record.
///
/// [RFC 1035 § 3.2.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.1
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    pub owner: Name,
    pub rr_type: Type,
    pub class: Class,
    pub ttl: Ttl,
    pub rdlength: u16,
    pub rdata: Box<Rdata>,
}

impl Record {
    /// Creates a new `Record`, computing the RDLENGTH field from the
    /// length of `rdata`.
    pub fn new(owner: Name, rr_type: Type, class: Class, ttl: Ttl, rdata: Box<Rdata>) -> Self {
        // NOTE: the cast is okay, since an Rdata never exceeds 65,535
        // octets.
        let rdlength = rdata.len() as u16;
        Self {
            owner,
            rr_type,
            class,
            ttl,
            rdlength,
            rdata,
        }
    }

    /// Decodes a resource record from `octets`, starting at index
    /// `start`. On success, the record and the number of octets it
    /// occupied on the wire are returned. Octets after the RDATA are
    /// ignored.
    ///
    /// The owner name must be uncompressed; name-parsing failures are
    /// reported through [`Error::InvalidOwner`]. A fixed field or the
    /// RDATA extending past the end of `octets` is an
    /// [`Error::TruncatedRecord`] whose payload is the offset at which
    /// the offending field begins. A TTL with its most significant bit
    /// set, a CLASS field of zero, and RDATA whose length does not fit
    /// the record's type are all rejected.
    pub fn from_wire(octets: &[u8], start: usize) -> Result<(Self, usize), Error> {
        let (owner, owner_len) = Name::from_wire(octets, start).map_err(Error::InvalidOwner)?;
        let type_start = start + owner_len;
        let raw_type =
            read_u16(octets, type_start).ok_or(Error::TruncatedRecord(type_start))?;
        let raw_class =
            read_u16(octets, type_start + 2).ok_or(Error::TruncatedRecord(type_start + 2))?;
        let raw_ttl =
            read_u32(octets, type_start + 4).ok_or(Error::TruncatedRecord(type_start + 4))?;
        let rdlength =
            read_u16(octets, type_start + 8).ok_or(Error::TruncatedRecord(type_start + 8))?;
        let ttl = Ttl::try_from(raw_ttl).or(Err(Error::TtlOutOfRange(raw_ttl)))?;
        let rdata_start = type_start + 10;
        let rdata_octets = octets
            .get(rdata_start..rdata_start + rdlength as usize)
            .ok_or(Error::TruncatedRecord(rdata_start))?;
        if raw_class == 0 {
            return Err(Error::InvalidClass);
        }
        let rr_type = Type::from(raw_type);
        // NOTE: the unwrap() is okay, since RDLENGTH is a 16-bit field,
        // so the RDATA cannot exceed 65,535 octets.
        let rdata: &Rdata = rdata_octets.try_into().unwrap();
        if !rdata.validate_for_type(rr_type) {
            return Err(Error::InvalidRdataForType(rr_type, rdata.len()));
        }
        let record = Self {
            owner,
            rr_type,
            class: Class::from(raw_class),
            ttl,
            rdlength,
            rdata: rdata.to_owned(),
        };
        Ok((record, owner_len + 10 + rdlength as usize))
    }

    /// Serializes this record.
    ///
    /// Before any octets are produced, the record is checked: `rdlength`
    /// must equal the actual RDATA length ([`Error::RdlengthMismatch`]),
    /// the RDATA must fit the record's type
    /// ([`Error::InvalidRdataForType`]), and the class must not be zero
    /// ([`Error::InvalidClass`]). The TTL needs no check here; the
    /// [`Ttl`] type cannot hold an out-of-range value.
    pub fn to_wire(&self) -> Result<Vec<u8>, Error> {
        if usize::from(self.rdlength) != self.rdata.len() {
            return Err(Error::RdlengthMismatch(self.rdlength, self.rdata.len()));
        } else if !self.rdata.validate_for_type(self.rr_type) {
            return Err(Error::InvalidRdataForType(self.rr_type, self.rdata.len()));
        } else if u16::from(self.class) == 0 {
            return Err(Error::InvalidClass);
        }
        let owner = self.owner.to_wire().map_err(Error::InvalidOwner)?;
        let mut wire = Vec::with_capacity(owner.len() + 10 + self.rdata.len());
        wire.extend_from_slice(&owner);
        wire.extend_from_slice(&u16::from(self.rr_type).to_be_bytes());
        wire.extend_from_slice(&u16::from(self.class).to_be_bytes());
        wire.extend_from_slice(&u32::from(self.ttl).to_be_bytes());
        wire.extend_from_slice(&self.rdlength.to_be_bytes());
        wire.extend_from_slice(self.rdata.octets());
        Ok(wire)
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// Errors that [`Record`] decoding and encoding may produce.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The CLASS field is zero, a value reserved in every context.
    InvalidClass,

    /// The owner name could not be decoded or encoded.
    InvalidOwner(name::Error),

    /// The RDATA does not have the shape that the record's type
    /// requires. The payload gives the type and the RDATA length seen.
    InvalidRdataForType(Type, usize),

    /// The RDLENGTH field does not match the actual RDATA length. The
    /// payload gives the declared and the actual length.
    RdlengthMismatch(u16, usize),

    /// The input ended before the record did. The payload is the offset
    /// at which the cut-off field begins.
    TruncatedRecord(usize),

    /// The TTL field has its most significant bit set. The payload is
    /// the raw 32-bit value.
    TtlOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidClass => f.write_str("the class value 0 is reserved"),
            Self::InvalidOwner(err) => write!(f, "invalid owner name: {err}"),
            Self::InvalidRdataForType(rr_type, len) => {
                write!(f, "RDATA of {len} octets is not valid for {rr_type} records")
            }
            Self::RdlengthMismatch(rdlength, len) => write!(
                f,
                "declared RDLENGTH {rdlength} does not match the RDATA length {len}",
            ),
            Self::TruncatedRecord(offset) => {
                write!(f, "cannot read the record field at offset {offset} in full")
            }
            Self::TtlOutOfRange(value) => {
                write!(f, "TTL value {value} has its most significant bit set")
            }
        }
    }
}

impl std::error::Error for Error {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
