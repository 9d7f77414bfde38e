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

//! Implementation of types relating to DNS questions.

use std::fmt;
use std::str::FromStr;

use crate::class::Class;
use crate::name::{self, Name};
use crate::rr::Type;
use crate::util::{read_u16, Caseless};

////////////////////////////////////////////////////////////////////////
// QUESTIONS                                                           //
////////////////////////////////////////////////////////////////////////

/// The question of a DNS query.
///
/// Defined in [RFC 1035 § 4.1.2], a DNS question includes
///
/// * the QNAME, which is the domain name whose records are being
///   queried;
/// * the [QTYPE](Qtype), which specifies what types of records are
///   desired; and
/// * the [QCLASS](Qclass), which specifies which DNS class(es) to
///   search.
///
/// While RFC 1035 does not rule out having multiple questions per
/// message, in practice only one question per message is used.
///
/// [RFC 1035 § 4.1.2]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.2
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    pub qname: Name,
    pub qtype: Qtype,
    pub qclass: Qclass,
}

impl Question {
    /// Decodes a question from `octets`, starting at index `start`. On
    /// success, the question and the number of octets it occupied on
    /// the wire are returned. Octets after the QCLASS are ignored.
    ///
    /// The QNAME must be uncompressed; name-parsing failures are
    /// reported through [`Error::InvalidQname`]. QTYPE and QCLASS
    /// values of zero are reserved and rejected.
    pub fn from_wire(octets: &[u8], start: usize) -> Result<(Self, usize), Error> {
        let (qname, qname_len) = Name::from_wire(octets, start).map_err(Error::InvalidQname)?;
        let qtype_start = start + qname_len;
        let raw_qtype =
            read_u16(octets, qtype_start).ok_or(Error::TruncatedQuestion(qtype_start))?;
        let raw_qclass =
            read_u16(octets, qtype_start + 2).ok_or(Error::TruncatedQuestion(qtype_start + 2))?;
        if raw_qtype == 0 {
            return Err(Error::InvalidQtype);
        } else if raw_qclass == 0 {
            return Err(Error::InvalidQclass);
        }
        let question = Self {
            qname,
            qtype: Qtype::from(raw_qtype),
            qclass: Qclass::from(raw_qclass),
        };
        Ok((question, qname_len + 4))
    }

    /// Serializes this question. QTYPE and QCLASS values of zero are
    /// rejected before any octets are produced.
    pub fn to_wire(&self) -> Result<Vec<u8>, Error> {
        if u16::from(self.qtype) == 0 {
            return Err(Error::InvalidQtype);
        } else if u16::from(self.qclass) == 0 {
            return Err(Error::InvalidQclass);
        }
        let mut wire = self.qname.to_wire().map_err(Error::InvalidQname)?;
        wire.extend_from_slice(&u16::from(self.qtype).to_be_bytes());
        wire.extend_from_slice(&u16::from(self.qclass).to_be_bytes());
        Ok(wire)
    }
}

////////////////////////////////////////////////////////////////////////
// QTYPES                                                              //
////////////////////////////////////////////////////////////////////////

/// The QTYPE of a DNS [question](Question).
///
/// The QTYPE determines what type of DNS records are desired. QTYPE
/// values include data TYPEs (see [`Type`]), but may also include
/// other values that indicate that a range of TYPEs are desired
/// (e.g. [MAILB](Qtype::MAILB) and [*](Qtype::ANY)) or ask for zone
/// transfers (e.g. [AXFR](Qtype::AXFR)).
///
/// A QTYPE is represented on the wire as an unsigned 16-bit integer.
/// Hence this is basically a wrapper around [`u16`] with nice
/// [`Debug`](fmt::Debug), [`Display`](fmt::Display), and [`FromStr`]
/// implementations. In addition, constants for the QTYPEs of
/// [RFC 1035 § 3.2.3] not covered by [`Type`] are provided.
///
/// [RFC 1035 § 3.2.3]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.2.3
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct Qtype(u16);

impl Qtype {
    pub const AXFR: Self = Self(252);
    pub const MAILB: Self = Self(253);
    pub const MAILA: Self = Self(254);
    pub const ANY: Self = Self(255);
}

impl From<u16> for Qtype {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Qtype> for u16 {
    fn from(qtype: Qtype) -> Self {
        qtype.0
    }
}

impl From<Type> for Qtype {
    fn from(rr_type: Type) -> Self {
        Self(rr_type.into())
    }
}

impl fmt::Display for Qtype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::AXFR => f.write_str("AXFR"),
            Self::MAILB => f.write_str("MAILB"),
            Self::MAILA => f.write_str("MAILA"),
            Self::ANY => f.write_str("*"),
            _ => Type::from(*self).fmt(f),
        }
    }
}

impl fmt::Debug for Qtype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Qtype {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match Caseless(text) {
            Caseless("AXFR") => Ok(Self::AXFR),
            Caseless("MAILB") => Ok(Self::MAILB),
            Caseless("MAILA") => Ok(Self::MAILA),
            Caseless("ANY") => Ok(Self::ANY),
            Caseless("*") => Ok(Self::ANY),
            _ => Type::from_str(text).map(Into::into),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// QCLASSES                                                            //
////////////////////////////////////////////////////////////////////////

/// The QCLASS of a DNS [question](Question).
///
/// The QCLASS determines which DNS class(es) to search for records.
/// This may be a defined DNS [CLASS](Class), or it may be the wildcard
/// [*](Qclass::ANY) that asks for records of every CLASS.
///
/// A QCLASS is represented on the wire as an unsigned 16-bit integer.
/// Hence this is basically a wrapper around [`u16`] with nice
/// [`Debug`](fmt::Debug), [`Display`](fmt::Display), and [`FromStr`]
/// implementations.
#[derive(Copy, Clone, Eq, Hash, PartialEq)]
pub struct Qclass(u16);

impl Qclass {
    pub const ANY: Self = Self(255);
}

impl From<u16> for Qclass {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Qclass> for u16 {
    fn from(qclass: Qclass) -> Self {
        qclass.0
    }
}

impl From<Class> for Qclass {
    fn from(class: Class) -> Self {
        Self(class.into())
    }
}

impl fmt::Display for Qclass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::ANY => f.write_str("*"),
            _ => Class::from(*self).fmt(f),
        }
    }
}

impl fmt::Debug for Qclass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Qclass {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match Caseless(text) {
            Caseless("ANY") => Ok(Self::ANY),
            Caseless("*") => Ok(Self::ANY),
            _ => Class::from_str(text).map(Into::into),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// Errors that [`Question`] decoding and encoding may produce.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The QCLASS field is zero, a value reserved in every context.
    InvalidQclass,

    /// The QNAME could not be decoded or encoded.
    InvalidQname(name::Error),

    /// The QTYPE field is zero, a value reserved in every context.
    InvalidQtype,

    /// The input ended before the question did. The payload is the
    /// offset at which the cut-off field begins.
    TruncatedQuestion(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidQclass => f.write_str("the QCLASS value 0 is reserved"),
            Self::InvalidQname(err) => write!(f, "invalid QNAME: {err}"),
            Self::InvalidQtype => f.write_str("the QTYPE value 0 is reserved"),
            Self::TruncatedQuestion(offset) => {
                write!(f, "cannot read the question field at offset {offset} in full")
            }
        }
    }
}

impl std::error::Error for Error {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use super::*;

    static QUESTION_WIRE: &[u8] = &[4, b't', b'e', b's', b't', 0, 0, 1, 0, 1];

    lazy_static! {
        static ref QUESTION: Question = Question {
            qname: "test".parse().unwrap(),
            qtype: Type::A.into(),
            qclass: Class::IN.into(),
        };
    }

    #[test]
    fn from_wire_decodes_a_minimal_question() {
        let (question, len) = Question::from_wire(QUESTION_WIRE, 0).unwrap();
        assert_eq!(question, *QUESTION);
        assert_eq!(len, QUESTION_WIRE.len());
    }

    #[test]
    fn to_wire_serializes_a_question() {
        assert_eq!(QUESTION.to_wire().unwrap(), QUESTION_WIRE);
    }

    #[test]
    fn from_wire_honors_the_start_index() {
        let mut wire = vec![0xff; 3];
        wire.extend_from_slice(QUESTION_WIRE);
        let (question, len) = Question::from_wire(&wire, 3).unwrap();
        assert_eq!(question, *QUESTION);
        assert_eq!(len, QUESTION_WIRE.len());
    }

    #[test]
    fn from_wire_ignores_octets_after_the_question() {
        let mut wire = QUESTION_WIRE.to_vec();
        wire.extend_from_slice(b"\x03www");
        let (question, len) = Question::from_wire(&wire, 0).unwrap();
        assert_eq!(question, *QUESTION);
        assert_eq!(len, QUESTION_WIRE.len());
    }

    #[test]
    fn from_wire_wraps_qname_errors() {
        assert_eq!(
            Question::from_wire(b"\x00\x00\x01\x00\x01", 0),
            Err(Error::InvalidQname(name::Error::EmptyName)),
        );
    }

    #[test]
    fn from_wire_rejects_truncated_questions() {
        // The QNAME ends at offset 6.
        for (end, field_start) in [(6, 6), (7, 6), (8, 8), (9, 8)] {
            assert_eq!(
                Question::from_wire(&QUESTION_WIRE[..end], 0),
                Err(Error::TruncatedQuestion(field_start)),
                "cut at {end}",
            );
        }
    }

    #[test]
    fn from_wire_rejects_zero_qtype_and_qclass() {
        let mut wire = QUESTION_WIRE.to_vec();
        wire[7] = 0;
        assert_eq!(Question::from_wire(&wire, 0), Err(Error::InvalidQtype));
        wire[7] = 1;
        wire[9] = 0;
        assert_eq!(Question::from_wire(&wire, 0), Err(Error::InvalidQclass));
    }

    #[test]
    fn to_wire_rejects_zero_qtype_and_qclass() {
        let mut question = QUESTION.clone();
        question.qtype = Qtype::from(0);
        assert_eq!(question.to_wire(), Err(Error::InvalidQtype));
        question.qtype = Type::A.into();
        question.qclass = Qclass::from(0);
        assert_eq!(question.to_wire(), Err(Error::InvalidQclass));
    }

    #[test]
    fn qtype_text_forms() {
        assert_eq!(Qtype::ANY.to_string(), "*");
        assert_eq!(Qtype::from(Type::MX).to_string(), "MX");
        assert_eq!(Qtype::from(64000).to_string(), "TYPE64000");
        assert_eq!("axfr".parse(), Ok(Qtype::AXFR));
        assert_eq!("*".parse(), Ok(Qtype::ANY));
        assert_eq!("cname".parse(), Ok(Qtype::from(Type::CNAME)));
    }

    #[test]
    fn qclass_text_forms() {
        assert_eq!(Qclass::ANY.to_string(), "*");
        assert_eq!(Qclass::from(Class::IN).to_string(), "IN");
        assert_eq!(Qclass::from(64000).to_string(), "CLASS64000");
        assert_eq!("any".parse(), Ok(Qclass::ANY));
        assert_eq!("ch".parse(), Ok(Qclass::from(Class::CH)));
    }
}
