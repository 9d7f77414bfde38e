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

//! Wire-format reading and writing of complete [`Message`]s.

use std::fmt;

use log::debug;

use super::constants::HEADER_SIZE;
use super::{header, question, Header, Message, Question};
use crate::rr::{record, Record};

////////////////////////////////////////////////////////////////////////
// SECTIONS                                                            //
////////////////////////////////////////////////////////////////////////

/// A section of a DNS message, named in decoding errors to say where a
/// component failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Question => f.write_str("question"),
            Self::Answer => f.write_str("answer"),
            Self::Authority => f.write_str("authority"),
            Self::Additional => f.write_str("additional"),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// MESSAGE READING                                                     //
////////////////////////////////////////////////////////////////////////

/// Decodes a complete DNS message. This is the crate's boundary with
/// untrusted input, so rejected messages are logged at `debug!` level.
pub(super) fn parse_message(octets: &[u8]) -> Result<Message, Error> {
    match try_parse_message(octets) {
        Ok(message) => Ok(message),
        Err(err) => {
            debug!("rejected DNS message: {err}");
            Err(err)
        }
    }
}

fn try_parse_message(octets: &[u8]) -> Result<Message, Error> {
    let header =
        Header::from_wire(octets.get(..HEADER_SIZE).unwrap_or(octets)).map_err(Error::Header)?;
    let mut cursor = HEADER_SIZE;
    let mut questions = Vec::new();
    for index in 0..header.qdcount {
        let (question, len) = Question::from_wire(octets, cursor)
            .map_err(|err| Error::Question(usize::from(index), err))?;
        questions.push(question);
        cursor += len;
    }
    let answers = parse_records(octets, &mut cursor, header.ancount, Section::Answer)?;
    let authorities = parse_records(octets, &mut cursor, header.nscount, Section::Authority)?;
    let additionals = parse_records(octets, &mut cursor, header.arcount, Section::Additional)?;
    if cursor != octets.len() {
        return Err(Error::TrailingOctets(octets.len() - cursor));
    }
    Ok(Message {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

fn parse_records(
    octets: &[u8],
    cursor: &mut usize,
    count: u16,
    section: Section,
) -> Result<Vec<Record>, Error> {
    // The counts are attacker-controlled, so we do not trust them for
    // preallocation; a lying count fails at its first missing record.
    let mut records = Vec::new();
    for index in 0..count {
        let (record, len) = Record::from_wire(octets, *cursor)
            .map_err(|err| Error::Record(section, usize::from(index), err))?;
        records.push(record);
        *cursor += len;
    }
    Ok(records)
}

////////////////////////////////////////////////////////////////////////
// MESSAGE WRITING                                                     //
////////////////////////////////////////////////////////////////////////

/// Serializes a complete DNS message. Every header count must match
/// the length of its section.
pub(super) fn serialize_message(message: &Message) -> Result<Vec<u8>, Error> {
    let sections = [
        (Section::Question, message.questions.len(), message.header.qdcount),
        (Section::Answer, message.answers.len(), message.header.ancount),
        (Section::Authority, message.authorities.len(), message.header.nscount),
        (Section::Additional, message.additionals.len(), message.header.arcount),
    ];
    for (section, len, count) in sections {
        if len != usize::from(count) {
            return Err(Error::CountMismatch(section));
        }
    }
    let mut wire = Vec::new();
    wire.extend_from_slice(&message.header.to_wire().map_err(Error::Header)?);
    for (index, question) in message.questions.iter().enumerate() {
        let question_wire = question
            .to_wire()
            .map_err(|err| Error::Question(index, err))?;
        wire.extend_from_slice(&question_wire);
    }
    let record_sections = [
        (Section::Answer, &message.answers),
        (Section::Authority, &message.authorities),
        (Section::Additional, &message.additionals),
    ];
    for (section, records) in record_sections {
        for (index, record) in records.iter().enumerate() {
            let record_wire = record
                .to_wire()
                .map_err(|err| Error::Record(section, index, err))?;
            wire.extend_from_slice(&record_wire);
        }
    }
    Ok(wire)
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// Errors that [`Message`] decoding and encoding may produce.
/// Component failures carry the section and the index of the component
/// that they arose in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// A header count does not match the length of its section.
    CountMismatch(Section),

    /// The header could not be decoded or encoded.
    Header(header::Error),

    /// A question could not be decoded or encoded.
    Question(usize, question::Error),

    /// A resource record could not be decoded or encoded.
    Record(Section, usize, record::Error),

    /// Octets remain after the final component. The payload is the
    /// number of octets left over.
    TrailingOctets(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CountMismatch(section) => write!(
                f,
                "the header count for the {section} section does not match its length",
            ),
            Self::Header(err) => write!(f, "invalid header: {err}"),
            Self::Question(index, err) => write!(f, "invalid question at index {index}: {err}"),
            Self::Record(section, index, err) => {
                write!(f, "invalid {section} record at index {index}: {err}")
            }
            Self::TrailingOctets(count) => {
                write!(f, "{count} octets remain after the final component")
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

    use super::super::{Opcode, Rcode};
    use super::*;
    use crate::class::Class;
    use crate::rr::{Rdata, Ttl, Type};

    // A query for example.test A records and an authoritative response
    // carrying one answer. The wire forms are laid out by hand;
    // offsets 0..12 are the header, 12..30 the question, and (in the
    // response) 30..58 the answer record.
    static QUERY_WIRE: &[u8] = b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                                 \x07example\x04test\x00\x00\x01\x00\x01";
    static RESPONSE_WIRE: &[u8] = b"\x12\x34\x85\x80\x00\x01\x00\x01\x00\x00\x00\x00\
                                    \x07example\x04test\x00\x00\x01\x00\x01\
                                    \x07example\x04test\x00\x00\x01\x00\x01\
                                    \x00\x00\x0e\x10\x00\x04\x7f\x00\x00\x01";

    lazy_static! {
        static ref QUERY: Message = Message {
            header: Header {
                id: 0x1234,
                qr: false,
                opcode: Opcode::Query,
                aa: false,
                tc: false,
                rd: true,
                ra: false,
                rcode: Rcode::NoError,
                qdcount: 1,
                ancount: 0,
                nscount: 0,
                arcount: 0,
            },
            questions: vec![Question {
                qname: "example.test".parse().unwrap(),
                qtype: Type::A.into(),
                qclass: Class::IN.into(),
            }],
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        };
        static ref RESPONSE: Message = Message {
            header: Header {
                qr: true,
                aa: true,
                ra: true,
                ancount: 1,
                ..QUERY.header
            },
            answers: vec![Record::new(
                "example.test".parse().unwrap(),
                Type::A,
                Class::IN,
                Ttl::try_from(3600).unwrap(),
                <&Rdata>::try_from(b"\x7f\x00\x00\x01").unwrap().to_owned(),
            )],
            ..QUERY.clone()
        };
    }

    #[test]
    fn from_wire_decodes_a_query() {
        assert_eq!(Message::from_wire(QUERY_WIRE), Ok(QUERY.clone()));
    }

    #[test]
    fn from_wire_decodes_a_response() {
        assert_eq!(Message::from_wire(RESPONSE_WIRE), Ok(RESPONSE.clone()));
    }

    #[test]
    fn to_wire_serializes_messages() {
        assert_eq!(QUERY.to_wire().unwrap(), QUERY_WIRE);
        assert_eq!(RESPONSE.to_wire().unwrap(), RESPONSE_WIRE);
    }

    #[test]
    fn accepted_wire_input_reencodes_byte_for_byte() {
        let message = Message::from_wire(RESPONSE_WIRE).unwrap();
        assert_eq!(message.to_wire().unwrap(), RESPONSE_WIRE);
    }

    #[test]
    fn from_wire_accepts_a_bare_header() {
        let wire = [0; HEADER_SIZE];
        let message = Message::from_wire(&wire).unwrap();
        assert!(message.questions.is_empty());
        assert!(message.answers.is_empty());
        assert_eq!(message.to_wire().unwrap(), wire);
    }

    #[test]
    fn from_wire_wraps_header_errors() {
        assert_eq!(
            Message::from_wire(&QUERY_WIRE[..5]),
            Err(Error::Header(header::Error::InvalidLength(5))),
        );
    }

    #[test]
    fn from_wire_wraps_question_errors() {
        assert_eq!(
            Message::from_wire(&QUERY_WIRE[..29]),
            Err(Error::Question(0, question::Error::TruncatedQuestion(28))),
        );
    }

    #[test]
    fn from_wire_wraps_record_errors() {
        let mut wire = RESPONSE_WIRE.to_vec();
        wire[48] |= 0x80;
        assert_eq!(
            Message::from_wire(&wire),
            Err(Error::Record(
                Section::Answer,
                0,
                record::Error::TtlOutOfRange(0x8000_0e10),
            )),
        );
    }

    #[test]
    fn from_wire_reports_the_failing_section_and_index() {
        // Promise two answers and an authority record, then cut the
        // input off after the first answer.
        let mut wire = RESPONSE_WIRE.to_vec();
        wire[7] = 2;
        assert_eq!(
            Message::from_wire(&wire),
            Err(Error::Record(
                Section::Answer,
                1,
                record::Error::InvalidOwner(crate::name::Error::MissingTerminator(58)),
            )),
        );
        wire[7] = 1;
        wire[9] = 1;
        assert_eq!(
            Message::from_wire(&wire),
            Err(Error::Record(
                Section::Authority,
                0,
                record::Error::InvalidOwner(crate::name::Error::MissingTerminator(58)),
            )),
        );
    }

    #[test]
    fn from_wire_fails_fast_on_lying_counts() {
        let mut wire = [0u8; HEADER_SIZE];
        wire[4..6].copy_from_slice(&u16::MAX.to_be_bytes());
        assert_eq!(
            Message::from_wire(&wire),
            Err(Error::Question(
                0,
                question::Error::InvalidQname(crate::name::Error::MissingTerminator(12)),
            )),
        );
    }

    #[test]
    fn from_wire_rejects_trailing_octets() {
        let mut wire = QUERY_WIRE.to_vec();
        wire.push(0);
        assert_eq!(Message::from_wire(&wire), Err(Error::TrailingOctets(1)));
        wire.extend_from_slice(b"\xde\xad\xbe");
        assert_eq!(Message::from_wire(&wire), Err(Error::TrailingOctets(4)));
    }

    #[test]
    fn to_wire_rejects_count_mismatches() {
        let mut message = RESPONSE.clone();
        message.header.qdcount = 2;
        assert_eq!(
            message.to_wire(),
            Err(Error::CountMismatch(Section::Question)),
        );

        let mut message = RESPONSE.clone();
        message.header.ancount = 0;
        assert_eq!(message.to_wire(), Err(Error::CountMismatch(Section::Answer)));

        let mut message = RESPONSE.clone();
        message.header.nscount = 3;
        assert_eq!(
            message.to_wire(),
            Err(Error::CountMismatch(Section::Authority)),
        );

        let mut message = RESPONSE.clone();
        message.additionals = message.answers.clone();
        assert_eq!(
            message.to_wire(),
            Err(Error::CountMismatch(Section::Additional)),
        );
    }

    #[test]
    fn to_wire_wraps_component_errors() {
        let mut message = RESPONSE.clone();
        message.answers[0].rdlength = 7;
        assert_eq!(
            message.to_wire(),
            Err(Error::Record(
                Section::Answer,
                0,
                record::Error::RdlengthMismatch(7, 4),
            )),
        );
    }
}
