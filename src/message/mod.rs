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

//! Implementation of reading and writing of DNS messages.

use crate::rr::Record;

mod constants;
pub mod header;
mod opcode;
pub mod question;
mod rcode;
pub mod wire;

pub use header::Header;
pub use opcode::{IntoOpcodeError, Opcode};
pub use question::{Qclass, Qtype, Question};
pub use rcode::{IntoRcodeError, Rcode};
pub use wire::Section;

////////////////////////////////////////////////////////////////////////
// MESSAGES                                                            //
////////////////////////////////////////////////////////////////////////

/// A complete DNS message ([RFC 1035 § 4.1]).
///
/// A message is a [`Header`] followed by four sections: the
/// [`Question`]s and three runs of [`Record`]s. The header's four
/// count fields say how many components each section holds; an
/// in-memory message whose counts and section lengths disagree cannot
/// be serialized.
///
/// [RFC 1035 § 4.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Message {
    /// Decodes a complete DNS message from `octets`.
    ///
    /// The whole of `octets` must be consumed; octets left over after
    /// the final component are an error, as are section counts that
    /// promise more components than the input holds.
    pub fn from_wire(octets: &[u8]) -> Result<Self, wire::Error> {
        wire::parse_message(octets)
    }

    /// Serializes this message into a freshly allocated buffer.
    pub fn to_wire(&self) -> Result<Vec<u8>, wire::Error> {
        wire::serialize_message(self)
    }
}
