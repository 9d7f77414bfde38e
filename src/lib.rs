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

//! A strict codec for the DNS wire format of [RFC 1035].
//!
//! This crate converts between structured DNS entities and their
//! on-the-wire byte sequences, in both directions. Five components are
//! provided, each usable on its own:
//!
//! * label handling ([`name::Label`] and [`name::LabelBuf`]);
//! * domain names ([`name::Name`]);
//! * message headers ([`message::Header`]);
//! * question-section entries ([`message::Question`]);
//! * resource records ([`rr::Record`]).
//!
//! [`message::Message`] composes them into whole-message encoding and
//! decoding.
//!
//! Decoding is written for hostile input. Every read is bounds-checked,
//! every reserved field is verified, and every rejection is a typed
//! error naming what was wrong and (where useful) at which offset. No
//! input can cause a panic or an out-of-bounds read. Encoding applies
//! the same validation before emitting bytes, so a non-compliant
//! message cannot be produced from this crate's types.
//!
//! Two deliberate restrictions of scope apply throughout. First, DNS
//! name compression ([RFC 1035 § 4.1.4]) is not supported: a length
//! octet with the upper two bits set is treated as malformed rather
//! than followed as a pointer. Second, labels are restricted to the
//! letter-digit-hyphen characters of [RFC 952] and [RFC 1123], with the
//! further rule that hyphens may appear only singly and only in the
//! interior of a label.
//!
//! All operations are pure, synchronous transformations. Decoded
//! entities own their bytes; nothing borrows from the input buffer.
//!
//! [RFC 952]: https://datatracker.ietf.org/doc/html/rfc952
//! [RFC 1035]: https://datatracker.ietf.org/doc/html/rfc1035
//! [RFC 1035 § 4.1.4]: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4
//! [RFC 1123]: https://datatracker.ietf.org/doc/html/rfc1123

pub mod class;
pub mod message;
pub mod name;
pub mod rr;

mod util;
