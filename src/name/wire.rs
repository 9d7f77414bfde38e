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

//! Implementation of parsing and validation of on-the-wire names.

use super::{Error, Label, Name, NameBuilder, MAX_LABEL_LEN, MAX_WIRE_LEN};

////////////////////////////////////////////////////////////////////////
// PARSING OF ON-THE-WIRE NAMES                                        //
////////////////////////////////////////////////////////////////////////

/// Parses an uncompressed name starting at index `start` of `octets`.
/// This is the implementation of [`Name::from_wire`].
///
/// Length-prefixed labels are read until the zero terminator octet. The
/// name need not reach the end of the buffer; on success, the number of
/// octets it occupies (terminator included) is returned alongside the
/// new [`Name`]. The offsets carried in errors index into `octets`.
///
/// A length octet above 63 has one of its upper two bits set and so
/// introduces a compression pointer or a reserved label type, neither
/// of which can occur in an uncompressed name; the name is taken to be
/// cut off at that point.
pub fn parse_name(octets: &[u8], start: usize) -> Result<(Name, usize), Error> {
    let mut builder = NameBuilder::new();
    let mut cursor = start;
    loop {
        let len = match octets.get(cursor) {
            Some(&len) => len as usize,
            None => return Err(Error::MissingTerminator(cursor)),
        };
        if len == 0 {
            break;
        } else if len > MAX_LABEL_LEN {
            return Err(Error::TruncatedName(cursor));
        }
        let content = match octets.get(cursor + 1..cursor + 1 + len) {
            Some(content) => content,
            None => return Err(Error::TruncatedName(cursor)),
        };
        let label = <&Label>::try_from(content).or(Err(Error::InvalidLabel(cursor)))?;
        builder.push_label(label)?;
        cursor += len + 1;
    }
    let name = builder.finish()?;
    Ok((name, cursor + 1 - start))
}

////////////////////////////////////////////////////////////////////////
// RE-VALIDATION OF STORED REPRESENTATIONS                             //
////////////////////////////////////////////////////////////////////////

/// Checks that `wire_repr` and `label_offsets` together describe a
/// valid domain name. [`Name`]s are only ever assembled from validated
/// parts, so this should never fail; [`Name::to_wire`] nevertheless
/// runs it before handing out the stored representation.
pub fn parts_are_valid(wire_repr: &[u8], label_offsets: &[u8]) -> bool {
    if label_offsets.is_empty() || wire_repr.len() > MAX_WIRE_LEN {
        return false;
    }
    let mut cursor = 0;
    for &offset in label_offsets {
        if offset as usize != cursor {
            return false;
        }
        let len = match wire_repr.get(cursor) {
            Some(&len) => len as usize,
            None => return false,
        };
        let content = match wire_repr.get(cursor + 1..cursor + 1 + len) {
            Some(content) => content,
            None => return false,
        };
        if !Label::validate(content) {
            return false;
        }
        cursor += len + 1;
    }
    wire_repr[cursor..] == [0]
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::super::MAX_N_LABELS;
    use super::*;

    ////////////////////////////////////////////////////////////////////
    // TESTS FOR parse_name                                            //
    ////////////////////////////////////////////////////////////////////

    #[test]
    fn parse_name_accepts_valid_names() {
        let wire_repr_and_junk = b"\x07example\x04test\x00junk";
        let wire_repr = &wire_repr_and_junk[..14];
        let target: Name = "example.test.".parse().unwrap();
        assert_eq!(parse_name(wire_repr, 0), Ok((target.clone(), 14)));
        assert_eq!(parse_name(wire_repr_and_junk, 0), Ok((target, 14)));
    }

    #[test]
    fn parse_name_honors_the_starting_index() {
        let octets = b"junk\x07example\x04test\x00junk";
        let target: Name = "example.test.".parse().unwrap();
        assert_eq!(parse_name(octets, 4), Ok((target, 14)));
    }

    #[test]
    fn parse_name_preserves_label_case() {
        let (name, _) = parse_name(b"\x07eXaMpLe\x04TEST\x00", 0).unwrap();
        assert_eq!(name.wire_repr(), b"\x07eXaMpLe\x04TEST\x00");
    }

    #[test]
    fn parse_name_rejects_empty_names() {
        assert_eq!(parse_name(b"\x00junk", 0), Err(Error::EmptyName));
    }

    #[test]
    fn parse_name_rejects_missing_terminators() {
        // The buffer ends cleanly after the last label, right where the
        // next length octet should be.
        assert_eq!(
            parse_name(b"\x07example\x04test", 0),
            Err(Error::MissingTerminator(13))
        );
        assert_eq!(parse_name(b"", 0), Err(Error::MissingTerminator(0)));
        assert_eq!(parse_name(b"\x01x", 2), Err(Error::MissingTerminator(2)));
    }

    #[test]
    fn parse_name_rejects_truncated_labels() {
        // The last label promises four octets but delivers fewer (or
        // none at all).
        assert_eq!(
            parse_name(b"\x07example\x04tes", 0),
            Err(Error::TruncatedName(8))
        );
        assert_eq!(
            parse_name(b"\x07example\x04", 0),
            Err(Error::TruncatedName(8))
        );
    }

    #[test]
    fn parse_name_rejects_long_labels() {
        assert_eq!(
            parse_name(
                b"\x40xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx\x00",
                0
            ),
            Err(Error::TruncatedName(0))
        );
    }

    #[test]
    fn parse_name_rejects_compression_pointers() {
        assert_eq!(
            parse_name(b"\x07example\xc0\x0c", 0),
            Err(Error::TruncatedName(8))
        );
    }

    #[test]
    fn parse_name_rejects_invalid_labels() {
        assert_eq!(parse_name(b"\x02-a\x00", 0), Err(Error::InvalidLabel(0)));
        assert_eq!(
            parse_name(b"\x01a\x02b-\x00", 0),
            Err(Error::InvalidLabel(2))
        );
        assert_eq!(
            parse_name(b"\x04a__b\x00", 0),
            Err(Error::InvalidLabel(0))
        );
    }

    #[test]
    fn parse_name_accepts_names_at_the_wire_length_ceiling() {
        // Three 63-octet labels plus one of 61 octets and the
        // terminator make exactly 255 octets.
        let mut octets = Vec::new();
        for _ in 0..3 {
            octets.push(MAX_LABEL_LEN as u8);
            octets.extend_from_slice(&[b'x'; MAX_LABEL_LEN]);
        }
        octets.push(61);
        octets.extend_from_slice(&[b'y'; 61]);
        octets.push(0);
        assert_eq!(octets.len(), MAX_WIRE_LEN);
        let (name, consumed) = parse_name(&octets, 0).unwrap();
        assert_eq!(consumed, MAX_WIRE_LEN);
        assert_eq!(name.wire_repr(), octets.as_slice());
    }

    #[test]
    fn parse_name_rejects_long_names() {
        // As above, but the final label is one octet longer, for a
        // would-be wire length of 256.
        let mut octets = Vec::new();
        for _ in 0..3 {
            octets.push(MAX_LABEL_LEN as u8);
            octets.extend_from_slice(&[b'x'; MAX_LABEL_LEN]);
        }
        octets.push(62);
        octets.extend_from_slice(&[b'y'; 62]);
        octets.push(0);
        assert_eq!(parse_name(&octets, 0), Err(Error::NameTooLong(256)));
    }

    #[test]
    fn parse_name_rejects_names_with_too_many_labels() {
        // 127 single-octet labels fill the 255-octet maximum; one more
        // cannot fit.
        let mut octets = Vec::new();
        for _ in 0..MAX_N_LABELS + 1 {
            octets.extend_from_slice(b"\x01x");
        }
        octets.push(0);
        assert_eq!(parse_name(&octets, 0), Err(Error::NameTooLong(257)));
    }

    #[test]
    fn parse_name_rejects_out_of_range_starts() {
        assert_eq!(
            parse_name(b"\x01x\x00", 17),
            Err(Error::MissingTerminator(17))
        );
    }

    ////////////////////////////////////////////////////////////////////
    // TESTS FOR parts_are_valid                                       //
    ////////////////////////////////////////////////////////////////////

    #[test]
    fn parts_are_valid_accepts_valid_parts() {
        assert!(parts_are_valid(b"\x07example\x04test\x00", &[0, 8]));
        assert!(parts_are_valid(b"\x01x\x00", &[0]));
    }

    #[test]
    fn parts_are_valid_rejects_empty_offset_tables() {
        assert!(!parts_are_valid(b"\x00", &[]));
    }

    #[test]
    fn parts_are_valid_rejects_incorrect_offsets() {
        assert!(!parts_are_valid(b"\x07example\x04test\x00", &[0, 7]));
        assert!(!parts_are_valid(b"\x07example\x04test\x00", &[0]));
    }

    #[test]
    fn parts_are_valid_rejects_missing_terminators() {
        assert!(!parts_are_valid(b"\x07example", &[0]));
        assert!(!parts_are_valid(b"\x07example\x04test", &[0, 8]));
    }

    #[test]
    fn parts_are_valid_rejects_trailing_octets() {
        assert!(!parts_are_valid(b"\x01x\x00\x00", &[0]));
        assert!(!parts_are_valid(b"\x01x\x00\x01y\x00", &[0]));
    }

    #[test]
    fn parts_are_valid_rejects_invalid_labels() {
        assert!(!parts_are_valid(b"\x02-a\x00", &[0]));
        assert!(!parts_are_valid(b"\x02a-\x00", &[0]));
    }
}
