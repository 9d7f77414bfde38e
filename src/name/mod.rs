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

//! Implementation of data structures related to domain names.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::Index;
use std::str::FromStr;

mod builder;
mod error;
mod label;
mod wire;
pub use builder::NameBuilder;
pub use error::Error;
pub use label::{InvalidLabelError, Label, LabelBuf};

/// The maximum number of labels in a domain name.
const MAX_N_LABELS: usize = 127;

/// The maximum length of the uncompressed on-the-wire representation of
/// a domain name, terminator octet included.
const MAX_WIRE_LEN: usize = 255;

/// The maximum length of a label in a domain name (not including the
/// octet that provides the length).
const MAX_LABEL_LEN: usize = 63;

////////////////////////////////////////////////////////////////////////
// NAME STRUCTURE                                                      //
////////////////////////////////////////////////////////////////////////

/// A structure to represent a domain name.
///
/// A `Name` is an immutable, non-empty sequence of [`Label`]s in
/// presentation order (most specific first). `Name`s can be constructed
/// in several ways:
///
/// * through the [`FromStr`] implementation;
/// * through a [`NameBuilder`]; and
/// * from uncompressed on-the-wire names through [`Name::from_wire`].
///
/// Internally, a `Name` owns two buffers:
///
/// * the uncompressed on-the-wire representation of the name, as
///   defined in [RFC 1035 § 3.1], including the terminating zero octet;
///   and
/// * an array of octets providing the offset of each label in that
///   representation, so that label access need not rescan the length
///   octets.
///
/// Every constructor enforces the same invariant: the name has at least
/// one label, every label satisfies [`Label::validate`], and the
/// on-the-wire representation (terminator included) is at most 255
/// octets long.
///
/// [RFC 1035 § 3.1]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.1
#[derive(Clone)]
pub struct Name {
    wire_repr: Box<[u8]>,
    label_offsets: Box<[u8]>,
}

/// Private helpers to access the stored representation.
impl Name {
    /// Assembles a `Name` from its stored parts. Callers must provide a
    /// valid uncompressed on-the-wire representation (terminator
    /// included) along with the offsets of its labels.
    fn from_parts(wire_repr: Box<[u8]>, label_offsets: Box<[u8]>) -> Self {
        Self {
            wire_repr,
            label_offsets,
        }
    }

    /// Returns the offset of label `n` in the `Name`'s on-the-wire
    /// representation.
    fn label_offset(&self, n: usize) -> usize {
        self.label_offsets[n] as usize
    }
}

////////////////////////////////////////////////////////////////////////
// NAME PUBLIC API                                                     //
////////////////////////////////////////////////////////////////////////

#[allow(clippy::len_without_is_empty)] // A domain name is never empty!
impl Name {
    /// Tries to parse an uncompressed name starting at index `start` of
    /// the provided buffer. The name need not reach the end of the
    /// buffer; extra data is ignored. If the name is valid, a new
    /// `Name` is returned along with its length in octets, terminator
    /// included.
    pub fn from_wire(octets: &[u8], start: usize) -> Result<(Self, usize), Error> {
        wire::parse_name(octets, start)
    }

    /// Returns a freshly allocated copy of the `Name`'s uncompressed
    /// on-the-wire representation, after re-checking that the stored
    /// parts describe a valid domain name. Since `Name`s are only ever
    /// assembled from validated parts, the check fails with
    /// [`Error::InvalidName`] only when an internal invariant has been
    /// broken.
    pub fn to_wire(&self) -> Result<Vec<u8>, Error> {
        if wire::parts_are_valid(&self.wire_repr, &self.label_offsets) {
            Ok(self.wire_repr.to_vec())
        } else {
            Err(Error::InvalidName)
        }
    }

    /// Returns an iterator over labels in this `Name`.
    pub fn labels(&self) -> Labels {
        Labels::new(self)
    }

    /// Returns the number of labels in this `Name`.
    pub fn len(&self) -> usize {
        self.label_offsets.len()
    }

    /// Returns the (uncompressed) on-the-wire representation of the
    /// `Name`.
    pub fn wire_repr(&self) -> &[u8] {
        &self.wire_repr
    }
}

impl Index<usize> for Name {
    type Output = Label;

    fn index(&self, index: usize) -> &Self::Output {
        let offset = self.label_offset(index);
        let len = self.wire_repr[offset] as usize;
        let start = offset + 1;
        let end = start + len;
        Label::from_unchecked(&self.wire_repr[start..end])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // NOTE: the unwrap() is okay, since we never construct Names
        // with no labels.
        let mut labels = self.labels();
        labels.next().unwrap().fmt(f)?;
        for label in labels {
            write!(f, ".{}", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// `Name` comparison is ASCII-case-insensitive, following the [`Label`]
/// implementation.
impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.labels().zip(other.labels()).all(|(a, b)| a == b)
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for label in self.labels() {
            label.hash(state);
        }
    }
}

////////////////////////////////////////////////////////////////////////
// ITERATION OVER A NAME'S LABELS                                      //
////////////////////////////////////////////////////////////////////////

/// An iterator over the [`Label`]s in a [`Name`].
///
/// To use this iterator, construct one from a [`Name`] using
/// [`Name::labels`].
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    name: &'a Name,
    front: usize,
    back: usize,
}

impl Labels<'_> {
    fn new(name: &Name) -> Labels {
        Labels {
            name,
            front: 0,
            back: name.len(),
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let this_one = self.front;
            self.front += 1;
            Some(&self.name[this_one])
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Labels<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back > self.front {
            self.back -= 1;
            Some(&self.name[self.back])
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Labels<'_> {}

impl FusedIterator for Labels<'_> {}

////////////////////////////////////////////////////////////////////////
// PARSING OF NAMES FROM RUST STRINGS                                  //
////////////////////////////////////////////////////////////////////////

/// Allows for conversion of a Rust [`str`] in the dotted presentation
/// format into a [`Name`]. The trailing dot is optional. Every label
/// between the dots must satisfy [`Label::validate`]; there are no
/// escape sequences.
impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_suffix('.').unwrap_or(s);
        if stripped.is_empty() {
            return Err(Error::EmptyName);
        }

        let mut builder = NameBuilder::new();
        let mut offset = 0;
        for part in stripped.split('.') {
            let label = <&Label>::try_from(part.as_bytes()).or(Err(Error::InvalidLabel(offset)))?;
            builder.push_label(label)?;
            offset += part.len() + 1;
        }
        builder.finish()
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
