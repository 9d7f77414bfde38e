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

//! Implementation of the [`NameBuilder`] structure.

use arrayvec::ArrayVec;

use super::{Error, Label, Name, MAX_N_LABELS, MAX_WIRE_LEN};

/// A facility to build [`Name`]s label by label.
///
/// The `NameBuilder` constructs the on-the-wire representation and
/// label offset table for a [`Name`] using fixed-size internal buffers
/// that are long enough to accommodate any valid name. If the
/// `NameBuilder` is placed on the stack, then construction of a
/// [`Name`] is fast, requiring only one final heap allocation and copy
/// when the name is finished.
///
/// Labels are appended in presentation order (most specific first)
/// using [`NameBuilder::push_label`], which fails if the addition would
/// take the name past the 255-octet wire-length ceiling. The final
/// [`Name`] is constructed with [`NameBuilder::finish`], which fails if
/// no label has been pushed, since a name has at least one label.
///
/// Example usage:
///
/// ```
/// use dnswire::name::{Label, NameBuilder};
///
/// let mut builder = NameBuilder::new();
/// builder.push_label(b"example".try_into().unwrap()).unwrap();
/// builder.push_label(b"test".try_into().unwrap()).unwrap();
/// let name = builder.finish().unwrap();
/// assert_eq!(name, "example.test".parse().unwrap());
/// ```
pub struct NameBuilder {
    wire_repr: ArrayVec<u8, MAX_WIRE_LEN>,
    label_offsets: ArrayVec<u8, MAX_N_LABELS>,
}

impl NameBuilder {
    /// Constructs a new `NameBuilder` containing no labels.
    pub fn new() -> Self {
        Self {
            wire_repr: ArrayVec::new(),
            label_offsets: ArrayVec::new(),
        }
    }

    /// Returns the number of labels pushed so far.
    pub fn n_labels(&self) -> usize {
        self.label_offsets.len()
    }

    /// Tries to append `label` to the name under construction. This
    /// fails if the label's length octet and content, plus the final
    /// terminator octet, would take the name past 255 octets on the
    /// wire. In the error case, the `NameBuilder`'s state remains
    /// unchanged.
    pub fn push_label(&mut self, label: &Label) -> Result<(), Error> {
        let new_wire_len = self.wire_repr.len() + 1 + label.len() + 1;
        if new_wire_len > MAX_WIRE_LEN {
            return Err(Error::NameTooLong(new_wire_len));
        }

        // The pushes below cannot overflow the buffers. The check
        // above caps the wire length at 254 octets before the
        // terminator, and every label occupies at least two of them,
        // so at most 127 label offsets are ever recorded.
        self.label_offsets.push(self.wire_repr.len() as u8);
        self.wire_repr.push(label.len() as u8);
        self.wire_repr.extend(label.octets().iter().copied());
        Ok(())
    }

    /// Finishes the construction of the name, appending the terminator
    /// octet and consuming the `NameBuilder`. Since a name has at least
    /// one label, this fails if none has been pushed.
    pub fn finish(mut self) -> Result<Name, Error> {
        if self.label_offsets.is_empty() {
            return Err(Error::EmptyName);
        }
        // The push cannot overflow: push_label reserves one octet for
        // the terminator.
        self.wire_repr.push(0);
        Ok(Name::from_parts(
            self.wire_repr.as_slice().into(),
            self.label_offsets.as_slice().into(),
        ))
    }
}

impl Default for NameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::super::MAX_LABEL_LEN;
    use super::*;

    fn label(octets: &[u8]) -> &Label {
        octets.try_into().unwrap()
    }

    #[test]
    fn namebuilder_works() {
        let mut builder = NameBuilder::new();
        builder.push_label(label(b"example")).unwrap();
        builder.push_label(label(b"test")).unwrap();
        assert_eq!(builder.n_labels(), 2);
        let name = builder.finish().unwrap();
        assert_eq!(name.wire_repr(), b"\x07example\x04test\x00");
    }

    #[test]
    fn finish_rejects_empty_name() {
        assert_eq!(NameBuilder::new().finish(), Err(Error::EmptyName));
    }

    #[test]
    fn push_label_rejects_long_name() {
        // Three 63-octet labels bring the name to 192 octets; a fourth
        // would make 257 with the terminator, over the 255 ceiling.
        let long = [b'x'; MAX_LABEL_LEN];
        let mut builder = NameBuilder::new();
        for _ in 0..3 {
            builder.push_label(label(&long)).unwrap();
        }
        assert_eq!(
            builder.push_label(label(&long)),
            Err(Error::NameTooLong(257))
        );

        // The failed push must not have changed the state.
        assert_eq!(builder.n_labels(), 3);
        let name = builder.finish().unwrap();
        assert_eq!(name.wire_repr().len(), 193);
    }

    #[test]
    fn push_label_accepts_name_at_ceiling() {
        // Three 63-octet labels plus one of 61 octets reach exactly
        // 255 octets on the wire.
        let mut builder = NameBuilder::new();
        for _ in 0..3 {
            builder.push_label(label(&[b'x'; MAX_LABEL_LEN])).unwrap();
        }
        builder.push_label(label(&[b'y'; 61])).unwrap();
        let name = builder.finish().unwrap();
        assert_eq!(name.wire_repr().len(), 255);
    }

    #[test]
    fn builder_accepts_maximum_label_count() {
        // 127 single-octet labels fill 254 wire octets, leaving room
        // for the terminator only; a 128th label cannot fit.
        let mut builder = NameBuilder::new();
        for _ in 0..MAX_N_LABELS {
            builder.push_label(label(b"x")).unwrap();
        }
        assert_eq!(builder.push_label(label(b"x")), Err(Error::NameTooLong(257)));
        let name = builder.finish().unwrap();
        assert_eq!(name.len(), MAX_N_LABELS);
        assert_eq!(name.wire_repr().len(), 255);
    }
}
