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

//! Implementation of the [`Label`] and [`LabelBuf`] types.

use std::borrow::Borrow;
use std::convert::TryFrom;
use std::error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use super::MAX_LABEL_LEN;

////////////////////////////////////////////////////////////////////////
// LABELS                                                             //
////////////////////////////////////////////////////////////////////////

/// The label given to a node in the Domain Name System's tree
/// structure.
///
/// `Label` is a wrapper over `[u8]` that can only be constructed if the
/// slice is a valid label under this crate's rules: one to 63 octets,
/// each an ASCII letter, digit, or hyphen, with hyphens appearing only
/// singly and only in the interior. This is the letter-digit-hyphen
/// form of [RFC 952] as amended by [RFC 1123], tightened to forbid
/// consecutive hyphens.
///
/// Note that in accordance with [RFC 1034 § 3.1]:
///
/// * comparisons between `Label`s are case-insensitive assuming ASCII,
///   but
/// * case is preserved in the internal representation.
///
/// `&Label` implements [`TryFrom`] for `&[u8]` and for `&[u8; N]`:
///
/// ```
/// use std::convert::TryFrom;
/// use dnswire::name::Label;
///
/// let label1 = <&Label>::try_from(b"com").unwrap();
/// let label2 = <&Label>::try_from(&b"org"[..]).unwrap();
/// assert!(<&Label>::try_from(b"-com").is_err());
/// ```
///
/// [RFC 952]: https://datatracker.ietf.org/doc/html/rfc952
/// [RFC 1034 § 3.1]: https://tools.ietf.org/html/rfc1034#section-3.1
/// [RFC 1123]: https://datatracker.ietf.org/doc/html/rfc1123
#[repr(transparent)]
pub struct Label {
    octets: [u8],
}

#[allow(clippy::len_without_is_empty)] // A valid label is never empty.
impl Label {
    /// Wraps up a `&[u8]` as a `Label` without checking its validity.
    /// To be used only within the parent module, and only on octets
    /// that [`Label::validate`] accepts.
    pub(super) fn from_unchecked(octets: &[u8]) -> &Self {
        unsafe { &*(octets as *const [u8] as *const Label) }
    }

    /// Returns whether `octets` is a valid label: one to 63 octets,
    /// ASCII letters, digits, and hyphens only, with no leading
    /// hyphen, no trailing hyphen, and no two hyphens in a row.
    pub fn validate(octets: &[u8]) -> bool {
        if octets.is_empty() || octets.len() > MAX_LABEL_LEN {
            return false;
        }
        if octets[0] == b'-' || octets[octets.len() - 1] == b'-' {
            return false;
        }
        let mut prev_hyphen = false;
        for &octet in octets {
            if octet == b'-' {
                if prev_hyphen {
                    return false;
                }
                prev_hyphen = true;
            } else if octet.is_ascii_alphanumeric() {
                prev_hyphen = false;
            } else {
                return false;
            }
        }
        true
    }

    /// Returns the number of octets in this `Label`.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns the octets of this `Label`.
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }
}

/// An error indicating that a slice is not a valid label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidLabelError;

impl fmt::Display for InvalidLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid DNS label")
    }
}

impl error::Error for InvalidLabelError {}

impl<'a> TryFrom<&'a [u8]> for &'a Label {
    type Error = InvalidLabelError;

    fn try_from(octets: &'a [u8]) -> Result<Self, Self::Error> {
        if Label::validate(octets) {
            Ok(Label::from_unchecked(octets))
        } else {
            Err(InvalidLabelError)
        }
    }
}

impl<'a, const N: usize> TryFrom<&'a [u8; N]> for &'a Label {
    type Error = InvalidLabelError;

    fn try_from(octets: &'a [u8; N]) -> Result<Self, Self::Error> {
        octets[..].try_into()
    }
}

impl ToOwned for Label {
    type Owned = LabelBuf;

    fn to_owned(&self) -> Self::Owned {
        Self::Owned::from_unchecked(self.octets())
    }
}

/// Labels contain only ASCII graphic characters, so the text form is
/// the octets themselves. No escaping is ever required.
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for octet in self.octets() {
            write!(f, "{}", *octet as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// In accordance with RFC 1034 § 3.1 (clarified by RFC 4343),
/// comparison of `Label`s is ASCII-case-insensitive.
impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.octets().eq_ignore_ascii_case(other.octets())
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // We have to hash in a case-insensitive manner to match our
        // implementations of [`PartialEq`] and [`Eq`].
        for octet in self.octets().iter().map(|octet| octet.to_ascii_lowercase()) {
            state.write_u8(octet);
        }
    }
}

////////////////////////////////////////////////////////////////////////
// LABEL BUFFERS                                                      //
////////////////////////////////////////////////////////////////////////

/// A fixed-size buffer capable of holding any valid label. It
/// dereferences to a [`Label`].
///
/// The notes about case and internal representation found in the
/// documentation for [`Label`] apply equally here.
///
/// Like `&Label`, `LabelBuf` implements [`TryFrom`] for `&[u8]` and
/// `&[u8; N]`; it additionally implements [`FromStr`]:
///
/// ```
/// use dnswire::name::LabelBuf;
///
/// let labelbuf1 = LabelBuf::try_from(b"com").unwrap();
/// let labelbuf2: LabelBuf = "a-b".parse().unwrap();
/// assert!("a--b".parse::<LabelBuf>().is_err());
/// ```
pub struct LabelBuf {
    len: u8,
    data: [u8; MAX_LABEL_LEN],
}

/// Private implementation helpers.
impl LabelBuf {
    /// Constructs a `LabelBuf` from the given octets. Validity is
    /// checked only in an assertion; the caller is expected to ensure
    /// it.
    fn from_unchecked(octets: &[u8]) -> Self {
        assert!(!octets.is_empty() && octets.len() <= MAX_LABEL_LEN);
        let mut buf = LabelBuf {
            len: octets.len() as u8,
            data: [0; MAX_LABEL_LEN],
        };
        buf.data[..octets.len()].copy_from_slice(octets);
        buf
    }
}

impl TryFrom<&[u8]> for LabelBuf {
    type Error = InvalidLabelError;

    fn try_from(octets: &[u8]) -> Result<Self, Self::Error> {
        if Label::validate(octets) {
            Ok(Self::from_unchecked(octets))
        } else {
            Err(InvalidLabelError)
        }
    }
}

impl<const N: usize> TryFrom<&[u8; N]> for LabelBuf {
    type Error = InvalidLabelError;

    fn try_from(octets: &[u8; N]) -> Result<Self, Self::Error> {
        octets[..].try_into()
    }
}

impl FromStr for LabelBuf {
    type Err = InvalidLabelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.as_bytes().try_into()
    }
}

impl Deref for LabelBuf {
    type Target = Label;

    fn deref(&self) -> &Self::Target {
        let len = self.len as usize;
        Label::from_unchecked(&self.data[..len])
    }
}

impl Borrow<Label> for LabelBuf {
    fn borrow(&self) -> &Label {
        self.deref()
    }
}

impl fmt::Display for LabelBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.deref())
    }
}

impl fmt::Debug for LabelBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.deref())
    }
}

// For use in HashMaps, Eq and Hash must be the same as for the
// corresponding Label.
impl PartialEq for LabelBuf {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl Eq for LabelBuf {}

impl Hash for LabelBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.deref().hash(state)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
