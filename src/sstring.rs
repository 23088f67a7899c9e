//! Owned byte string built to cooperate with `Vector`
//!
//! `SString` keeps a single owned byte buffer. Operations that produce several
//! strings (`split`) hand back a `Vector` of independently owned pieces that
//! uses [`StringOps`] for deep copies.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{GrowError, Result};
use crate::vector::{ElementOps, GrowthPolicy, Vector};

/// A mutable, owned byte sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SString {
    bytes: Vec<u8>,
}

impl SString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a literal into a new owned string
    pub fn from_literal(input: &str) -> Self {
        Self {
            bytes: input.as_bytes().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Owned text copy, replacing invalid UTF-8 with U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Concatenate `addition` onto this string and return the new length
    pub fn append<A: AsRef<[u8]>>(&mut self, addition: A) -> usize {
        self.bytes.extend_from_slice(addition.as_ref());
        self.bytes.len()
    }

    /// Split on `delimiter`.
    ///
    /// Every run between delimiters becomes one element, including empty runs
    /// and the run after the last delimiter. An empty string yields a single
    /// empty element.
    pub fn split(&self, delimiter: u8) -> Result<Vector<SString, StringOps>> {
        self.split_with_policy(delimiter, GrowthPolicy::default())
    }

    /// [`split`](Self::split) into a vector that grows under `policy`
    pub fn split_with_policy(
        &self,
        delimiter: u8,
        policy: GrowthPolicy,
    ) -> Result<Vector<SString, StringOps>> {
        let mut pieces = string_vector_with(policy)?;
        for run in self.bytes.split(|b| *b == delimiter) {
            pieces.push_back(&SString::from(run))?;
        }
        Ok(pieces)
    }

    /// Replace the first occurrence of `target` at or after `offset`.
    ///
    /// On a miss the string is left untouched and `GrowError::NotFound` is
    /// returned.
    pub fn substitute<T, R>(&mut self, offset: usize, target: T, replacement: R) -> Result<()>
    where
        T: AsRef<[u8]>,
        R: AsRef<[u8]>,
    {
        let target = target.as_ref();
        let len = self.bytes.len();
        if target.len() > len || offset > len - target.len() {
            return Err(GrowError::NotFound);
        }

        let start = if target.is_empty() {
            offset
        } else {
            self.bytes[offset..]
                .windows(target.len())
                .position(|window| window == target)
                .map(|found| found + offset)
                .ok_or(GrowError::NotFound)?
        };

        self.bytes.splice(
            start..start + target.len(),
            replacement.as_ref().iter().copied(),
        );
        Ok(())
    }

    /// Copy of bytes `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> Result<SString> {
        let len = self.bytes.len();
        if start > end || end > len {
            return Err(GrowError::InvalidRange { start, end, len });
        }
        Ok(SString::from(&self.bytes[start..end]))
    }

    /// Concatenate `pieces` with `delimiter` between each pair
    pub fn join<O: ElementOps<SString>>(pieces: &Vector<SString, O>, delimiter: u8) -> SString {
        let mut joined = SString::new();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                joined.bytes.push(delimiter);
            }
            joined.append(piece);
        }
        joined
    }
}

impl AsRef<[u8]> for SString {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for SString {
    fn from(input: &str) -> Self {
        Self::from_literal(input)
    }
}

impl From<&[u8]> for SString {
    fn from(input: &[u8]) -> Self {
        Self {
            bytes: input.to_vec(),
        }
    }
}

impl From<Vec<u8>> for SString {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<String> for SString {
    fn from(input: String) -> Self {
        Self {
            bytes: input.into_bytes(),
        }
    }
}

impl fmt::Display for SString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

impl Serialize for SString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.bytes))
    }
}

/// Deep-copy lifecycle for vectors of `SString`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringOps;

impl ElementOps<SString> for StringOps {
    fn duplicate(&self, value: &SString) -> SString {
        value.clone()
    }

    fn make_default(&self) -> SString {
        SString::new()
    }
}

/// Create an empty vector that owns its strings
pub fn string_vector() -> Result<Vector<SString, StringOps>> {
    string_vector_with(GrowthPolicy::default())
}

pub fn string_vector_with(policy: GrowthPolicy) -> Result<Vector<SString, StringOps>> {
    Vector::with_policy(StringOps, policy)
}
