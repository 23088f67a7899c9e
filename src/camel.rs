//! Sentence to camelCase transform
//!
//! Every ASCII punctuation mark closes a sentence. Text after the last mark
//! is not a sentence and produces nothing.

use crate::error::Result;
use crate::sstring::{string_vector_with, SString, StringOps};
use crate::vector::{GrowthPolicy, Vector};

/// Camel-cased identifiers, one per sentence
#[derive(Debug)]
pub struct CamelCased {
    identifiers: Vector<SString, StringOps>,
}

impl CamelCased {
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &SString> {
        self.identifiers.iter()
    }

    /// Every identifier wrapped in `Some`, followed by a terminating `None`
    pub fn tokens(&self) -> impl Iterator<Item = Option<&SString>> {
        self.identifiers
            .iter()
            .map(Some)
            .chain(std::iter::once(None))
    }

    pub fn as_vector(&self) -> &Vector<SString, StringOps> {
        &self.identifiers
    }

    pub fn into_strings(self) -> Vec<String> {
        self.identifiers
            .iter()
            .map(SString::to_string_lossy)
            .collect()
    }
}

/// Convert free text into one camelCase identifier per sentence
///
/// Input is raw bytes. Bytes outside ASCII are neither letters nor spaces
/// and are copied through unchanged.
pub fn camel_caser<I: AsRef<[u8]>>(input: I) -> Result<CamelCased> {
    camel_caser_with_policy(input, GrowthPolicy::default())
}

/// [`camel_caser`] with the identifier vector built under `policy`
pub fn camel_caser_with_policy<I: AsRef<[u8]>>(
    input: I,
    policy: GrowthPolicy,
) -> Result<CamelCased> {
    let mut identifiers = string_vector_with(policy)?;
    let mut rest = input.as_ref();

    while let Some(end) = rest.iter().position(u8::is_ascii_punctuation) {
        let identifier = camel_sentence(&rest[..end]);
        log::debug!("sentence {} -> {:?}", identifiers.len(), identifier.to_string_lossy());
        identifiers.push_back(&identifier)?;
        rest = &rest[end + 1..];
    }

    Ok(CamelCased { identifiers })
}

/// C `isspace`: ASCII whitespace plus vertical tab
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

fn camel_sentence(sentence: &[u8]) -> SString {
    let mut out = Vec::with_capacity(sentence.len());
    let start = sentence
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(sentence.len());
    let mut bytes = sentence[start..].iter().copied().peekable();

    while let Some(b) = bytes.next() {
        if !is_space(b) {
            out.push(b.to_ascii_lowercase());
            continue;
        }

        match bytes.peek().copied() {
            // trailing or repeated whitespace collapses to nothing
            None => {}
            Some(next) if is_space(next) => {}
            Some(next) if next.is_ascii_alphabetic() => {
                bytes.next();
                out.push(next.to_ascii_uppercase());
            }
            Some(_) => {
                while let Some(&next) = bytes.peek() {
                    if is_space(next) || next.is_ascii_alphabetic() {
                        break;
                    }
                    out.push(next);
                    bytes.next();
                }
                if let Some(&next) = bytes.peek() {
                    if next.is_ascii_alphabetic() {
                        out.push(next.to_ascii_uppercase());
                        bytes.next();
                    }
                }
            }
        }
    }

    SString::from(out)
}
