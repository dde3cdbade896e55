//! Namespace hashing for the deterministic UUID versions 3 and 5.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use md5::Digest;

use crate::{ByteOctet, ByteSource, Error, HexSource, Uuid};

/// The closed set of values that can name a v3/v5 UUID.
///
/// Every variant must reduce to a string before hashing. A [`Lazy`] thunk
/// that declines to produce one fails with [`Error::UnhashableValue`]; that
/// is the only failure path.
///
/// [`Lazy`]: HashInput::Lazy
pub enum HashInput<'a> {
    /// Literal text.
    Text(Cow<'a, str>),
    /// An integer, hashed through its decimal representation.
    Int(i64),
    /// A deferred value; `None` means the value is not reducible to a string.
    Lazy(Box<dyn FnOnce() -> Option<String> + 'a>),
}

impl HashInput<'_> {
    fn into_string(self) -> Result<String, Error> {
        match self {
            Self::Text(text) => Ok(text.into_owned()),
            Self::Int(value) => Ok(value.to_string()),
            Self::Lazy(thunk) => thunk().ok_or(Error::UnhashableValue),
        }
    }
}

impl fmt::Debug for HashInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for HashInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<i64> for HashInput<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Produces 16 bytes by hashing a namespace UUID followed by a name.
///
/// The digest runs over `namespace_bytes || name`; its hex form is decoded
/// back through [`HexSource`] and truncated to 16 bytes, so a 20-byte SHA-1
/// digest and a 16-byte MD5 digest come out the same width. Hashing the same
/// `(name, namespace)` pair always yields the same bytes.
pub struct ContentHashSource<D> {
    name: String,
    namespace: [u8; 16],
    digest: PhantomData<D>,
}

/// The MD5 source behind version 3.
pub type Md5Source = ContentHashSource<md5::Md5>;

/// The SHA-1 source behind version 5.
pub type Sha1Source = ContentHashSource<sha1::Sha1>;

impl<D: Digest> ContentHashSource<D> {
    /// Creates a source for `value` salted with `namespace`.
    ///
    /// The value is reduced to a string here; an irreducible value fails
    /// with [`Error::UnhashableValue`] before any hashing happens.
    pub fn new<'a>(value: impl Into<HashInput<'a>>, namespace: &Uuid) -> Result<Self, Error> {
        Ok(Self {
            name: value.into().into_string()?,
            namespace: namespace.to_bytes(),
            digest: PhantomData,
        })
    }
}

impl<D: Digest> ByteSource for ContentHashSource<D> {
    fn provide(&mut self) -> Result<ByteOctet, Error> {
        let mut hasher = D::new();
        hasher.update(self.namespace);
        hasher.update(self.name.as_bytes());
        let hex: String = hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        Ok(HexSource::new(&hex).provide()?.slice(0, Some(16)))
    }
}

#[cfg(test)]
mod tests {
    use super::{HashInput, Md5Source, Sha1Source};
    use crate::{ByteSource, Error, Uuid};

    /// Hashes the same name and namespace to identical bytes
    #[test]
    fn hashes_the_same_name_and_namespace_to_identical_bytes() {
        let ns = Uuid::namespace_dns();
        let first = Md5Source::new("python.org", &ns).unwrap().provide().unwrap();
        let second = Md5Source::new("python.org", &ns).unwrap().provide().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
    }

    /// Hashes different names to different bytes
    #[test]
    fn hashes_different_names_to_different_bytes() {
        let ns = Uuid::namespace_dns();
        let one = Md5Source::new("python.org", &ns).unwrap().provide().unwrap();
        let other = Md5Source::new("python.com", &ns).unwrap().provide().unwrap();
        assert_ne!(one, other);
    }

    /// Salts the digest with the namespace bytes
    #[test]
    fn salts_the_digest_with_the_namespace_bytes() {
        let in_dns = Md5Source::new("example", &Uuid::namespace_dns())
            .unwrap()
            .provide()
            .unwrap();
        let in_url = Md5Source::new("example", &Uuid::namespace_url())
            .unwrap()
            .provide()
            .unwrap();
        assert_ne!(in_dns, in_url);
    }

    /// Truncates the sha1 digest to sixteen bytes
    #[test]
    fn truncates_the_sha1_digest_to_sixteen_bytes() {
        let bytes = Sha1Source::new("python.org", &Uuid::namespace_dns())
            .unwrap()
            .provide()
            .unwrap();
        assert_eq!(bytes.len(), 16);
    }

    /// Accepts integers and resolvable thunks
    #[test]
    fn accepts_integers_and_resolvable_thunks() {
        let ns = Uuid::namespace_oid();
        let from_int = Md5Source::new(42i64, &ns).unwrap().provide().unwrap();
        let from_text = Md5Source::new("42", &ns).unwrap().provide().unwrap();
        let from_thunk = Md5Source::new(
            HashInput::Lazy(Box::new(|| Some(String::from("42")))),
            &ns,
        )
        .unwrap()
        .provide()
        .unwrap();

        assert_eq!(from_int, from_text);
        assert_eq!(from_text, from_thunk);
    }

    /// Fails when a thunk cannot produce a string
    #[test]
    fn fails_when_a_thunk_cannot_produce_a_string() {
        let result = Md5Source::new(HashInput::Lazy(Box::new(|| None)), &Uuid::namespace_dns());
        assert!(matches!(result, Err(Error::UnhashableValue)));
    }
}
