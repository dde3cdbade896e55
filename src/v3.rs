//! Version 3 name-based UUID generation (MD5).

use crate::hash::{HashInput, Md5Source};
use crate::{Error, Uuid, Variant};

/// Generates a version 3 UUID object.
///
/// The value is the MD5 digest of the namespace bytes followed by `name`,
/// with the version and variant bits stamped on top. The same name in the
/// same namespace always yields the same value. A `None` namespace defaults
/// to the DNS namespace.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid3("python.org", None)?;
/// assert_eq!(uuid, "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid3<'a>(
    name: impl Into<HashInput<'a>>,
    namespace: Option<&Uuid>,
) -> Result<Uuid, Error> {
    let namespace = namespace.cloned().unwrap_or_else(Uuid::namespace_dns);
    let mut uuid = Uuid::from_source(&mut Md5Source::new(name, &namespace)?)?;
    uuid.set_version(3);
    uuid.set_variant(Variant::Rfc4122);
    Ok(uuid)
}

#[cfg(test)]
mod tests {
    use super::uuid3;
    use crate::hash::HashInput;
    use crate::{Error, Uuid, Variant};

    /// Matches the reference value for python dot org
    #[test]
    fn matches_the_reference_value_for_python_dot_org() {
        let e = uuid3("python.org", Some(&Uuid::namespace_dns())).unwrap();
        assert_eq!(e, "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    }

    /// Defaults to the dns namespace
    #[test]
    fn defaults_to_the_dns_namespace() {
        assert_eq!(
            uuid3("python.org", None).unwrap(),
            uuid3("python.org", Some(&Uuid::namespace_dns())).unwrap()
        );
    }

    /// Produces the same value for the same input
    #[test]
    fn produces_the_same_value_for_the_same_input() {
        for name in ["", "a", "hello world", "python.org"] {
            assert_eq!(uuid3(name, None).unwrap(), uuid3(name, None).unwrap());
        }
    }

    /// Separates names and namespaces
    #[test]
    fn separates_names_and_namespaces() {
        let by_dns = uuid3("example.org", Some(&Uuid::namespace_dns())).unwrap();
        let by_url = uuid3("example.org", Some(&Uuid::namespace_url())).unwrap();
        let other_name = uuid3("example.com", Some(&Uuid::namespace_dns())).unwrap();
        assert_ne!(by_dns, by_url);
        assert_ne!(by_dns, other_name);
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for i in 0..100i64 {
            let e = uuid3(i, None).unwrap();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 3);
        }
    }

    /// Hashes an integer like its decimal text
    #[test]
    fn hashes_an_integer_like_its_decimal_text() {
        assert_eq!(uuid3(42i64, None).unwrap(), uuid3("42", None).unwrap());
    }

    /// Rejects a thunk that yields nothing
    #[test]
    fn rejects_a_thunk_that_yields_nothing() {
        let input = HashInput::Lazy(Box::new(|| None));
        assert!(matches!(uuid3(input, None), Err(Error::UnhashableValue)));
    }
}
