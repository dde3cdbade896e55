//! Version 5 name-based UUID generation (SHA-1).

use crate::hash::{HashInput, Sha1Source};
use crate::{Error, Uuid, Variant};

/// Generates a version 5 UUID object.
///
/// The value is the SHA-1 digest of the namespace bytes followed by `name`,
/// truncated to 16 bytes, with the version and variant bits stamped on top.
/// A `None` namespace defaults to the DNS namespace.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid5("python.org", None)?;
/// assert_eq!(uuid, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # Ok::<(), rfc4122::Error>(())
/// ```
pub fn uuid5<'a>(
    name: impl Into<HashInput<'a>>,
    namespace: Option<&Uuid>,
) -> Result<Uuid, Error> {
    let namespace = namespace.cloned().unwrap_or_else(Uuid::namespace_dns);
    let mut uuid = Uuid::from_source(&mut Sha1Source::new(name, &namespace)?)?;
    uuid.set_version(5);
    uuid.set_variant(Variant::Rfc4122);
    Ok(uuid)
}

#[cfg(test)]
mod tests {
    use super::uuid5;
    use crate::{uuid3, Uuid, Variant};

    /// Matches the reference value for python dot org
    #[test]
    fn matches_the_reference_value_for_python_dot_org() {
        let e = uuid5("python.org", Some(&Uuid::namespace_dns())).unwrap();
        assert_eq!(e, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    }

    /// Defaults to the dns namespace
    #[test]
    fn defaults_to_the_dns_namespace() {
        assert_eq!(
            uuid5("python.org", None).unwrap(),
            uuid5("python.org", Some(&Uuid::namespace_dns())).unwrap()
        );
    }

    /// Differs from the md5 value for the same input
    #[test]
    fn differs_from_the_md5_value_for_the_same_input() {
        for name in ["", "python.org", "example.com"] {
            assert_ne!(uuid5(name, None).unwrap(), uuid3(name, None).unwrap());
        }
    }

    /// Spreads names across the standard namespaces
    #[test]
    fn spreads_names_across_the_standard_namespaces() {
        use std::collections::HashSet;
        let namespaces = [
            Uuid::namespace_dns(),
            Uuid::namespace_url(),
            Uuid::namespace_oid(),
            Uuid::namespace_x500(),
        ];
        let values: HashSet<Uuid> = namespaces
            .iter()
            .map(|ns| uuid5("example.org", Some(ns)).unwrap())
            .collect();
        assert_eq!(values.len(), namespaces.len());
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for i in 0..100i64 {
            let e = uuid5(i, None).unwrap();
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.version(), 5);
        }
    }
}
