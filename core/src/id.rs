use {
    rand::{rngs::StdRng, RngCore, SeedableRng},
    std::fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// The length of identifiers, in bytes.
pub const ID_LENGTH: usize = 16;

/// Unique identifier of an entry.
///
/// Identifiers are assigned once when an entry is created and never change afterwards. They carry no
/// meaning beyond uniqueness; sorting uses them only as the final tie-break so that two distinct entries
/// never compare as equal.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntryId {
    id: String,
}

impl Debug for EntryId {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "EntryId({:?})", self.id)
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(&self.id)
    }
}

impl EntryId {
    /// Generate a new random id, rendered as lowercase hex.
    ///
    /// Hex digits sort in the same order as the bytes they encode, so comparing the rendered ids
    /// is the same as comparing the raw bytes.
    pub fn random_id() -> Self {
        let mut bytes = [0u8; ID_LENGTH];
        StdRng::from_entropy().fill_bytes(&mut bytes);

        let mut id = String::with_capacity(ID_LENGTH * 2);
        for b in bytes {
            id.push_str(&format!("{b:02x}"));
        }

        Self {
            id,
        }
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self {
            id: id.to_string(),
        }
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self {
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, test_log::test};

    #[test]
    fn test_random_id() {
        let a = EntryId::random_id();
        let b = EntryId::random_id();
        assert_eq!(a.as_str().len(), ID_LENGTH * 2);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_ordering() {
        let a = EntryId::from("0e4f01f9665661c1754333c976321509");
        let b = EntryId::from("0e4f01f9665661c1754333c97632152a");
        assert!(a < b);
        assert_eq!(a.to_string(), "0e4f01f9665661c1754333c976321509");
        assert_eq!(format!("{a:?}"), "EntryId(\"0e4f01f9665661c1754333c976321509\")");
    }
}
