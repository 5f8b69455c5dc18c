use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for objects owned by a single graph.
///
/// - `u32` keeps node handles small
/// - `NonZero` lets `Option<Id>` occupy the same space as `Id`, which matters
///   for per-slot connection storage
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

// Serialized form is the 0-based index, so spec files and sink output stay
// readable and independent of the NonZero offset trick.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::Id;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    impl Serialize for Id {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u32(self.index())
        }
    }

    impl<'de> Deserialize<'de> for Id {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let index = u32::deserialize(deserializer)?;
            if index == u32::MAX {
                return Err(de::Error::custom("id index out of range"));
            }
            Ok(Id::from_index(index))
        }
    }
}

/// Handle to an expression node inside one graph (no runtime cost).
pub type ExprId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for i in [0_u32, 1, 7, 513, 1_000_000] {
            assert_eq!(Id::from_index(i).index(), i);
        }
    }

    #[test]
    fn option_id_has_no_overhead() {
        // The NonZero niche: Option<Id> is as small as Id itself.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}
