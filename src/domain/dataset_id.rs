use serde::{Serialize, Serializer};

use super::AppError;
use super::validation::validate_identifier;

/// A validated dataset identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetId(String);

impl DatasetId {
    /// Validate and create a new `DatasetId`.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_identifier(id, true) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidDatasetId(id.to_string()))
        }
    }

    /// Identifier of a dataset type.
    ///
    /// `DatasetKind::ID` values are trusted as written; an invalid one would
    /// simply never match a registry entry.
    pub fn of<D: DatasetKind + ?Sized>() -> Self {
        Self(D::ID.to_string())
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DatasetId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for DatasetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A dataset-constructing type the registry can be queried with.
///
/// The registry never constructs the dataset; it only hands back the root
/// directory the type should be opened from.
pub trait DatasetKind {
    /// Registry key for this dataset type.
    const ID: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cifar10;

    impl DatasetKind for Cifar10 {
        const ID: &'static str = "cifar10";
    }

    #[test]
    fn valid_id_with_dots_and_dashes() {
        assert!(DatasetId::new("imagenet-1k.v2").is_ok());
    }

    #[test]
    fn empty_id_is_invalid() {
        assert!(matches!(DatasetId::new(""), Err(AppError::InvalidDatasetId(_))));
    }

    #[test]
    fn slash_in_id_is_invalid() {
        assert!(DatasetId::new("torchvision/mnist").is_err());
    }

    #[test]
    fn id_of_type_uses_its_constant() {
        assert_eq!(DatasetId::of::<Cifar10>(), DatasetId::new("cifar10").unwrap());
    }
}
