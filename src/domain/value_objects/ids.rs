//! Strongly-typed identifiers for game assets

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a raw string could not be read as a UUID.
///
/// Length is checked before content, so a string of the wrong size always
/// reports its length rather than a format problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("invalid UUID length: {0}")]
    InvalidLength(usize),

    #[error("invalid UUID format")]
    InvalidFormat,
}

/// Parse a UUID in hyphenated, simple, braced or URN form.
pub fn parse_uuid(raw: &str) -> Result<Uuid, IdError> {
    match raw.len() {
        // simple, hyphenated, braced, urn:uuid:
        32 | 36 | 38 | 45 => Uuid::try_parse(raw).map_err(|_| IdError::InvalidFormat),
        n => Err(IdError::InvalidLength(n)),
    }
}

/// Behaviour shared by every asset identifier.
pub trait AssetId:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + From<Uuid> + Send + Sync + 'static
{
    fn as_uuid(&self) -> &Uuid;

    fn parse(raw: &str) -> Result<Self, IdError> {
        parse_uuid(raw).map(Self::from)
    }
}

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl AssetId for $name {
            fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(PlayerId);
define_id!(RoomId);
define_id!(ItemId);
define_id!(LinkId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_canonical_form() {
        let raw = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
        let id = RoomId::parse(raw).expect("valid uuid");
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_display_is_lowercase_hyphenated() {
        let id = PlayerId::parse("6BA7B8109DAD11D180B400C04FD430C8").expect("valid uuid");
        assert_eq!(id.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    }

    #[test]
    fn test_parse_reports_length_first() {
        assert_eq!(parse_uuid("not-a-uuid"), Err(IdError::InvalidLength(10)));
        assert_eq!(parse_uuid(""), Err(IdError::InvalidLength(0)));
        assert_eq!(
            IdError::InvalidLength(13).to_string(),
            "invalid UUID length: 13"
        );
    }

    #[test]
    fn test_parse_reports_bad_characters() {
        let raw = "zzzzzzzz-9dad-11d1-80b4-00c04fd430c8";
        assert_eq!(parse_uuid(raw), Err(IdError::InvalidFormat));
    }

    #[test]
    fn test_ids_compare_by_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(ItemId::from_uuid(uuid), ItemId::from(uuid));
        assert_ne!(ItemId::new(), ItemId::new());
    }
}
