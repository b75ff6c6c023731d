//! Attribute type tags

use std::fmt;
use std::str::FromStr;

/// The type tag of an attribute: the single key of its record.
///
/// ```
/// use keel_attribute::Tag;
///
/// assert_eq!("NS".parse::<Tag>().ok(), Some(Tag::NumberSet));
/// assert_eq!(Tag::Bool.as_str(), "BOOL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `S`: a string.
    String,
    /// `N`: a number, carried as its decimal text.
    Number,
    /// `BOOL`: a boolean.
    Bool,
    /// `NULL`: the null marker, always `true`.
    Null,
    /// `B`: base64-encoded binary.
    Binary,
    /// `SS`: a set of strings.
    StringSet,
    /// `NS`: a set of numbers, each as decimal text.
    NumberSet,
    /// `BS`: a set of base64-encoded binaries.
    BinarySet,
    /// `L`: a list of attributes.
    List,
    /// `M`: a map of attributes.
    Map,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::String,
        Self::Number,
        Self::Bool,
        Self::Null,
        Self::Binary,
        Self::StringSet,
        Self::NumberSet,
        Self::BinarySet,
        Self::List,
        Self::Map,
    ];

    /// The key this tag uses on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "S",
            Self::Number => "N",
            Self::Bool => "BOOL",
            Self::Null => "NULL",
            Self::Binary => "B",
            Self::StringSet => "SS",
            Self::NumberSet => "NS",
            Self::BinarySet => "BS",
            Self::List => "L",
            Self::Map => "M",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == key)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a key that is not an attribute tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute tag `{0}`")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::parse(key).ok_or_else(|| UnknownTag(key.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_their_key() {
        for tag in Tag::ALL {
            assert_eq!(Tag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn index_matches_position() {
        for (position, tag) in Tag::ALL.into_iter().enumerate() {
            assert_eq!(tag.index(), position);
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let error = "SSS".parse::<Tag>().unwrap_err();
        assert_eq!(error.to_string(), "unknown attribute tag `SSS`");
        assert_eq!(Tag::parse("s"), None);
    }
}
