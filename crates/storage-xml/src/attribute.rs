//! Named attributes with formatting flags

use std::fmt;

/// Formatting flags for numeric attribute values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct XmlAttributeFlags(u8);

impl XmlAttributeFlags {
    /// Plain decimal formatting
    pub const NONE: Self = Self(0);
    /// `0x`-prefixed lowercase hexadecimal
    pub const HEX: Self = Self(1);

    /// Check whether all bits of `other` are set
    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for XmlAttributeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A single `name="value"` pair, already formatted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
    name: String,
    value: String,
}

impl XmlAttribute {
    /// Create an attribute from any displayable value
    pub fn new(name: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Create a numeric attribute honoring `flags`
    pub fn with_flags(name: impl Into<String>, value: u64, flags: XmlAttributeFlags) -> Self {
        let value = if flags.contains(XmlAttributeFlags::HEX) {
            format!("0x{:x}", value)
        } else {
            value.to_string()
        };
        Self {
            name: name.into(),
            value,
        }
    }

    /// Create a boolean attribute (`true`/`false`)
    pub fn flag(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, value)
    }

    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formatted, unescaped value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for XmlAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}
