//! Utility module with tonality's errors.
//!
//! Color computations are total and never fail. Errors only arise at the
//! crate's textual edges, when parsing colors or looking up roles and variants
//! by name.

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal number. For example, `#efg`
    /// has a malformed third component.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have 3, 6, or 8 hexadecimal digits")
            }
            MalformedHex => {
                f.write_str("color format components should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An unknown color role.
///
/// This error results from looking up a
/// [`MaterialRole`](crate::dynamic::MaterialRole) by a name that does not
/// correspond to any role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRoleError {
    pub name: String,
}

impl UnknownRoleError {
    /// Create a new unknown role error.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl std::fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "`{}` does not name a color role", self.name)
    }
}

impl std::error::Error for UnknownRoleError {}

/// An unknown scheme variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariantError {
    pub name: String,
}

impl UnknownVariantError {
    /// Create a new unknown variant error.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl std::fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "`{}` does not name a scheme variant", self.name)
    }
}

impl std::error::Error for UnknownVariantError {}
