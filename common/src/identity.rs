//! # Container Identity Codes
//!
//! Models the BIC code (ISO 6346) that identifies a shipping container.
//!
//! A code is eleven characters long and made of:
//! * A three-letter owner code (e.g. `CSQ`).
//! * A one-letter equipment category (e.g. `U` for freight, `R` for reefers).
//! * A six-digit serial number.
//! * A check digit computed over the first ten characters.
//!
//! Formatting is hidden behind [`IdentityFormatter`] so containers never depend on
//! a concrete algorithm and only ever see the formatted string. [`iso6346::Iso6346`]
//! is the implementation shipped with the crate. [`BicCode`] is the parsed, validated
//! form used when a code has to be taken apart again.

pub mod iso6346;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use iso6346::Iso6346;

/// Minimum width of the serial part of an identity code.
pub const SERIAL_WIDTH: usize = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityFormatError {
    #[error("invalid owner code '{0}': expected three uppercase letters")]
    InvalidOwnerCode(String),

    #[error("invalid category identifier '{0}'")]
    InvalidCategory(char),

    #[error("invalid serial number '{0}': expected six digits")]
    InvalidSerial(String),

    #[error("invalid code length {0}: expected 11 characters")]
    InvalidLength(usize),

    #[error("code '{0}' contains non-ASCII characters")]
    NonAscii(String),

    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { expected: u8, found: char },
}

/// Equipment category identifier, the fourth character of a code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Freight container.
    #[default]
    Freight,
    /// Detachable freight container-related equipment.
    Detachable,
    /// Trailer or chassis.
    Trailer,
    /// Refrigerated container.
    Refrigerated,
}

impl Category {
    pub fn as_char(self) -> char {
        match self {
            Category::Freight => 'U',
            Category::Detachable => 'J',
            Category::Trailer => 'Z',
            Category::Refrigerated => 'R',
        }
    }
}

impl TryFrom<char> for Category {
    type Error = IdentityFormatError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Category::Freight),
            'J' => Ok(Category::Detachable),
            'Z' => Ok(Category::Trailer),
            'R' => Ok(Category::Refrigerated),
            other => Err(IdentityFormatError::InvalidCategory(other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Three uppercase ASCII letters naming the organization that owns a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerCode(String);

impl OwnerCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OwnerCode {
    type Err = IdentityFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Self(s.to_string()))
        } else {
            Err(IdentityFormatError::InvalidOwnerCode(s.to_string()))
        }
    }
}

impl fmt::Display for OwnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A complete, validated identity code such as `CSQU3054383`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BicCode(String);

impl BicCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn owner_code(&self) -> &str {
        &self.0[..3]
    }

    pub fn category(&self) -> Category {
        // Validated on construction.
        Category::try_from(self.0.as_bytes()[3] as char).unwrap_or_default()
    }

    pub fn serial(&self) -> &str {
        &self.0[4..10]
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[10] - b'0'
    }
}

impl FromStr for BicCode {
    type Err = IdentityFormatError;

    /// Parses and validates an existing code, including its check digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(IdentityFormatError::NonAscii(s.to_string()));
        }
        if s.len() != 11 {
            return Err(IdentityFormatError::InvalidLength(s.len()));
        }

        let owner: OwnerCode = s[..3].parse()?;
        let category: Category = Category::try_from(s.as_bytes()[3] as char)?;
        let serial: &str = &s[4..10];
        let found: char = s.as_bytes()[10] as char;

        let expected: BicCode = Iso6346::encode(owner.as_str(), serial, Some(category))?;
        if expected.as_str() != s {
            return Err(IdentityFormatError::CheckDigitMismatch {
                expected: expected.check_digit(),
                found,
            });
        }

        Ok(expected)
    }
}

impl fmt::Display for BicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BicCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Defines the contract for turning owner code, serial and category into an identity code.
pub trait IdentityFormatter {
    /// Builds a full identity code.
    ///
    /// # Arguments
    /// * `owner_code` - Three-letter owner code.
    /// * `serial` - Zero-padded serial number.
    /// * `category` - Equipment category, `None` for the formatter's default.
    ///
    /// # Returns
    /// * `Ok(String)` - The formatted code, deterministic for the same inputs.
    /// * `Err(IdentityFormatError)` - If any input is malformed.
    fn create(
        &self,
        owner_code: &str,
        serial: &str,
        category: Option<Category>,
    ) -> Result<String, IdentityFormatError>;
}

/// Zero-pads `serial` to [`SERIAL_WIDTH`] digits and hands it to `formatter`.
pub fn build_identity(
    formatter: &dyn IdentityFormatter,
    owner_code: &str,
    serial: u64,
    category: Option<Category>,
) -> Result<String, IdentityFormatError> {
    let padded: String = format!("{serial:0width$}", width = SERIAL_WIDTH);
    formatter.create(owner_code, &padded, category)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
