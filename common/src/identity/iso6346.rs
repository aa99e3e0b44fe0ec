use super::{BicCode, Category, IdentityFormatError, IdentityFormatter, OwnerCode, SERIAL_WIDTH};

/// Letter values used by the check digit: `A` is 10 and multiples of 11 are skipped.
const LETTER_VALUES: [u32; 26] = [
    10, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 23, 24, // A..M
    25, 26, 27, 28, 29, 30, 31, 32, 34, 35, 36, 37, 38, // N..Z
];

/// ISO 6346 identity formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iso6346;

impl Iso6346 {
    /// Validates the parts and appends the check digit.
    pub fn encode(
        owner_code: &str,
        serial: &str,
        category: Option<Category>,
    ) -> Result<BicCode, IdentityFormatError> {
        let owner: OwnerCode = owner_code.parse()?;

        if serial.len() != SERIAL_WIDTH || !serial.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentityFormatError::InvalidSerial(serial.to_string()));
        }

        let raw: String = format!("{}{}{}", owner, category.unwrap_or_default(), serial);
        let digit: u32 = check_digit(&raw);

        Ok(BicCode(format!("{raw}{digit}")))
    }
}

impl IdentityFormatter for Iso6346 {
    fn create(
        &self,
        owner_code: &str,
        serial: &str,
        category: Option<Category>,
    ) -> Result<String, IdentityFormatError> {
        Self::encode(owner_code, serial, category).map(|code| code.to_string())
    }
}

/// Computes the check digit over the ten leading characters of a code.
///
/// Each character value is weighted by `2^position`; the sum is reduced modulo 11
/// and a remainder of 10 becomes 0.
fn check_digit(raw: &str) -> u32 {
    let sum: u32 = raw
        .chars()
        .take(10)
        .enumerate()
        .map(|(idx, c)| char_value(c) << idx)
        .sum();
    sum % 11 % 10
}

fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => LETTER_VALUES[(c as u8 - b'A') as usize],
        _ => 0,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
