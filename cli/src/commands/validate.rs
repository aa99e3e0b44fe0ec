use colored::*;
use shipr_common::config::Config;
use shipr_common::identity::{BicCode, IdentityFormatError};
use shipr_common::success;
use tracing::warn;

use crate::sprint;

pub fn validate(codes: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut invalid: usize = 0;

    for code in codes {
        match check(code) {
            Ok(bic) => match cfg.quiet {
                2.. => sprint!(bic.as_str()),
                _ => success!(
                    "{} is valid (owner {}, category {}, serial {})",
                    bic.as_str().green().bold(),
                    bic.owner_code(),
                    bic.category(),
                    bic.serial()
                ),
            },
            Err(e) => {
                invalid += 1;
                warn!("{}: {e}", code.red());
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} codes are invalid", codes.len());
    }
    Ok(())
}

/// Accepts surrounding whitespace and lowercase input.
fn check(code: &str) -> Result<BicCode, IdentityFormatError> {
    code.trim().to_ascii_uppercase().parse()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
