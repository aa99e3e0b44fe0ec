use colored::*;
use shipr_common::config::Config;
use shipr_common::temperature::{self, MAX_CELSIUS, MIN_CELSIUS};
use shipr_core::container::refrigerated::FRIDGE_VOLUME_FT3;
use shipr_core::container::{HEIGHT_FT, WIDTH_FT};
use shipr_core::registry::FIRST_SERIAL;

use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::tree_head(0, "Dimensions");
    print::as_tree_one_level(dimensions());

    print::tree_head(1, "Temperature");
    print::as_tree_one_level(temperatures());

    print::tree_head(2, "Serials");
    print::as_tree_one_level(serials());

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&format!("{}", "identity codes follow ISO 6346".color(colors::TEXT_DEFAULT)));
    }
    Ok(())
}

fn dimensions() -> Vec<Detail> {
    vec![
        ("Height".to_string(), format!("{HEIGHT_FT} ft").normal()),
        ("Width".to_string(), format!("{WIDTH_FT} ft").normal()),
        (
            "Fridge".to_string(),
            format!("{FRIDGE_VOLUME_FT3} ft³ taken by the cooling unit").color(colors::VOLUME),
        ),
    ]
}

fn temperatures() -> Vec<Detail> {
    let bound = |celsius: f64| -> ColoredString {
        format!(
            "{} / {}",
            format::celsius_str(celsius),
            format::fahrenheit_str(temperature::celsius_to_fahrenheit(celsius))
        )
        .color(colors::COLD)
    };

    vec![
        ("Maximum".to_string(), bound(MAX_CELSIUS)),
        ("Minimum".to_string(), bound(MIN_CELSIUS)),
    ]
}

fn serials() -> Vec<Detail> {
    vec![("First".to_string(), FIRST_SERIAL.to_string().normal())]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
