use colored::*;
use shipr_common::temperature::TemperatureRange;
use shipr_core::container::{Refrigerated, ShippingContainer};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn celsius_str(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

pub fn fahrenheit_str(fahrenheit: f64) -> String {
    format!("{fahrenheit:.1}°F")
}

pub fn range_str(range: &TemperatureRange) -> String {
    match range.min() {
        Some(min) => format!("{} to {}", celsius_str(min), celsius_str(range.max())),
        None => format!("up to {}", celsius_str(range.max())),
    }
}

/// Identity, dimensions and contents shared by every kind of container.
pub fn container_details<C>(container: &C) -> Vec<Detail>
where
    C: ShippingContainer<Item = String>,
{
    let contents: ColoredString = match container.contents() {
        None => "empty".dimmed(),
        Some([]) => "none listed".dimmed(),
        Some(items) => items.join(", ").normal(),
    };

    vec![
        ("Serial".to_string(), container.serial().to_string().normal()),
        ("Length".to_string(), format!("{} ft", container.length_ft()).normal()),
        (
            "Volume".to_string(),
            format!("{:.1} ft³", container.volume_ft3()).color(colors::VOLUME),
        ),
        ("Contents".to_string(), contents),
    ]
}

pub fn temperature_details<C>(container: &C) -> Vec<Detail>
where
    C: Refrigerated,
{
    let reading: String = format!(
        "{} / {}",
        celsius_str(container.celsius()),
        fahrenheit_str(container.fahrenheit())
    );

    vec![
        ("Temperature".to_string(), reading.color(colors::COLD)),
        (
            "Allowed".to_string(),
            range_str(&container.temperature_range()).normal(),
        ),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
