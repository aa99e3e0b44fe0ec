use shipr_common::error::ContainerError;
use shipr_common::identity::Category;
use shipr_common::temperature::{TemperatureError, TemperatureRange};
use tracing::warn;

use super::{Construct, Container, Refrigerated, ShippingContainer};
use crate::issuer::Issuer;

/// Space taken up by the refrigeration unit.
pub const FRIDGE_VOLUME_FT3: f64 = 100.0;

/// Container with a cooling unit and a temperature capped at
/// [`MAX_CELSIUS`](shipr_common::temperature::MAX_CELSIUS).
#[derive(Debug, Clone, PartialEq)]
pub struct RefrigeratedContainer<T> {
    base: Container<T>,
    celsius: f64,
    range: TemperatureRange,
}

impl<T> RefrigeratedContainer<T> {
    /// Builds a refrigerated container bounded by `range`.
    ///
    /// The base container (serial and identity) is built first, then the temperature
    /// goes through the same path [`set_celsius`](Refrigerated::set_celsius) uses.
    /// A rejected temperature still consumes the serial.
    pub(crate) fn with_range(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        contents: Option<Vec<T>>,
        celsius: f64,
        range: TemperatureRange,
    ) -> Result<Self, ContainerError> {
        let base: Container<T> =
            Container::issue(issuer, owner_code, length_ft, contents, Self::CATEGORY)?;
        let celsius: f64 = accept(&range, celsius)?;

        Ok(Self {
            base,
            celsius,
            range,
        })
    }

    /// The ambient container this one is built on.
    pub fn base(&self) -> &Container<T> {
        &self.base
    }
}

fn accept(range: &TemperatureRange, celsius: f64) -> Result<f64, TemperatureError> {
    range.check(celsius).inspect_err(|e| {
        warn!(celsius, "rejected temperature: {e}");
    })
}

impl<T> ShippingContainer for RefrigeratedContainer<T> {
    type Item = T;

    fn bic(&self) -> &str {
        self.base.bic()
    }

    fn serial(&self) -> u64 {
        self.base.serial()
    }

    fn length_ft(&self) -> f64 {
        self.base.length_ft()
    }

    fn contents(&self) -> Option<&[T]> {
        self.base.contents()
    }

    fn contents_mut(&mut self) -> &mut Option<Vec<T>> {
        self.base.contents_mut()
    }

    fn volume_ft3(&self) -> f64 {
        self.base.volume_ft3() - FRIDGE_VOLUME_FT3
    }
}

impl<T> Refrigerated for RefrigeratedContainer<T> {
    fn celsius(&self) -> f64 {
        self.celsius
    }

    fn set_celsius(&mut self, celsius: f64) -> Result<(), TemperatureError> {
        self.celsius = accept(&self.range, celsius)?;
        Ok(())
    }

    fn temperature_range(&self) -> TemperatureRange {
        self.range
    }
}

impl<T> Construct for RefrigeratedContainer<T> {
    /// Initial temperature in Celsius.
    type Params = f64;

    const CATEGORY: Option<Category> = Some(Category::Refrigerated);

    fn construct(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        contents: Option<Vec<T>>,
        celsius: f64,
    ) -> Result<Self, ContainerError> {
        Self::with_range(
            issuer,
            owner_code,
            length_ft,
            contents,
            celsius,
            TemperatureRange::refrigerated(),
        )
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
