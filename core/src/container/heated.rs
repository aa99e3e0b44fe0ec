use shipr_common::error::ContainerError;
use shipr_common::identity::Category;
use shipr_common::temperature::{TemperatureError, TemperatureRange};

use super::{Construct, Refrigerated, RefrigeratedContainer, ShippingContainer};
use crate::issuer::Issuer;

/// Refrigerated container that can also heat, keeping its temperature inside
/// `MIN_CELSIUS..=MAX_CELSIUS`.
///
/// Storage, the Fahrenheit view and volume are the refrigerated container's;
/// only the lower bound is added.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatedRefrigeratedContainer<T> {
    inner: RefrigeratedContainer<T>,
}

impl<T> HeatedRefrigeratedContainer<T> {
    pub fn as_refrigerated(&self) -> &RefrigeratedContainer<T> {
        &self.inner
    }

    pub fn into_refrigerated(self) -> RefrigeratedContainer<T> {
        self.inner
    }
}

impl<T> ShippingContainer for HeatedRefrigeratedContainer<T> {
    type Item = T;

    fn bic(&self) -> &str {
        self.inner.bic()
    }

    fn serial(&self) -> u64 {
        self.inner.serial()
    }

    fn length_ft(&self) -> f64 {
        self.inner.length_ft()
    }

    fn contents(&self) -> Option<&[T]> {
        self.inner.contents()
    }

    fn contents_mut(&mut self) -> &mut Option<Vec<T>> {
        self.inner.contents_mut()
    }

    fn volume_ft3(&self) -> f64 {
        self.inner.volume_ft3()
    }
}

impl<T> Refrigerated for HeatedRefrigeratedContainer<T> {
    fn celsius(&self) -> f64 {
        self.inner.celsius()
    }

    fn set_celsius(&mut self, celsius: f64) -> Result<(), TemperatureError> {
        self.inner.set_celsius(celsius)
    }

    fn temperature_range(&self) -> TemperatureRange {
        self.inner.temperature_range()
    }
}

impl<T> Construct for HeatedRefrigeratedContainer<T> {
    /// Initial temperature in Celsius.
    type Params = f64;

    const CATEGORY: Option<Category> = RefrigeratedContainer::<T>::CATEGORY;

    fn construct(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        contents: Option<Vec<T>>,
        celsius: f64,
    ) -> Result<Self, ContainerError> {
        let inner: RefrigeratedContainer<T> = RefrigeratedContainer::with_range(
            issuer,
            owner_code,
            length_ft,
            contents,
            celsius,
            TemperatureRange::heated(),
        )?;
        Ok(Self { inner })
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

#[cfg(test)]
mod tests {
    use super::*;

    fn heated(issuer: &Issuer, celsius: f64) -> Result<HeatedRefrigeratedContainer<()>, ContainerError> {
        HeatedRefrigeratedContainer::create_empty(issuer, "MAE", 40.0, celsius)
    }

    #[test]
    fn test_construct_bounds() {
        let issuer = Issuer::isolated();

        assert_eq!(
            heated(&issuer, -25.0),
            Err(ContainerError::Temperature(TemperatureError::TooCold {
                celsius: -25.0,
                min: -20.0
            }))
        );
        assert_eq!(
            heated(&issuer, 5.0),
            Err(ContainerError::Temperature(TemperatureError::TooHot {
                celsius: 5.0,
                max: 4.0
            }))
        );
        assert_eq!(heated(&issuer, -20.0).unwrap().celsius(), -20.0);
        assert_eq!(heated(&issuer, 4.0).unwrap().celsius(), 4.0);
    }

    #[test]
    fn test_set_celsius_checks_both_bounds() {
        let issuer = Issuer::isolated();
        let mut container = heated(&issuer, 0.0).unwrap();

        assert!(matches!(
            container.set_celsius(-20.5),
            Err(TemperatureError::TooCold { .. })
        ));
        assert!(matches!(
            container.set_celsius(4.5),
            Err(TemperatureError::TooHot { .. })
        ));
        assert_eq!(container.celsius(), 0.0);

        container.set_celsius(-12.0).unwrap();
        assert_eq!(container.celsius(), -12.0);
    }

    #[test]
    fn test_fahrenheit_goes_through_cold_check() {
        let issuer = Issuer::isolated();
        let mut container = heated(&issuer, 0.0).unwrap();

        // -4°F is exactly -20°C
        container.set_fahrenheit(-4.0).unwrap();
        assert_eq!(container.celsius(), -20.0);

        assert!(matches!(
            container.set_fahrenheit(-13.0),
            Err(TemperatureError::TooCold { .. })
        ));
    }

    #[test]
    fn test_shares_reefer_identity_and_volume() {
        let issuer = Issuer::isolated();
        let container = heated(&issuer, 0.0).unwrap();

        assert_eq!(container.bic(), "MAER0013370");
        assert_eq!(container.volume_ft3(), 8.5 * 8.0 * 40.0 - 100.0);
        assert_eq!(container.temperature_range(), TemperatureRange::heated());
        assert_eq!(
            container.as_refrigerated().temperature_range().min(),
            Some(-20.0)
        );
    }
}
