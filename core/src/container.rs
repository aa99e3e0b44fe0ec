//! # Shipping Containers
//!
//! The base container and the traits every variant implements.
//!
//! * [`ShippingContainer`] covers identity, dimensions, contents and volume.
//! * [`Refrigerated`] adds a bounded temperature with a Fahrenheit view.
//! * [`Construct`] is the single constructor contract plus the `create_empty` and
//!   `create_with_items` conveniences, which forward variant-specific parameters
//!   (a temperature for refrigerated variants) untouched.

pub mod heated;
pub mod refrigerated;

use shipr_common::error::ContainerError;
use shipr_common::identity::{Category, IdentityFormatError};
use shipr_common::temperature::{self, TemperatureError, TemperatureRange};

use crate::issuer::{Identity, Issuer};

pub use heated::HeatedRefrigeratedContainer;
pub use refrigerated::RefrigeratedContainer;

pub const HEIGHT_FT: f64 = 8.5;
pub const WIDTH_FT: f64 = 8.0;

pub trait ShippingContainer {
    type Item;

    /// Identity code assigned at construction.
    fn bic(&self) -> &str;
    fn serial(&self) -> u64;
    fn length_ft(&self) -> f64;
    fn contents(&self) -> Option<&[Self::Item]>;
    fn contents_mut(&mut self) -> &mut Option<Vec<Self::Item>>;
    fn volume_ft3(&self) -> f64;

    fn set_contents(&mut self, contents: Option<Vec<Self::Item>>) {
        *self.contents_mut() = contents;
    }

    /// True when contents are absent or an empty list.
    fn is_empty(&self) -> bool {
        self.contents().is_none_or(|items| items.is_empty())
    }
}

pub trait Refrigerated: ShippingContainer {
    fn celsius(&self) -> f64;

    /// Stores `celsius` if it lies inside [`temperature_range`](Self::temperature_range).
    fn set_celsius(&mut self, celsius: f64) -> Result<(), TemperatureError>;

    fn temperature_range(&self) -> TemperatureRange;

    fn fahrenheit(&self) -> f64 {
        temperature::celsius_to_fahrenheit(self.celsius())
    }

    /// Converts to Celsius and goes through [`set_celsius`](Self::set_celsius).
    fn set_fahrenheit(&mut self, fahrenheit: f64) -> Result<(), TemperatureError> {
        self.set_celsius(temperature::fahrenheit_to_celsius(fahrenheit))
    }
}

pub trait Construct: ShippingContainer + Sized {
    /// Extra constructor inputs beyond owner code, length and contents.
    type Params;

    /// Category marker embedded in the identity code, `None` for the formatter default.
    const CATEGORY: Option<Category>;

    /// Issues exactly one serial and one identity code. Fails without
    /// returning a container if any input is rejected.
    fn construct(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        contents: Option<Vec<Self::Item>>,
        params: Self::Params,
    ) -> Result<Self, ContainerError>;

    fn create_empty(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        params: Self::Params,
    ) -> Result<Self, ContainerError> {
        Self::construct(issuer, owner_code, length_ft, None, params)
    }

    fn create_with_items<I>(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        items: I,
        params: Self::Params,
    ) -> Result<Self, ContainerError>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let contents: Vec<Self::Item> = items.into_iter().collect();
        Self::construct(issuer, owner_code, length_ft, Some(contents), params)
    }
}

/// Ambient (unrefrigerated) container.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T> {
    bic: String,
    serial: u64,
    length_ft: f64,
    contents: Option<Vec<T>>,
}

impl<T> Container<T> {
    /// Shared by every variant so each one issues its own category marker.
    pub(crate) fn issue(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        contents: Option<Vec<T>>,
        category: Option<Category>,
    ) -> Result<Self, IdentityFormatError> {
        let Identity { serial, code } = issuer.issue(owner_code, category)?;
        Ok(Self {
            bic: code,
            serial,
            length_ft,
            contents,
        })
    }
}

impl<T> ShippingContainer for Container<T> {
    type Item = T;

    fn bic(&self) -> &str {
        &self.bic
    }

    fn serial(&self) -> u64 {
        self.serial
    }

    fn length_ft(&self) -> f64 {
        self.length_ft
    }

    fn contents(&self) -> Option<&[T]> {
        self.contents.as_deref()
    }

    fn contents_mut(&mut self) -> &mut Option<Vec<T>> {
        &mut self.contents
    }

    fn volume_ft3(&self) -> f64 {
        HEIGHT_FT * WIDTH_FT * self.length_ft
    }
}

impl<T> Construct for Container<T> {
    type Params = ();

    const CATEGORY: Option<Category> = None;

    fn construct(
        issuer: &Issuer,
        owner_code: &str,
        length_ft: f64,
        contents: Option<Vec<T>>,
        _params: (),
    ) -> Result<Self, ContainerError> {
        Ok(Self::issue(issuer, owner_code, length_ft, contents, Self::CATEGORY)?)
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
