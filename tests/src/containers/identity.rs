use std::sync::Arc;

use shipr_common::error::ContainerError;
use shipr_common::identity::{BicCode, Category, IdentityFormatError, IdentityFormatter};
use shipr_core::container::{
    Construct, Container, HeatedRefrigeratedContainer, RefrigeratedContainer, ShippingContainer,
};
use shipr_core::{Issuer, SerialRegistry};

/// Same owner and length, different category marker.
#[test]
fn refrigerated_codes_carry_marker() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::isolated();

    let base: Container<()> = Container::create_empty(&issuer, "YML", 40.0, ())?;
    let reefer: RefrigeratedContainer<()> =
        RefrigeratedContainer::create_empty(&issuer, "YML", 40.0, 1.0)?;
    let heated: HeatedRefrigeratedContainer<()> =
        HeatedRefrigeratedContainer::create_empty(&issuer, "YML", 40.0, 1.0)?;

    let base_code: BicCode = base.bic().parse()?;
    let reefer_code: BicCode = reefer.bic().parse()?;
    let heated_code: BicCode = heated.bic().parse()?;

    assert_eq!(base_code.category(), Category::Freight);
    assert_eq!(reefer_code.category(), Category::Refrigerated);
    assert_eq!(heated_code.category(), Category::Refrigerated);

    assert_eq!(base_code.owner_code(), "YML");
    assert_eq!(base_code.serial(), "001337");
    assert_eq!(reefer_code.serial(), "001338");
    assert_eq!(heated_code.serial(), "001339");
    Ok(())
}

#[test]
fn malformed_owner_code_is_propagated() {
    let issuer: Issuer = Issuer::isolated();

    let result = RefrigeratedContainer::<()>::create_empty(&issuer, "Y1L", 40.0, 1.0);
    assert_eq!(
        result,
        Err(ContainerError::Identity(IdentityFormatError::InvalidOwnerCode(
            "Y1L".to_string()
        )))
    );
}

#[test]
fn serial_overflowing_six_digits_fails_to_format() {
    let issuer: Issuer = Issuer::new(
        Arc::new(SerialRegistry::new(999_999)),
        Arc::new(shipr_common::identity::Iso6346),
    );

    let last: Container<()> = Container::create_empty(&issuer, "YML", 20.0, ()).unwrap();
    assert_eq!(last.bic(), "YMLU9999991");

    let result = Container::<()>::create_empty(&issuer, "YML", 20.0, ());
    assert!(matches!(
        result,
        Err(ContainerError::Identity(IdentityFormatError::InvalidSerial(_)))
    ));
}

/// Codes are only ever produced by the formatter the issuer was given.
struct PrefixFormatter;

impl IdentityFormatter for PrefixFormatter {
    fn create(
        &self,
        owner_code: &str,
        serial: &str,
        category: Option<Category>,
    ) -> Result<String, IdentityFormatError> {
        Ok(match category {
            Some(c) => format!("{owner_code}/{c}/{serial}"),
            None => format!("{owner_code}/{serial}"),
        })
    }
}

#[test]
fn formatter_is_opaque_to_containers() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::new(Arc::new(SerialRegistry::new(5)), Arc::new(PrefixFormatter));

    let base: Container<()> = Container::create_empty(&issuer, "anything", 20.0, ())?;
    let heated: HeatedRefrigeratedContainer<()> =
        HeatedRefrigeratedContainer::create_empty(&issuer, "anything", 20.0, 0.0)?;

    assert_eq!(base.bic(), "anything/000005");
    assert_eq!(heated.bic(), "anything/R/000006");
    Ok(())
}
