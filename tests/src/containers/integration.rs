use std::collections::BTreeSet;

use proptest::prelude::*;
use shipr_common::error::ContainerError;
use shipr_common::temperature::TemperatureError;
use shipr_core::container::{
    Construct, Container, HeatedRefrigeratedContainer, Refrigerated, RefrigeratedContainer,
    ShippingContainer,
};
use shipr_core::{Issuer, registry};

/// Serials are shared by every variant and come out in construction order.
#[test]
fn serials_are_contiguous_across_variants() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::isolated();
    let mut serials: Vec<u64> = Vec::new();

    for round in 0..10 {
        let base: Container<String> = Container::create_empty(&issuer, "YML", 20.0, ())?;
        serials.push(base.serial());

        let reefer: RefrigeratedContainer<String> =
            RefrigeratedContainer::create_with_items(&issuer, "YML", 40.0, ["ice".to_string()], -1.0)?;
        serials.push(reefer.serial());

        if round % 2 == 0 {
            let heated: HeatedRefrigeratedContainer<String> =
                HeatedRefrigeratedContainer::create_empty(&issuer, "YML", 40.0, -5.0)?;
            serials.push(heated.serial());
        }
    }

    let expected: Vec<u64> = (1337..1337 + serials.len() as u64).collect();
    assert_eq!(serials, expected);
    Ok(())
}

/// Constructions rejected on temperature still use up their serial.
#[test]
fn rejected_constructions_consume_serials() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::isolated();

    let first: Container<()> = Container::create_empty(&issuer, "YML", 20.0, ())?;
    assert!(RefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, 5.0).is_err());
    assert!(HeatedRefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, -25.0).is_err());
    let second: RefrigeratedContainer<()> =
        RefrigeratedContainer::create_empty(&issuer, "YML", 20.0, 4.0)?;

    assert_eq!(first.serial(), 1337);
    assert_eq!(second.serial(), 1340);
    assert_eq!(issuer.registry().peek(), 1341);
    Ok(())
}

/// The process-wide issuer only ever moves forward.
#[test]
fn global_issuer_is_strictly_increasing() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::global();
    let before: u64 = registry::global().peek();
    assert!(before >= registry::FIRST_SERIAL);

    let a: Container<()> = Container::create_empty(&issuer, "CSQ", 20.0, ())?;
    let b: RefrigeratedContainer<()> = RefrigeratedContainer::create_empty(&issuer, "CSQ", 20.0, 0.0)?;
    let c: Container<()> = Container::create_empty(&Issuer::default(), "CSQ", 20.0, ())?;

    assert!(a.serial() >= before);
    assert!(b.serial() > a.serial());
    assert!(c.serial() > b.serial());
    Ok(())
}

#[test]
fn refrigerated_boundaries() {
    let issuer: Issuer = Issuer::isolated();

    assert!(matches!(
        RefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, 5.0),
        Err(ContainerError::Temperature(TemperatureError::TooHot { .. }))
    ));
    assert!(RefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, 4.0).is_ok());
}

#[test]
fn heated_refrigerated_boundaries() {
    let issuer: Issuer = Issuer::isolated();

    assert!(matches!(
        HeatedRefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, -25.0),
        Err(ContainerError::Temperature(TemperatureError::TooCold { .. }))
    ));
    assert!(HeatedRefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, -20.0).is_ok());
    assert!(matches!(
        HeatedRefrigeratedContainer::<()>::create_empty(&issuer, "YML", 20.0, 5.0),
        Err(ContainerError::Temperature(TemperatureError::TooHot { .. }))
    ));
}

/// Works with any container that has a temperature.
fn cool_down<C: Refrigerated>(container: &mut C, fahrenheit: f64) -> Result<f64, TemperatureError> {
    container.set_fahrenheit(fahrenheit)?;
    Ok(container.celsius())
}

#[test]
fn refrigerated_variants_share_accessors() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::isolated();
    let mut reefer: RefrigeratedContainer<()> =
        RefrigeratedContainer::create_empty(&issuer, "YML", 20.0, 0.0)?;
    let mut heated: HeatedRefrigeratedContainer<()> =
        HeatedRefrigeratedContainer::create_empty(&issuer, "YML", 20.0, 0.0)?;

    // -40 is the same on both scales
    assert_eq!(cool_down(&mut reefer, -40.0)?, -40.0);
    assert!(matches!(
        cool_down(&mut heated, -40.0),
        Err(TemperatureError::TooCold { .. })
    ));
    assert_eq!(heated.celsius(), 0.0);
    Ok(())
}

#[test]
fn contents_survive_in_order() -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::isolated();
    let items: BTreeSet<&str> = BTreeSet::from(["apples", "bananas", "cherries"]);

    let mut container: HeatedRefrigeratedContainer<&str> =
        HeatedRefrigeratedContainer::create_with_items(&issuer, "YML", 40.0, items, 2.0)?;
    assert_eq!(
        container.contents(),
        Some(&["apples", "bananas", "cherries"][..])
    );

    container.set_contents(None);
    assert!(container.is_empty());
    Ok(())
}

proptest! {
    #[test]
    fn base_volume_formula(length in 1.0f64..100.0) {
        let issuer = Issuer::isolated();
        let container: Container<()> = Container::create_empty(&issuer, "YML", length, ()).unwrap();
        prop_assert_eq!(container.volume_ft3(), 8.5 * 8.0 * length);
    }

    #[test]
    fn refrigerated_volume_formula(length in 1.0f64..100.0) {
        let issuer = Issuer::isolated();
        let reefer: RefrigeratedContainer<()> =
            RefrigeratedContainer::create_empty(&issuer, "YML", length, 0.0).unwrap();
        let heated: HeatedRefrigeratedContainer<()> =
            HeatedRefrigeratedContainer::create_empty(&issuer, "YML", length, 0.0).unwrap();
        prop_assert_eq!(reefer.volume_ft3(), 8.5 * 8.0 * length - 100.0);
        prop_assert_eq!(heated.volume_ft3(), reefer.volume_ft3());
    }

    #[test]
    fn fahrenheit_celsius_round_trip(f in -200.0f64..39.2, c in -200.0f64..=4.0) {
        let issuer = Issuer::isolated();
        let mut reefer: RefrigeratedContainer<()> =
            RefrigeratedContainer::create_empty(&issuer, "YML", 20.0, 0.0).unwrap();

        reefer.set_fahrenheit(f).unwrap();
        prop_assert!((reefer.celsius() - (f - 32.0) * 5.0 / 9.0).abs() < 1e-9);

        reefer.set_celsius(c).unwrap();
        prop_assert!((reefer.fahrenheit() - (c * 9.0 / 5.0 + 32.0)).abs() < 1e-9);
    }
}
