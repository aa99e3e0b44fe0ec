use anyhow::Context;
use colored::*;
use shipr_common::config::Config;
use shipr_common::error::ContainerError;
use shipr_common::success;
use shipr_common::temperature;
use shipr_core::container::{
    Construct, Container, HeatedRefrigeratedContainer, RefrigeratedContainer, ShippingContainer,
};
use shipr_core::Issuer;

use crate::commands::{CreateArgs, Kind};
use crate::sprint;
use crate::terminal::format::{self, Detail};
use crate::terminal::print;

pub fn create(args: CreateArgs, cfg: &Config) -> anyhow::Result<()> {
    let issuer: Issuer = Issuer::global();
    let celsius: Option<f64> = requested_celsius(&args);

    if args.kind == Kind::Base && celsius.is_some() {
        anyhow::bail!("temperature only applies to refrigerated and heated containers");
    }

    for idx in 0..args.count {
        let (bic, details): (String, Vec<Detail>) = match args.kind {
            Kind::Base => {
                let container: Container<String> = build(&issuer, &args, ())?;
                (container.bic().to_string(), format::container_details(&container))
            }
            Kind::Refrigerated => {
                let celsius: f64 = require_celsius(celsius)?;
                let container: RefrigeratedContainer<String> = build(&issuer, &args, celsius)?;
                let mut details = format::container_details(&container);
                details.extend(format::temperature_details(&container));
                (container.bic().to_string(), details)
            }
            Kind::Heated => {
                let celsius: f64 = require_celsius(celsius)?;
                let container: HeatedRefrigeratedContainer<String> =
                    build(&issuer, &args, celsius)?;
                let mut details = format::container_details(&container);
                details.extend(format::temperature_details(&container));
                (container.bic().to_string(), details)
            }
        };

        report(idx, &bic, details, cfg);
    }

    if cfg.quiet < 2 {
        let unit: &str = if args.count == 1 { "container" } else { "containers" };
        success!("{} {unit} created", args.count.to_string().green().bold());
    }
    Ok(())
}

/// Temperature from whichever of `--celsius` or `--fahrenheit` was given.
fn requested_celsius(args: &CreateArgs) -> Option<f64> {
    args.celsius
        .or_else(|| args.fahrenheit.map(temperature::fahrenheit_to_celsius))
}

fn require_celsius(celsius: Option<f64>) -> anyhow::Result<f64> {
    celsius.context("refrigerated containers need --celsius or --fahrenheit")
}

fn build<C>(issuer: &Issuer, args: &CreateArgs, params: C::Params) -> Result<C, ContainerError>
where
    C: Construct<Item = String>,
{
    if args.items.is_empty() {
        C::create_empty(issuer, &args.owner_code, args.length_ft, params)
    } else {
        C::create_with_items(
            issuer,
            &args.owner_code,
            args.length_ft,
            args.items.iter().cloned(),
            params,
        )
    }
}

fn report(idx: usize, bic: &str, details: Vec<Detail>, cfg: &Config) {
    match cfg.quiet {
        2.. => sprint!(bic),
        _ => {
            if idx > 0 {
                sprint!();
            }
            print::tree_head(idx, bic);
            print::as_tree_one_level(details);
        }
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
