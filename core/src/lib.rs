pub mod container;
pub mod issuer;
pub mod registry;

pub use container::{
    Construct, Container, HeatedRefrigeratedContainer, Refrigerated, RefrigeratedContainer,
    ShippingContainer,
};
pub use issuer::Issuer;
pub use registry::SerialRegistry;
