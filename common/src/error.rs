use thiserror::Error;

use crate::identity::IdentityFormatError;
use crate::temperature::TemperatureError;

/// Failure while constructing or mutating a container.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContainerError {
    #[error(transparent)]
    Temperature(#[from] TemperatureError),

    #[error(transparent)]
    Identity(#[from] IdentityFormatError),
}
