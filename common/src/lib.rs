pub mod config;
pub mod error;
pub mod identity;
pub mod temperature;

#[doc(hidden)]
pub use tracing;

/// Logs an event on the `shipr::success` target.
///
/// The CLI formatter renders these with a distinct prefix from plain `info!` events.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "shipr::success", $($arg)*)
    };
}
