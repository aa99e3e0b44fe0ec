use std::fmt;
use std::sync::Arc;

use shipr_common::identity::{self, Category, IdentityFormatError, IdentityFormatter, Iso6346};
use tracing::debug;

use crate::registry::{self, SerialRegistry};

/// Serial and identity code assigned to one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub serial: u64,
    pub code: String,
}

/// Pairs a serial registry with an identity formatter.
///
/// Every container constructor goes through an issuer, which is what keeps
/// serial issuance ahead of code formatting.
#[derive(Clone)]
pub struct Issuer {
    registry: Arc<SerialRegistry>,
    formatter: Arc<dyn IdentityFormatter + Send + Sync>,
}

impl Issuer {
    pub fn new(
        registry: Arc<SerialRegistry>,
        formatter: Arc<dyn IdentityFormatter + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            formatter,
        }
    }

    /// Issuer backed by the process-wide registry and the ISO 6346 formatter.
    pub fn global() -> Self {
        Self::new(registry::global(), Arc::new(Iso6346))
    }

    /// Issuer with its own registry, starting at [`registry::FIRST_SERIAL`].
    pub fn isolated() -> Self {
        Self::new(Arc::new(SerialRegistry::default()), Arc::new(Iso6346))
    }

    pub fn registry(&self) -> &SerialRegistry {
        &self.registry
    }

    /// Issues one serial, then formats one identity code from it.
    ///
    /// The serial is consumed even when formatting fails.
    pub fn issue(
        &self,
        owner_code: &str,
        category: Option<Category>,
    ) -> Result<Identity, IdentityFormatError> {
        let serial: u64 = self.registry.issue_serial();
        let code: String =
            identity::build_identity(&*self.formatter, owner_code, serial, category)?;
        debug!(serial, code = %code, "issued container identity");
        Ok(Identity { serial, code })
    }
}

impl Default for Issuer {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Issuer")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
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
