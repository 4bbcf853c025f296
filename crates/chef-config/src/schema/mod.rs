//! Configuration schema types for Chef.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the hosted app shipped with.

mod generation;
mod provider;
mod session;
mod system;

pub use generation::*;
pub use provider::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Chef.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ChefConfig {
    pub provider: ProviderConfig,
    pub generation: GenerationConfig,
    pub session: SessionSchemaConfig,
    pub logging: LoggingConfig,
}
