//! Configuration schema types for kaiwa.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the stock
//! Japanese conversation-partner setup.

mod persona;
mod provider;
mod server;
mod system;

pub use persona::*;
pub use provider::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for kaiwa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct KaiwaConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub persona: PersonaConfig,
    pub page: PageConfig,
    pub logging: LoggingConfig,
}
