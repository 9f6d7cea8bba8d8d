//! JSON configuration: commit type registry, output names, input spellings
//! and user-facing messages.

pub mod loader;
pub mod messages;
pub mod types;

pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_config_str};
pub use types::{CommitTypeSpec, Config, InputNames, Messages};
