mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader};
pub use model::{ApiConfig, ChartsConfig, Config, ListingConfig, RefreshConfig};
pub use validation::validate_config_semantics;
