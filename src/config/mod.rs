mod manager;

pub use manager::{
    ConfigFile, ConfigManager, PhraseConfig, ResolveOptions, ResolvedConfig, load_resolved_config,
    resolve_config,
};
