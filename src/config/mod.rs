/// Application settings loaded from config.toml
pub mod settings;

pub use settings::{
    AppConfig, DecorConfig, ReceivedAmountPolicy, SearchConfig, get_config_path,
    load_app_configuration, load_config,
};
