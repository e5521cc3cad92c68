pub mod app;
pub mod config;
pub mod greeting;
pub mod utils;

pub use app::run;
pub use config::{CliConfig, ConfigProvider};
pub use greeting::{get_greeting, write_greeting, DEFAULT_NAME};
pub use utils::error::{GreetError, Result};
