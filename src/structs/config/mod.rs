pub mod api_config;
pub mod console_config;
pub mod logging_config;
pub mod ui_config;
