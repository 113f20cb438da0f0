pub mod config;
pub mod generate;
pub mod image;
pub mod logging;
pub mod param;
pub mod record;
pub mod template;
pub mod text;
