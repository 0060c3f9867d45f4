pub mod use_page_config;

pub use use_page_config::{use_layout_controller, use_page_config, PageConfig};
