pub mod account_group;
pub mod announce_banner;
pub mod header;
pub mod icon_button;
pub mod icons;
pub mod link_group;
pub mod localization_menu;
pub mod logo_group;
pub mod markdown;
pub mod nav_drawer;
pub mod search_group;
pub mod settings_group;
pub mod settings_items;

pub use header::{Header, HeaderEnv};
