pub mod api;
pub mod date_utils;
pub mod download;
pub mod icons;
pub mod toast;
