pub mod paths;
pub mod platform;
pub mod update_check;
