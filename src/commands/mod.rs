pub mod check;
pub mod compare;
pub mod completions;
pub mod context;
pub mod dismiss;
pub mod open;
pub mod path;
pub mod settings;
pub mod status;
