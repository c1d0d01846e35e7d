pub mod settings;

pub use settings::{LocalSourceKind, Settings};
