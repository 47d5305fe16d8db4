//! Hotkey module: the shortcut value type and macOS key definitions

mod hot_key;
pub mod keys;

pub use hot_key::HotKey;
pub use keys::ModifierState;
