//! The `HotKey` value type
//!
//! One physical key plus a modifier mask, compared and hashed by value.
//! Both fields are opaque platform values and are stored exactly as given.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::keys::{key_name, ModifierState};

/// An immutable keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotKey {
    key_code: u16,
    modifier_flags: u64,
}

impl HotKey {
    /// Create a hotkey from a virtual key code and a modifier mask
    ///
    /// Any bit pattern is accepted; nothing is validated or masked.
    pub const fn new(key_code: u16, modifier_flags: u64) -> Self {
        Self {
            key_code,
            modifier_flags,
        }
    }

    /// Build a hotkey from a keyboard `CGEvent`
    ///
    /// Takes the event's virtual key code and its raw flag bits.
    #[cfg(target_os = "macos")]
    pub fn from_cg_event(event: &core_graphics::event::CGEvent) -> Self {
        use core_graphics::event::EventField;

        // CGKeyCode is 16-bit; the field is only widened to i64 by the getter
        let key_code = event.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE) as u16;
        Self::new(key_code, event.get_flags().bits())
    }

    /// Virtual key code of the physical key
    pub const fn key_code(&self) -> u16 {
        self.key_code
    }

    /// Modifier mask that must be held with the key
    pub const fn modifier_flags(&self) -> u64 {
        self.modifier_flags
    }

    /// A value-equal copy of this hotkey
    pub const fn copy(&self) -> Self {
        *self
    }

    /// Decode the known modifier bits
    pub fn modifiers(&self) -> ModifierState {
        ModifierState::from_flags(self.modifier_flags)
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.modifiers().glyphs())?;
        match key_name(self.key_code) {
            Some(name) => f.write_str(name),
            None => write!(f, "#{}", self.key_code),
        }
    }
}
