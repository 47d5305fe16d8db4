//! Modifier flag and key code definitions
//!
//! Provides constants for macOS modifier flag bits and virtual key codes,
//! and a struct for decoding which modifiers a mask names.

/// Modifier flag masks, shared by `NSEventModifierFlags` and `CGEventFlags`
pub mod flags {
    /// Caps Lock modifier flag
    pub const CAPS_LOCK: u64 = 1 << 16;
    /// Shift key modifier flag
    pub const SHIFT: u64 = 1 << 17;
    /// Control key modifier flag
    pub const CONTROL: u64 = 1 << 18;
    /// Option/Alt key modifier flag
    pub const OPTION: u64 = 1 << 19;
    /// Command key modifier flag
    pub const COMMAND: u64 = 1 << 20;
    /// Fn key modifier flag
    pub const FUNCTION: u64 = 1 << 23;
}

/// Virtual key codes for the ANSI layout (`kVK_*` in Carbon's `Events.h`)
pub mod codes {
    pub const A: u16 = 0x00;
    pub const S: u16 = 0x01;
    pub const D: u16 = 0x02;
    pub const F: u16 = 0x03;
    pub const H: u16 = 0x04;
    pub const G: u16 = 0x05;
    pub const Z: u16 = 0x06;
    pub const X: u16 = 0x07;
    pub const C: u16 = 0x08;
    pub const V: u16 = 0x09;
    pub const B: u16 = 0x0B;
    pub const Q: u16 = 0x0C;
    pub const W: u16 = 0x0D;
    pub const E: u16 = 0x0E;
    pub const R: u16 = 0x0F;
    pub const Y: u16 = 0x10;
    pub const T: u16 = 0x11;
    pub const ONE: u16 = 0x12;
    pub const TWO: u16 = 0x13;
    pub const THREE: u16 = 0x14;
    pub const FOUR: u16 = 0x15;
    pub const SIX: u16 = 0x16;
    pub const FIVE: u16 = 0x17;
    pub const NINE: u16 = 0x19;
    pub const SEVEN: u16 = 0x1A;
    pub const EIGHT: u16 = 0x1C;
    pub const ZERO: u16 = 0x1D;
    pub const O: u16 = 0x1F;
    pub const U: u16 = 0x20;
    pub const I: u16 = 0x22;
    pub const P: u16 = 0x23;
    pub const RETURN: u16 = 0x24;
    pub const L: u16 = 0x25;
    pub const J: u16 = 0x26;
    pub const K: u16 = 0x28;
    pub const N: u16 = 0x2D;
    pub const M: u16 = 0x2E;
    pub const TAB: u16 = 0x30;
    pub const SPACE: u16 = 0x31;
    pub const DELETE: u16 = 0x33;
    pub const ESCAPE: u16 = 0x35;
    pub const F5: u16 = 0x60;
    pub const F6: u16 = 0x61;
    pub const F7: u16 = 0x62;
    pub const F3: u16 = 0x63;
    pub const F8: u16 = 0x64;
    pub const F9: u16 = 0x65;
    pub const F11: u16 = 0x67;
    pub const F10: u16 = 0x6D;
    pub const F12: u16 = 0x6F;
    pub const HOME: u16 = 0x73;
    pub const PAGE_UP: u16 = 0x74;
    pub const FORWARD_DELETE: u16 = 0x75;
    pub const F4: u16 = 0x76;
    pub const END: u16 = 0x77;
    pub const F2: u16 = 0x78;
    pub const PAGE_DOWN: u16 = 0x79;
    pub const F1: u16 = 0x7A;
    pub const LEFT_ARROW: u16 = 0x7B;
    pub const RIGHT_ARROW: u16 = 0x7C;
    pub const DOWN_ARROW: u16 = 0x7D;
    pub const UP_ARROW: u16 = 0x7E;
}

/// Human-readable name for a virtual key code, if it is a known one
pub fn key_name(code: u16) -> Option<&'static str> {
    use codes::*;

    let name = match code {
        A => "A",
        S => "S",
        D => "D",
        F => "F",
        H => "H",
        G => "G",
        Z => "Z",
        X => "X",
        C => "C",
        V => "V",
        B => "B",
        Q => "Q",
        W => "W",
        E => "E",
        R => "R",
        Y => "Y",
        T => "T",
        ONE => "1",
        TWO => "2",
        THREE => "3",
        FOUR => "4",
        SIX => "6",
        FIVE => "5",
        NINE => "9",
        SEVEN => "7",
        EIGHT => "8",
        ZERO => "0",
        O => "O",
        U => "U",
        I => "I",
        P => "P",
        RETURN => "↩",
        L => "L",
        J => "J",
        K => "K",
        N => "N",
        M => "M",
        TAB => "⇥",
        SPACE => "Space",
        DELETE => "⌫",
        ESCAPE => "⎋",
        F1 => "F1",
        F2 => "F2",
        F3 => "F3",
        F4 => "F4",
        F5 => "F5",
        F6 => "F6",
        F7 => "F7",
        F8 => "F8",
        F9 => "F9",
        F10 => "F10",
        F11 => "F11",
        F12 => "F12",
        HOME => "↖",
        PAGE_UP => "⇞",
        FORWARD_DELETE => "⌦",
        END => "↘",
        PAGE_DOWN => "⇟",
        LEFT_ARROW => "←",
        RIGHT_ARROW => "→",
        DOWN_ARROW => "↓",
        UP_ARROW => "↑",
        _ => return None,
    };

    Some(name)
}

/// Which modifier keys a flag mask names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    /// Caps Lock is engaged
    pub caps_lock: bool,
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub control: bool,
    /// Option/Alt key is held
    pub option: bool,
    /// Command key is held
    pub command: bool,
    /// Fn key is held
    pub function: bool,
}

impl ModifierState {
    /// Decode a raw modifier mask. Bits outside the known set are ignored.
    pub fn from_flags(mask: u64) -> Self {
        Self {
            caps_lock: mask & flags::CAPS_LOCK != 0,
            shift: mask & flags::SHIFT != 0,
            control: mask & flags::CONTROL != 0,
            option: mask & flags::OPTION != 0,
            command: mask & flags::COMMAND != 0,
            function: mask & flags::FUNCTION != 0,
        }
    }

    /// Check if no known modifier is set
    pub fn is_empty(&self) -> bool {
        !self.caps_lock
            && !self.shift
            && !self.control
            && !self.option
            && !self.command
            && !self.function
    }

    /// Menu-style glyphs in Apple's canonical order: fn ⇪ ⌃ ⌥ ⇧ ⌘
    pub fn glyphs(&self) -> String {
        let mut out = String::new();
        if self.function {
            out.push_str("fn");
        }
        if self.caps_lock {
            out.push('⇪');
        }
        if self.control {
            out.push('⌃');
        }
        if self.option {
            out.push('⌥');
        }
        if self.shift {
            out.push('⇧');
        }
        if self.command {
            out.push('⌘');
        }
        out
    }
}
