//! Core visual types for checklist-tui.
//!
//! These are the values the style layer resolves into and the terminal
//! adapter understands: colors, text attributes, alignment.

use std::fmt;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_tui::types::Rgba;
    ///
    /// // #RRGGBB format
    /// let red = Rgba::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    ///
    /// // #RGB shorthand (expands each digit)
    /// let white = Rgba::from_hex("#fff").unwrap();
    /// assert_eq!(white, Rgba::rgb(255, 255, 255));
    ///
    /// // #RRGGBBAA format (with alpha)
    /// let semi = Rgba::from_hex("#ff000080").unwrap();
    /// assert_eq!(semi, Rgba::new(255, 0, 0, 128));
    ///
    /// // Invalid returns None
    /// assert!(Rgba::from_hex("invalid").is_none());
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        // Helper to parse a single hex digit
        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        // Helper to parse two hex digits
        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            // #RRGGBB
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            // #RRGGBBAA
            8 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                let a = hex_byte(bytes, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Look up a CSS color name.
    ///
    /// Covers the names that show up in real checklist documents; this is
    /// not the full CSS named-color table.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "lime" => Some(Self::rgb(0, 255, 0)),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            "cyan" | "aqua" => Some(Self::CYAN),
            "magenta" | "fuchsia" => Some(Self::MAGENTA),
            "gray" | "grey" => Some(Self::GRAY),
            "darkgray" | "darkgrey" => Some(Self::rgb(169, 169, 169)),
            "lightgray" | "lightgrey" => Some(Self::rgb(211, 211, 211)),
            "silver" => Some(Self::rgb(192, 192, 192)),
            "orange" => Some(Self::rgb(255, 165, 0)),
            "brown" => Some(Self::rgb(165, 42, 42)),
            "purple" => Some(Self::rgb(128, 0, 128)),
            "navy" => Some(Self::rgb(0, 0, 128)),
            "teal" => Some(Self::rgb(0, 128, 128)),
            "olive" => Some(Self::rgb(128, 128, 0)),
            "maroon" => Some(Self::rgb(128, 0, 0)),
            "pink" => Some(Self::rgb(255, 192, 203)),
            "gold" => Some(Self::rgb(255, 215, 0)),
            "darkgreen" => Some(Self::rgb(0, 100, 0)),
            "darkred" => Some(Self::rgb(139, 0, 0)),
            "lightblue" => Some(Self::rgb(173, 216, 230)),
            _ => None,
        }
    }

    /// Parse any supported color format.
    ///
    /// Supports:
    /// - hex (#RGB, #RRGGBB, #RRGGBBAA)
    /// - CSS color names ("red", "darkgray", ...)
    /// - "transparent" keyword
    /// - "default" or "inherit" for terminal default
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_tui::types::Rgba;
    ///
    /// let red = Rgba::parse("#ff0000").unwrap();
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    ///
    /// let named = Rgba::parse("orange").unwrap();
    /// assert_eq!(named, Rgba::rgb(255, 165, 0));
    ///
    /// let trans = Rgba::parse("transparent").unwrap();
    /// assert_eq!(trans, Rgba::TRANSPARENT);
    ///
    /// let def = Rgba::parse("default").unwrap();
    /// assert!(def.is_terminal_default());
    ///
    /// assert!(Rgba::parse("not-a-color").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        let lower = input.to_lowercase();

        // Special keywords
        match lower.as_str() {
            "transparent" => return Some(Self::TRANSPARENT),
            "default" | "inherit" | "initial" | "currentcolor" => {
                return Some(Self::TERMINAL_DEFAULT)
            }
            _ => {}
        }

        // Hex colors
        if input.starts_with('#') {
            return Self::from_hex(input);
        }

        // Named colors
        if let Some(color) = Self::from_name(&lower) {
            return Some(color);
        }

        // Bare hex without the # prefix ("ff0000")
        if input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(input);
        }

        None
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_terminal_default() {
            write!(f, "default")
        } else {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

// =============================================================================
// Text Alignment
// =============================================================================

/// Text alignment within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextAlign {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl TextAlign {
    /// Parse a CSS `text-align` value (case-insensitive).
    ///
    /// Unrecognized values fall back to `Left`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "center" => Self::Center,
            "right" | "end" => Self::Right,
            _ => Self::Left,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_hex_rrggbb() {
        let red = Rgba::from_hex("#ff0000").unwrap();
        assert_eq!(red, Rgba::rgb(255, 0, 0));

        let blue = Rgba::from_hex("#0000ff").unwrap();
        assert_eq!(blue, Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn test_rgba_from_hex_rgb_shorthand() {
        let white = Rgba::from_hex("#fff").unwrap();
        assert_eq!(white, Rgba::rgb(255, 255, 255));

        // #abc expands to #aabbcc
        let abc = Rgba::from_hex("#abc").unwrap();
        assert_eq!(abc, Rgba::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_rgba_from_hex_with_alpha() {
        let semi = Rgba::from_hex("#ff000080").unwrap();
        assert_eq!(semi, Rgba::new(255, 0, 0, 128));
    }

    #[test]
    fn test_rgba_from_hex_invalid() {
        assert!(Rgba::from_hex("#gg0000").is_none());
        assert!(Rgba::from_hex("#ffff").is_none());
        assert!(Rgba::from_hex("").is_none());
        assert!(Rgba::from_hex("#").is_none());
    }

    #[test]
    fn test_rgba_parse_named() {
        assert_eq!(Rgba::parse("red"), Some(Rgba::RED));
        assert_eq!(Rgba::parse("Grey"), Some(Rgba::GRAY));
        assert_eq!(Rgba::parse("orange"), Some(Rgba::rgb(255, 165, 0)));
    }

    #[test]
    fn test_rgba_parse_keywords() {
        assert_eq!(Rgba::parse("transparent"), Some(Rgba::TRANSPARENT));
        assert!(Rgba::parse("default").unwrap().is_terminal_default());
        assert!(Rgba::parse("inherit").unwrap().is_terminal_default());
    }

    #[test]
    fn test_rgba_parse_bare_hex() {
        assert_eq!(Rgba::parse("ff0000"), Some(Rgba::rgb(255, 0, 0)));
    }

    #[test]
    fn test_rgba_parse_invalid() {
        assert!(Rgba::parse("").is_none());
        assert!(Rgba::parse("not-a-color").is_none());
        assert!(Rgba::parse("rgb(255, 0, 0)").is_none());
    }

    #[test]
    fn test_text_align_parse() {
        assert_eq!(TextAlign::parse("center"), TextAlign::Center);
        assert_eq!(TextAlign::parse("RIGHT"), TextAlign::Right);
        assert_eq!(TextAlign::parse("left"), TextAlign::Left);
        assert_eq!(TextAlign::parse("justify"), TextAlign::Left);
    }

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::ITALIC));
    }
}
