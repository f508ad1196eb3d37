//! Symbolic key names and their key codes.
//!
//! Every key a binding file may reference has a fixed symbolic name that
//! resolves to one `Key` variant. Key codes follow the SDL keysym
//! convention the downstream input layer dispatches on: the ASCII value
//! for printable keys, control codes for the rest.
//!
//! # Supported Symbols
//!
//! ## Letters and Digits
//! `a-z`, `0-9`
//!
//! ## Control Keys
//! `backspace`, `tab`, `return`, `escape`/`esc`/`^[`, `space`
//!
//! ## Punctuation
//! `colon`/`:`, `hash`/`#`, `caret`/`^`, `period`/`.`, `semicolon`/`;`,
//! and the literal symbols
//! `!`, `$`, `&`, `'`, `(`, `)`, `*`, `+`, `,`, `-`, `/`, `\`, `<`, `=`,
//! `>`, `?`, `@`, `[`, `]`, `_`, `` ` ``
//!
//! Symbol names are matched case-insensitively.

use serde::{Serialize, Serializer};
use std::fmt;

/// A physical keyboard key addressable from a binding file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    // Letters a-z
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits 0-9 (top row)
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,

    // Control keys
    Backspace, Tab, Return, Escape, Space,

    // Punctuation and symbols
    Exclaim, Hash, Dollar, Ampersand, Quote,
    LeftParen, RightParen, Asterisk, Plus, Comma,
    Minus, Period, Slash, Colon, Semicolon,
    Less, Equals, Greater, Question, At,
    LeftBracket, Backslash, RightBracket, Caret,
    Underscore, Backquote,
}

impl Key {
    /// Parse a symbolic key name (case-insensitive).
    pub fn parse(name: &str) -> Result<Key, String> {
        let n = name.trim().to_ascii_lowercase();
        match n.as_str() {
            // Letters
            "a" => Ok(Key::A),
            "b" => Ok(Key::B),
            "c" => Ok(Key::C),
            "d" => Ok(Key::D),
            "e" => Ok(Key::E),
            "f" => Ok(Key::F),
            "g" => Ok(Key::G),
            "h" => Ok(Key::H),
            "i" => Ok(Key::I),
            "j" => Ok(Key::J),
            "k" => Ok(Key::K),
            "l" => Ok(Key::L),
            "m" => Ok(Key::M),
            "n" => Ok(Key::N),
            "o" => Ok(Key::O),
            "p" => Ok(Key::P),
            "q" => Ok(Key::Q),
            "r" => Ok(Key::R),
            "s" => Ok(Key::S),
            "t" => Ok(Key::T),
            "u" => Ok(Key::U),
            "v" => Ok(Key::V),
            "w" => Ok(Key::W),
            "x" => Ok(Key::X),
            "y" => Ok(Key::Y),
            "z" => Ok(Key::Z),

            // Digits
            "0" => Ok(Key::Key0),
            "1" => Ok(Key::Key1),
            "2" => Ok(Key::Key2),
            "3" => Ok(Key::Key3),
            "4" => Ok(Key::Key4),
            "5" => Ok(Key::Key5),
            "6" => Ok(Key::Key6),
            "7" => Ok(Key::Key7),
            "8" => Ok(Key::Key8),
            "9" => Ok(Key::Key9),

            // Control keys
            "backspace" => Ok(Key::Backspace),
            "tab" => Ok(Key::Tab),
            "return" => Ok(Key::Return),
            "escape" | "esc" | "^[" => Ok(Key::Escape),
            "space" => Ok(Key::Space),

            // Punctuation and symbols
            "colon" | ":" => Ok(Key::Colon),
            "hash" | "#" => Ok(Key::Hash),
            "caret" | "^" => Ok(Key::Caret),
            "period" | "." => Ok(Key::Period),
            "semicolon" | ";" => Ok(Key::Semicolon),
            "!" => Ok(Key::Exclaim),
            "$" => Ok(Key::Dollar),
            "&" => Ok(Key::Ampersand),
            "'" => Ok(Key::Quote),
            "(" => Ok(Key::LeftParen),
            ")" => Ok(Key::RightParen),
            "*" => Ok(Key::Asterisk),
            "+" => Ok(Key::Plus),
            "," => Ok(Key::Comma),
            "-" => Ok(Key::Minus),
            "/" => Ok(Key::Slash),
            "\\" => Ok(Key::Backslash),
            "<" => Ok(Key::Less),
            "=" => Ok(Key::Equals),
            ">" => Ok(Key::Greater),
            "?" => Ok(Key::Question),
            "@" => Ok(Key::At),
            "[" => Ok(Key::LeftBracket),
            "]" => Ok(Key::RightBracket),
            "_" => Ok(Key::Underscore),
            "`" => Ok(Key::Backquote),

            _ => Err(format!("unsupported key symbol: '{name}'")),
        }
    }

    /// SDL-style keysym value for this key.
    #[inline]
    pub fn code(self) -> u16 {
        match self {
            // Letters a-z (ASCII)
            Self::A => 97,
            Self::B => 98,
            Self::C => 99,
            Self::D => 100,
            Self::E => 101,
            Self::F => 102,
            Self::G => 103,
            Self::H => 104,
            Self::I => 105,
            Self::J => 106,
            Self::K => 107,
            Self::L => 108,
            Self::M => 109,
            Self::N => 110,
            Self::O => 111,
            Self::P => 112,
            Self::Q => 113,
            Self::R => 114,
            Self::S => 115,
            Self::T => 116,
            Self::U => 117,
            Self::V => 118,
            Self::W => 119,
            Self::X => 120,
            Self::Y => 121,
            Self::Z => 122,

            // Digits 0-9 (ASCII)
            Self::Key0 => 48,
            Self::Key1 => 49,
            Self::Key2 => 50,
            Self::Key3 => 51,
            Self::Key4 => 52,
            Self::Key5 => 53,
            Self::Key6 => 54,
            Self::Key7 => 55,
            Self::Key8 => 56,
            Self::Key9 => 57,

            // Control keys
            Self::Backspace => 8,
            Self::Tab => 9,
            Self::Return => 13,
            Self::Escape => 27,
            Self::Space => 32,

            // Punctuation and symbols (ASCII)
            Self::Exclaim => 33,      // !
            Self::Hash => 35,         // #
            Self::Dollar => 36,       // $
            Self::Ampersand => 38,    // &
            Self::Quote => 39,        // '
            Self::LeftParen => 40,    // (
            Self::RightParen => 41,   // )
            Self::Asterisk => 42,     // *
            Self::Plus => 43,         // +
            Self::Comma => 44,        // ,
            Self::Minus => 45,        // -
            Self::Period => 46,       // .
            Self::Slash => 47,        // /
            Self::Colon => 58,        // :
            Self::Semicolon => 59,    // ;
            Self::Less => 60,         // <
            Self::Equals => 61,       // =
            Self::Greater => 62,      // >
            Self::Question => 63,     // ?
            Self::At => 64,           // @
            Self::LeftBracket => 91,  // [
            Self::Backslash => 92,    // \
            Self::RightBracket => 93, // ]
            Self::Caret => 94,        // ^
            Self::Underscore => 95,   // _
            Self::Backquote => 96,    // `
        }
    }

    /// Canonical symbolic name, as written in a binding file.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
            Self::G => "g",
            Self::H => "h",
            Self::I => "i",
            Self::J => "j",
            Self::K => "k",
            Self::L => "l",
            Self::M => "m",
            Self::N => "n",
            Self::O => "o",
            Self::P => "p",
            Self::Q => "q",
            Self::R => "r",
            Self::S => "s",
            Self::T => "t",
            Self::U => "u",
            Self::V => "v",
            Self::W => "w",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Key0 => "0",
            Self::Key1 => "1",
            Self::Key2 => "2",
            Self::Key3 => "3",
            Self::Key4 => "4",
            Self::Key5 => "5",
            Self::Key6 => "6",
            Self::Key7 => "7",
            Self::Key8 => "8",
            Self::Key9 => "9",
            Self::Backspace => "backspace",
            Self::Tab => "tab",
            Self::Return => "return",
            Self::Escape => "escape",
            Self::Space => "space",
            Self::Colon => "colon",
            Self::Hash => "hash",
            Self::Caret => "caret",
            Self::Period => "period",
            Self::Semicolon => "semicolon",
            Self::Exclaim => "!",
            Self::Dollar => "$",
            Self::Ampersand => "&",
            Self::Quote => "'",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Asterisk => "*",
            Self::Plus => "+",
            Self::Comma => ",",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Backslash => "\\",
            Self::Less => "<",
            Self::Equals => "=",
            Self::Greater => ">",
            Self::Question => "?",
            Self::At => "@",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Underscore => "_",
            Self::Backquote => "`",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Serialized as the canonical symbolic name, matching the config format.
impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn parse_letters() {
        assert!(matches!(Key::parse("w").unwrap(), Key::W));
        assert!(matches!(Key::parse("A").unwrap(), Key::A));
        assert!(matches!(Key::parse("z").unwrap(), Key::Z));
    }

    #[test]
    fn parse_digits() {
        assert!(matches!(Key::parse("0").unwrap(), Key::Key0));
        assert!(matches!(Key::parse("5").unwrap(), Key::Key5));
        assert!(matches!(Key::parse("9").unwrap(), Key::Key9));
    }

    #[test]
    fn parse_control_keys() {
        assert!(matches!(Key::parse("space").unwrap(), Key::Space));
        assert!(matches!(Key::parse("tab").unwrap(), Key::Tab));
        assert!(matches!(Key::parse("return").unwrap(), Key::Return));
        assert!(matches!(Key::parse("backspace").unwrap(), Key::Backspace));
    }

    #[test]
    fn parse_escape_aliases() {
        assert!(matches!(Key::parse("escape").unwrap(), Key::Escape));
        assert!(matches!(Key::parse("esc").unwrap(), Key::Escape));
        assert!(matches!(Key::parse("^[").unwrap(), Key::Escape));
    }

    #[test]
    fn parse_punctuation_words_and_symbols() {
        assert!(matches!(Key::parse("colon").unwrap(), Key::Colon));
        assert!(matches!(Key::parse(":").unwrap(), Key::Colon));
        assert!(matches!(Key::parse("hash").unwrap(), Key::Hash));
        assert!(matches!(Key::parse("#").unwrap(), Key::Hash));
        assert!(matches!(Key::parse("caret").unwrap(), Key::Caret));
        assert!(matches!(Key::parse("^").unwrap(), Key::Caret));
        assert!(matches!(Key::parse(".").unwrap(), Key::Period));
        assert!(matches!(Key::parse(";").unwrap(), Key::Semicolon));
        assert!(matches!(Key::parse("[").unwrap(), Key::LeftBracket));
        assert!(matches!(Key::parse("\\").unwrap(), Key::Backslash));
        assert!(matches!(Key::parse("`").unwrap(), Key::Backquote));
    }

    #[test]
    fn parse_case_insensitive() {
        assert!(matches!(Key::parse("SPACE").unwrap(), Key::Space));
        assert!(matches!(Key::parse("Esc").unwrap(), Key::Escape));
    }

    #[test]
    fn parse_invalid() {
        assert!(Key::parse("warp").is_err());
        assert!(Key::parse("f1").is_err());
        assert!(Key::parse("\"").is_err());
        assert!(Key::parse("").is_err());
    }

    #[test]
    fn codes() {
        assert_eq!(Key::Backspace.code(), 8);
        assert_eq!(Key::Return.code(), 13);
        assert_eq!(Key::Escape.code(), 27);
        assert_eq!(Key::Space.code(), 32);
        assert_eq!(Key::Key0.code(), 48);
        assert_eq!(Key::Colon.code(), 58);
        assert_eq!(Key::A.code(), 97);
        assert_eq!(Key::Z.code(), 122);
        assert_eq!(Key::Backquote.code(), 96);
    }

    #[test]
    fn printable_codes_are_ascii() {
        // The code for every printable key is its ASCII value
        assert_eq!(Key::W.code(), u16::from(b'w'));
        assert_eq!(Key::Key7.code(), u16::from(b'7'));
        assert_eq!(Key::Semicolon.code(), u16::from(b';'));
        assert_eq!(Key::At.code(), u16::from(b'@'));
    }

    #[test]
    fn name_parses_back() {
        for key in [Key::Space, Key::Escape, Key::Colon, Key::Quote, Key::M, Key::Key3] {
            assert_eq!(Key::parse(key.name()).unwrap(), key);
        }
    }
}
