use std::fmt;
use std::str::FromStr;

use crate::FontError;

/// The eight standard ANSI foreground colors plus reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
    Reset,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Reset,
    ];

    /// SGR parameter selecting this color.
    pub fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Reset => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Reset => "reset",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FontError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_standard_foreground_table() {
        let codes: Vec<u8> = Color::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec![31, 32, 33, 34, 35, 36, 37, 0]);
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("Magenta".parse::<Color>().unwrap(), Color::Magenta);
        assert_eq!(" reset ".parse::<Color>().unwrap(), Color::Reset);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "purple".parse::<Color>().unwrap_err();
        assert!(matches!(err, FontError::UnknownColor(ref s) if s == "purple"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for c in Color::ALL {
            assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        }
    }
}
