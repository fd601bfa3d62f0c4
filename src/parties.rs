//! Party presentation configuration: a static label -> color table. Plain
//! constant data with a documented fallback, no dispatch.

use colored::Color;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Fallback for party labels without a table entry.
pub const DEFAULT_PARTY_COLOR: &str = "hsl(0, 0%, 70%)";

lazy_static! {
    /// Party color mapping for consistent visualization.
    pub static ref PARTY_COLORS: HashMap<&'static str, &'static str> = {
        let mut colors = HashMap::new();
        colors.insert("TDP", "hsl(45, 100%, 50%)"); // Gold/Yellow
        colors.insert("YSRCP", "hsl(142, 70%, 35%)"); // Green
        colors.insert("BJP", "hsl(30, 100%, 60%)"); // Saffron
        colors.insert("INC", "hsl(200, 80%, 50%)"); // Blue
        colors.insert("JnP", "hsl(280, 60%, 50%)"); // Purple
        colors.insert("BSP", "hsl(220, 60%, 45%)"); // Dark Blue
        colors.insert("NOTA", "hsl(0, 0%, 50%)"); // Gray
        colors.insert("IND", "hsl(0, 0%, 60%)"); // Light Gray
        colors
    };
}

pub fn party_color(party: &str) -> &'static str {
    PARTY_COLORS.get(party).copied().unwrap_or(DEFAULT_PARTY_COLOR)
}

/// Nearest terminal color for a party, used by the console renderer.
pub fn party_term_color(party: &str) -> Color {
    match party {
        "TDP" => Color::Yellow,
        "YSRCP" => Color::Green,
        "BJP" => Color::Red,
        "INC" => Color::Blue,
        "JnP" => Color::Magenta,
        "BSP" => Color::BrightBlue,
        "NOTA" => Color::BrightBlack,
        _ => Color::White,
    }
}
