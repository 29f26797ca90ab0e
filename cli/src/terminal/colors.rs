use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ACCENT: Color = Color::Yellow;

pub const IP_ADDR: Color = Color::Cyan;
pub const CIDR_BLOCK: Color = Color::Magenta;
pub const UNKNOWN: Color = Color::BrightBlack;
