use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Dash pattern of a horizontal line.
/// Config files go through the same case-insensitive parser as `str::parse`.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum LineStyle {
    #[default]
    Solid,
    Dot,
    Dash,
}

impl TryFrom<String> for LineStyle {
    type Error = strum::ParseError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<LineStyle> for String {
    fn from(style: LineStyle) -> Self {
        style.to_string()
    }
}

/// Opaque-or-not RGBA color carried on every output line.
/// Parsed from any CSS color string; serialized as `#rrggbb` / `#rrggbbaa`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl LineColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for LineColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = colorgrad::Color::from_html(s.trim())
            .map_err(|e| anyhow!("Invalid color {:?}: {}", s, e))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self { r, g, b, a })
    }
}

impl TryFrom<String> for LineColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LineColor> for String {
    fn from(color: LineColor) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
