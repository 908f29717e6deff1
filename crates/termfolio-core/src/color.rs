use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::ParseColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
        }
    }
}

/// A display color in one of the notations themes are written in. The
/// notation survives every transform except [`Color::to_transparent`], which
/// always yields `rgba(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Hex(Rgb),
    Rgb(Rgb),
    Rgba(Rgb, f32),
}

impl Color {
    pub const fn hex(r: u8, g: u8, b: u8) -> Self {
        Self::Hex(Rgb::new(r, g, b))
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Self::Hex(rgb) | Self::Rgb(rgb) | Self::Rgba(rgb, _) => rgb,
        }
    }

    pub fn alpha(self) -> f32 {
        match self {
            Self::Hex(_) | Self::Rgb(_) => 1.0,
            Self::Rgba(_, alpha) => alpha,
        }
    }

    /// Adds `delta` to every channel, clamping to `0..=255`.
    pub fn adjust_brightness(self, delta: i16) -> Self {
        let shift = |channel: u8| i16::from(channel).saturating_add(delta).clamp(0, 255) as u8;
        match self {
            Self::Hex(rgb) => Self::Hex(rgb.map(shift)),
            Self::Rgb(rgb) => Self::Rgb(rgb.map(shift)),
            Self::Rgba(rgb, alpha) => Self::Rgba(rgb.map(shift), alpha),
        }
    }

    pub fn to_transparent(self, alpha: f32) -> Self {
        Self::Rgba(self.rgb(), alpha.clamp(0.0, 1.0))
    }
}

pub fn adjust_brightness(color: Color, delta: i16) -> Color {
    color.adjust_brightness(delta)
}

pub fn to_transparent(color: Color, alpha: f32) -> Color {
    color.to_transparent(alpha)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(Rgb { r, g, b }) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Rgb(Rgb { r, g, b }) => write!(f, "rgb({r}, {g}, {b})"),
            Self::Rgba(Rgb { r, g, b }, alpha) => write!(f, "rgba({r}, {g}, {b}, {alpha})"),
        }
    }
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern")
    })
}

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
            .expect("rgb color pattern")
    })
}

fn rgba_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)$")
            .expect("rgba color pattern")
    })
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: input.to_string(),
        };
        let trimmed = input.trim();

        if let Some(caps) = hex_pattern().captures(trimmed) {
            let digits = &caps[1];
            let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
            let rgb = if digits.len() == 3 {
                // "#0f0" expands each nibble: 0 -> 00, f -> ff.
                let nibble = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?)
            } else {
                Rgb::new(
                    channel(&digits[0..2])?,
                    channel(&digits[2..4])?,
                    channel(&digits[4..6])?,
                )
            };
            return Ok(Self::Hex(rgb));
        }

        let channels = |caps: &Captures| -> Result<Rgb, ParseColorError> {
            let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| err());
            Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
        };

        if let Some(caps) = rgb_pattern().captures(trimmed) {
            return Ok(Self::Rgb(channels(&caps)?));
        }

        if let Some(caps) = rgba_pattern().captures(trimmed) {
            let alpha = caps[4].parse::<f32>().map_err(|_| err())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(err());
            }
            return Ok(Self::Rgba(channels(&caps)?, alpha));
        }

        Err(err())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
