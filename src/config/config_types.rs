// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;
use std::time::Duration;

use super::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "bouncysquares".to_string(),
            width: 720,
            height: 1280,
            fullscreen: false,
        }
    }
}

/// Raw `[chain]` table as written in config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChainSettings {
    pub node_count: usize,
    pub parts: usize,
    pub step_size: f32,      // Scale change per animation frame
    pub frame_delay_ms: u64, // Time between animation frames
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            node_count: 5,
            parts: 5,
            step_size: 0.02,
            frame_delay_ms: 20,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub fore_color: String,
    pub back_color: String,
    pub stroke_factor: f32, // stroke width = min(w, h) / stroke_factor
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fore_color: "#3F51B5".to_string(),
            back_color: "#BDBDBD".to_string(),
            stroke_factor: 90.0,
        }
    }
}

/// Immutable settings handed to the chain and renderer at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainConfig {
    pub node_count: usize,
    pub parts: usize,
    pub step_size: f32,
    pub stroke_factor: f32,
    pub fore_color: Rgb,
    pub back_color: Rgb,
    pub frame_delay: Duration,
}

impl Default for ChainConfig {
    fn default() -> Self {
        // the default tables always validate
        Self {
            node_count: 5,
            parts: 5,
            step_size: 0.02,
            stroke_factor: 90.0,
            fore_color: rgb(0x3F as f32 / 255.0, 0x51 as f32 / 255.0, 0xB5 as f32 / 255.0),
            back_color: rgb(0xBD as f32 / 255.0, 0xBD as f32 / 255.0, 0xBD as f32 / 255.0),
            frame_delay: Duration::from_millis(20),
        }
    }
}

impl ChainConfig {
    pub fn from_settings(chain: &ChainSettings, style: &StyleConfig) -> Result<Self, ConfigError> {
        if chain.node_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain.node_count",
                reason: "must be at least 1".to_string(),
            });
        }
        if chain.parts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain.parts",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(chain.step_size > 0.0 && chain.step_size <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "chain.step_size",
                reason: format!("{} is outside (0, 1]", chain.step_size),
            });
        }
        if !(style.stroke_factor > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "style.stroke_factor",
                reason: format!("{} is not positive", style.stroke_factor),
            });
        }

        Ok(Self {
            node_count: chain.node_count,
            parts: chain.parts,
            step_size: chain.step_size,
            stroke_factor: style.stroke_factor,
            fore_color: parse_hex_color(&style.fore_color)?,
            back_color: parse_hex_color(&style.back_color)?,
            frame_delay: Duration::from_millis(chain.frame_delay_ms),
        })
    }
}

/// Parses `#RRGGBB` (leading `#` optional) into a nannou color.
pub fn parse_hex_color(hex: &str) -> Result<Rgb, ConfigError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|c| c as f32 / 255.0)
            .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
    };

    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
