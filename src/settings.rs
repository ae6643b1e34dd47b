use egui::{Color32, Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};
use crate::tools::ToolKind;

pub const DEFAULT_PEN_COLOR: Color32 = Color32::BLACK;
pub const DEFAULT_PEN_WIDTH: f32 = 3.0;
pub const MIN_PEN_WIDTH: f32 = 1.0;
pub const MAX_PEN_WIDTH: f32 = 36.0;

/// Swatches offered by the pen menu
pub const PALETTE: [&str; 8] = [
    "#000000", "#DDDDDD", "#0000FF", "#FF0000", "#00FF00", "#FFFF00", "#00FFFF", "#FF00FF",
];

/// Everything the surrounding UI configures, passed to the editor as one snapshot per call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub tool: ToolKind,
    pub pen: PenSettings,
    pub background: BackgroundSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenSettings {
    pub color: Color32,
    pub width: f32,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_PEN_COLOR,
            width: DEFAULT_PEN_WIDTH,
        }
    }
}

/// Changes the pen menu can request
#[derive(Clone, Debug, PartialEq)]
pub enum PenAction {
    ChangeColor { hex: String },
    ChangeWidth { width: f32 },
}

impl PenSettings {
    /// Apply `action`, returning the new settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidColor` for a color that is not `#RRGGBB` and
    /// `SettingsError::InvalidWidth` for a width that is not a positive finite number.
    pub fn reduce(&self, action: &PenAction) -> SettingsResult<PenSettings> {
        match action {
            PenAction::ChangeColor { hex } => Ok(PenSettings {
                color: parse_hex_color(hex)?,
                ..self.clone()
            }),
            PenAction::ChangeWidth { width } => {
                if !width.is_finite() || *width <= 0.0 {
                    return Err(SettingsError::InvalidWidth(*width));
                }
                Ok(PenSettings {
                    width: *width,
                    ..self.clone()
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    pub color: Color32,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            color: Color32::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundAction {
    ChangeColor { color: Color32 },
}

impl BackgroundSettings {
    pub fn reduce(&self, action: &BackgroundAction) -> SettingsResult<BackgroundSettings> {
        match action {
            BackgroundAction::ChangeColor { color } => Ok(BackgroundSettings {
                color: color.to_opaque(),
            }),
        }
    }
}

/// Fixed geometry of the drawing surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Size of the oversized drawing surface, larger than any expected window
    pub surface_size: Vec2,
    /// How far (per axis) the pointer may leave the surface before a stroke is cut off
    pub out_of_bound_tolerance: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            surface_size: vec2(4000.0, 3000.0),
            out_of_bound_tolerance: 30.0,
        }
    }
}

/// Parse `#RRGGBB` (either case) into an opaque color.
pub fn parse_hex_color(hex: &str) -> SettingsResult<Color32> {
    let invalid = || SettingsError::InvalidColor(hex.to_owned());
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(invalid)?;
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a color as `#RRGGBB`, dropping alpha
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0000FF"), Ok(Color32::from_rgb(0, 0, 255)));
        assert_eq!(parse_hex_color("#ff8000"), Ok(Color32::from_rgb(255, 128, 0)));
        assert!(parse_hex_color("0000FF").is_err());
        assert!(parse_hex_color("#00F").is_err());
        assert!(parse_hex_color("#+0000F").is_err());
        assert!(parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn test_palette_round_trips_through_hex() {
        for hex in PALETTE {
            let color = parse_hex_color(hex).unwrap();
            assert_eq!(to_hex(color), hex);
        }
    }

    #[test]
    fn test_pen_reducer() {
        let pen = PenSettings::default();

        let blue = pen
            .reduce(&PenAction::ChangeColor {
                hex: "#0000FF".to_owned(),
            })
            .unwrap();
        assert_eq!(blue.color, Color32::from_rgb(0, 0, 255));
        assert_eq!(blue.width, DEFAULT_PEN_WIDTH);

        let wide = blue.reduce(&PenAction::ChangeWidth { width: 10.0 }).unwrap();
        assert_eq!(wide.width, 10.0);
        assert_eq!(wide.color, blue.color);
    }

    #[test]
    fn test_pen_reducer_rejects_contract_violations() {
        let pen = PenSettings::default();

        assert_eq!(
            pen.reduce(&PenAction::ChangeWidth { width: 0.0 }),
            Err(SettingsError::InvalidWidth(0.0))
        );
        assert!(pen.reduce(&PenAction::ChangeWidth { width: f32::NAN }).is_err());
        assert_eq!(
            pen.reduce(&PenAction::ChangeColor {
                hex: "blue".to_owned()
            }),
            Err(SettingsError::InvalidColor("blue".to_owned()))
        );
    }

    #[test]
    fn test_background_reducer() {
        let background = BackgroundSettings::default();
        let dark = background
            .reduce(&BackgroundAction::ChangeColor {
                color: Color32::from_rgb(20, 20, 20),
            })
            .unwrap();
        assert_eq!(dark.color, Color32::from_rgb(20, 20, 20));
    }

    #[test]
    fn test_old_state_gets_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"tool":"Hand"}"#).unwrap();
        assert_eq!(settings.tool, ToolKind::Hand);
        assert_eq!(settings.pen, PenSettings::default());
        assert_eq!(settings.background, BackgroundSettings::default());
    }
}
