//! Theme settings and `:root` rendering.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The previewer exposes each theme value as a range slider. Sliders only
//! produce numbers, so enumerated values (color scheme, radii, typography
//! scale) travel as integer codes and are mapped here:
//!
//! | control          | codes  | values                                     |
//! |------------------|--------|--------------------------------------------|
//! | color scheme     | 0..=1  | light, dark                                |
//! | button/border radius | 0..=4 | `--radius-1` .. `--radius-4`, `--radius-round` |
//! | typography scale | 0..=2  | small, medium, large                       |
//!
//! Everything else is passed through after a range check.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::ThemeError;

/// Page color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ColorScheme::Light),
            1 => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    pub fn slider_code(self) -> i64 {
        match self {
            ColorScheme::Light => 0,
            ColorScheme::Dark => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// One step of the Open Props radius scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RadiusStep {
    Radius1,
    #[default]
    Radius2,
    Radius3,
    Radius4,
    Round,
}

impl RadiusStep {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RadiusStep::Radius1),
            1 => Some(RadiusStep::Radius2),
            2 => Some(RadiusStep::Radius3),
            3 => Some(RadiusStep::Radius4),
            4 => Some(RadiusStep::Round),
            _ => None,
        }
    }

    pub fn slider_code(self) -> i64 {
        match self {
            RadiusStep::Radius1 => 0,
            RadiusStep::Radius2 => 1,
            RadiusStep::Radius3 => 2,
            RadiusStep::Radius4 => 3,
            RadiusStep::Round => 4,
        }
    }

    /// Name of the custom property holding this radius
    pub fn var_name(self) -> &'static str {
        match self {
            RadiusStep::Radius1 => "--radius-1",
            RadiusStep::Radius2 => "--radius-2",
            RadiusStep::Radius3 => "--radius-3",
            RadiusStep::Radius4 => "--radius-4",
            RadiusStep::Round => "--radius-round",
        }
    }
}

/// Heading and body font-size scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypographyScale {
    Small,
    #[default]
    Medium,
    Large,
}

// h1, h2, h3, h4, h5, h6, lg, md, sm, xs
const FONT_SIZE_VARS: [&str; 10] = [
    "--font-size-h1",
    "--font-size-h2",
    "--font-size-h3",
    "--font-size-h4",
    "--font-size-h5",
    "--font-size-h6",
    "--font-size-lg",
    "--font-size-md",
    "--font-size-sm",
    "--font-size-xs",
];

const SMALL_SIZES: [&str; 10] = [
    "2.5rem", "1.75rem", "1.25rem", "1.1rem", "1rem", "0.875rem", "1.1rem", "0.875rem", "0.75rem",
    "0.625rem",
];

const MEDIUM_SIZES: [&str; 10] = [
    "3.5rem", "2rem", "1.5rem", "1.25rem", "1.1rem", "1rem", "1.25rem", "1rem", "0.875rem",
    "0.75rem",
];

const LARGE_SIZES: [&str; 10] = [
    "4.5rem", "2.5rem", "1.75rem", "1.5rem", "1.25rem", "1.1rem", "1.5rem", "1.1rem", "1rem",
    "0.875rem",
];

impl TypographyScale {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TypographyScale::Small),
            1 => Some(TypographyScale::Medium),
            2 => Some(TypographyScale::Large),
            _ => None,
        }
    }

    pub fn slider_code(self) -> i64 {
        match self {
            TypographyScale::Small => 0,
            TypographyScale::Medium => 1,
            TypographyScale::Large => 2,
        }
    }

    /// `(custom property, value)` pairs for this scale, largest heading first.
    pub fn font_sizes(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let sizes = match self {
            TypographyScale::Small => &SMALL_SIZES,
            TypographyScale::Medium => &MEDIUM_SIZES,
            TypographyScale::Large => &LARGE_SIZES,
        };
        FONT_SIZE_VARS.iter().copied().zip(sizes.iter().copied())
    }
}

/// Current value of every theme control.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSettings {
    pub color_scheme: ColorScheme,
    /// Palette hue in degrees, 0..=360
    pub hue: u16,
    /// Per-step palette hue rotation, -20..=20
    pub hue_rotate: i8,
    /// Palette chroma, 0.0..=1.0
    pub chroma: f64,
    pub button_radius: RadiusStep,
    pub typography_scale: TypographyScale,
    /// Palette step used for borders, 1..=12
    pub border_color_step: u8,
    pub border_radius: RadiusStep,
    /// Border width in pixels, 0..=5
    pub border_width: u8,
    /// Palette step used for the primary color, 1..=12
    pub primary_color_step: u8,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Light,
            hue: 210,
            hue_rotate: 0,
            chroma: 0.89,
            button_radius: RadiusStep::Radius2,
            typography_scale: TypographyScale::Medium,
            border_color_step: 4,
            border_radius: RadiusStep::Radius2,
            border_width: 1,
            primary_color_step: 8,
        }
    }
}

/// Raw slider values, as submitted by the controls. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeUpdate {
    pub color_scheme: Option<i64>,
    pub hue: Option<i64>,
    pub rotate: Option<i64>,
    pub chroma: Option<f64>,
    pub button_radius: Option<i64>,
    pub typography_scale: Option<i64>,
    pub border_color_step: Option<i64>,
    pub border_radius: Option<i64>,
    pub border_width: Option<i64>,
    pub primary_color_step: Option<i64>,
}

impl ThemeUpdate {
    /// Parse slider values from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(content)?)
    }

    /// Read slider values from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        *self == ThemeUpdate::default()
    }
}

fn in_range<T: TryFrom<i64>>(value: i64, min: i64, max: i64) -> Option<T> {
    if (min..=max).contains(&value) {
        T::try_from(value).ok()
    } else {
        None
    }
}

impl ThemeSettings {
    /// Apply every valid value in `update`.
    ///
    /// Out-of-range values are ignored. Returns the names of the rejected
    /// controls, in field order.
    pub fn apply_update(&mut self, update: &ThemeUpdate) -> Vec<&'static str> {
        let mut rejected = Vec::new();

        macro_rules! apply {
            ($name:literal, $raw:expr, $convert:expr, $field:expr) => {
                if let Some(raw) = $raw {
                    match $convert(raw) {
                        Some(value) => $field = value,
                        None => {
                            warn!("Ignoring out-of-range {}: {}", $name, raw);
                            rejected.push($name);
                        }
                    }
                }
            };
        }

        apply!(
            "color_scheme",
            update.color_scheme,
            ColorScheme::from_code,
            self.color_scheme
        );
        apply!(
            "hue",
            update.hue,
            |v| in_range::<u16>(v, 0, 360),
            self.hue
        );
        apply!(
            "rotate",
            update.rotate,
            |v| in_range::<i8>(v, -20, 20),
            self.hue_rotate
        );
        apply!(
            "chroma",
            update.chroma,
            |v: f64| (0.0..=1.0).contains(&v).then_some(v),
            self.chroma
        );
        apply!(
            "button_radius",
            update.button_radius,
            RadiusStep::from_code,
            self.button_radius
        );
        apply!(
            "typography_scale",
            update.typography_scale,
            TypographyScale::from_code,
            self.typography_scale
        );
        apply!(
            "border_color_step",
            update.border_color_step,
            |v| in_range::<u8>(v, 1, 12),
            self.border_color_step
        );
        apply!(
            "border_radius",
            update.border_radius,
            RadiusStep::from_code,
            self.border_radius
        );
        apply!(
            "border_width",
            update.border_width,
            |v| in_range::<u8>(v, 0, 5),
            self.border_width
        );
        apply!(
            "primary_color_step",
            update.primary_color_step,
            |v| in_range::<u8>(v, 1, 12),
            self.primary_color_step
        );

        rejected
    }
}

/// Render the `:root` block for `settings`, one declaration per line.
pub fn render_root_block(settings: &ThemeSettings) -> String {
    let mut css = vec![":root {".to_string()];
    css.push(format!("color-scheme: {};", settings.color_scheme.as_str()));
    css.push(format!("--palette-hue: {};", settings.hue));
    css.push(format!("--palette-hue-rotate-by: {};", settings.hue_rotate));
    css.push(format!("--palette-chroma: {:?};", settings.chroma));
    css.push(format!(
        "--button-border-radius: var({});",
        settings.button_radius.var_name()
    ));
    for (var, value) in settings.typography_scale.font_sizes() {
        css.push(format!("{var}: {value};"));
    }
    css.push(format!(
        "--border-color: var(--color-{});",
        settings.border_color_step
    ));
    css.push(format!(
        "--border-radius: var({});",
        settings.border_radius.var_name()
    ));
    css.push(format!("--border-width: {}px;", settings.border_width));
    css.push(format!(
        "--primary: var(--color-{});",
        settings.primary_color_step
    ));
    css.push("}".to_string());
    css.join("\n")
}
