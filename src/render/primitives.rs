use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Colors used when a series is painted.
///
/// A missing line color skips the stroke, a missing fill color skips the
/// area fill. `fill_color_end` turns the fill into a vertical gradient.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesStyle {
    #[serde(default)]
    pub line_color: Option<Color>,
    #[serde(default)]
    pub fill_color: Option<Color>,
    #[serde(default)]
    pub fill_color_end: Option<Color>,
}

impl SeriesStyle {
    #[must_use]
    pub fn line(color: Color) -> Self {
        Self {
            line_color: Some(color),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill_gradient(mut self, start: Color, end: Color) -> Self {
        self.fill_color = Some(start);
        self.fill_color_end = Some(end);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for color in [self.line_color, self.fill_color, self.fill_color_end]
            .into_iter()
            .flatten()
        {
            color.validate()?;
        }
        Ok(())
    }
}
