use serde::{Deserialize, Serialize};

use crate::decimation::{DecimationMode, ScalingMode};
use crate::error::{ChartError, ChartResult};
use crate::render::SeriesStyle;

/// Construction-time configuration of an [`XyPainter`](super::XyPainter).
///
/// Serializable so host applications can keep painter setup alongside the
/// rest of their chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PainterConfig {
    #[serde(default)]
    pub mode: DecimationMode,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub scaling: ScalingMode,
    #[serde(default)]
    pub style: SeriesStyle,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self::absolute(default_line_width())
    }
}

impl PainterConfig {
    /// Config for values drawn at their absolute magnitude.
    #[must_use]
    pub fn absolute(line_width: f64) -> Self {
        Self {
            mode: DecimationMode::default(),
            line_width,
            scaling: ScalingMode::Absolute,
            style: SeriesStyle::default(),
        }
    }

    /// Config for values normalized against the series' own height.
    #[must_use]
    pub fn relative(line_width: f64, max_value_offset: f64) -> Self {
        Self {
            scaling: ScalingMode::Relative { max_value_offset },
            ..Self::absolute(line_width)
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DecimationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the mode from a property-style name, see [`DecimationMode::from_property`].
    #[must_use]
    pub fn with_mode_property(self, value: Option<&str>) -> Self {
        self.with_mode(DecimationMode::from_property(value))
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and >= 0".to_owned(),
            ));
        }
        if let ScalingMode::Relative { max_value_offset } = self.scaling {
            if !max_value_offset.is_finite() || max_value_offset < 0.0 {
                return Err(ChartError::InvalidData(
                    "max value offset must be finite and >= 0".to_owned(),
                ));
            }
        }
        self.style.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_line_width() -> f64 {
    1.0
}
