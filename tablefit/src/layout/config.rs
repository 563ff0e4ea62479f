//! Column sizing configuration.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Tunables for column width estimation.
///
/// Every field has a default, so a skin only needs to override the fields it
/// cares about. JSON keys are camelCase (`minColumnWidth`, `charWidthPx`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnConfig {
    /// Table width ceiling as a fraction of the viewport.
    pub max_table_width_fraction: f32,

    /// Floor applied to every column after measurement.
    pub min_column_width: f32,

    /// Per-column ceiling, as a fraction of the table ceiling, when the
    /// table has exactly one column.
    pub single_column_max_fraction: f32,

    /// Per-column ceiling, as a fraction of the table ceiling, when the
    /// table has more than one column.
    pub multi_column_max_fraction: f32,

    /// Pixels per weighted character.
    pub char_width_px: f32,

    /// Fixed pixels added to every cell estimate.
    pub padding_px: f32,

    /// Weight of a CJK ideograph.
    pub cjk_char_weight: f32,

    /// Weight of any other character.
    pub other_char_weight: f32,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            max_table_width_fraction: 0.8,
            min_column_width: 50.0,
            single_column_max_fraction: 1.0,
            multi_column_max_fraction: 0.5,
            char_width_px: 7.0,
            padding_px: 32.0,
            cjk_char_weight: 2.0,
            other_char_weight: 1.0,
        }
    }
}

impl ColumnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// Fractions must lie in `(0, 1]`, the column floor must be positive and
    /// the remaining pixel and weight values must be non-negative. All values
    /// must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fraction("maxTableWidthFraction", self.max_table_width_fraction)?;
        fraction("singleColumnMaxFraction", self.single_column_max_fraction)?;
        fraction("multiColumnMaxFraction", self.multi_column_max_fraction)?;

        finite("minColumnWidth", self.min_column_width)?;
        if self.min_column_width <= 0.0 {
            return Err(ConfigError::invalid(
                "minColumnWidth",
                self.min_column_width,
                "must be greater than zero",
            ));
        }

        non_negative("charWidthPx", self.char_width_px)?;
        non_negative("paddingPx", self.padding_px)?;
        non_negative("cjkCharWeight", self.cjk_char_weight)?;
        non_negative("otherCharWeight", self.other_char_weight)?;
        Ok(())
    }

    /// Per-column ceiling for a table of `num_columns` columns whose total
    /// ceiling is `max_table_width`.
    pub fn max_column_width(&self, max_table_width: f32, num_columns: usize) -> f32 {
        if num_columns > 1 {
            max_table_width * self.multi_column_max_fraction
        } else {
            max_table_width * self.single_column_max_fraction
        }
    }

    pub fn max_table_width_fraction(mut self, fraction: f32) -> Self {
        self.max_table_width_fraction = fraction;
        self
    }

    pub fn min_column_width(mut self, width: f32) -> Self {
        self.min_column_width = width;
        self
    }

    pub fn single_column_max_fraction(mut self, fraction: f32) -> Self {
        self.single_column_max_fraction = fraction;
        self
    }

    pub fn multi_column_max_fraction(mut self, fraction: f32) -> Self {
        self.multi_column_max_fraction = fraction;
        self
    }

    pub fn char_width_px(mut self, px: f32) -> Self {
        self.char_width_px = px;
        self
    }

    pub fn padding_px(mut self, px: f32) -> Self {
        self.padding_px = px;
        self
    }

    pub fn cjk_char_weight(mut self, weight: f32) -> Self {
        self.cjk_char_weight = weight;
        self
    }

    pub fn other_char_weight(mut self, weight: f32) -> Self {
        self.other_char_weight = weight;
        self
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "must be finite"))
    }
}

fn fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "must be in (0, 1]"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "must not be negative"))
    }
}
