//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if !self.tensor.mean.is_finite() {
            return Err(ConfigError::ValidationError(
                "tensor.mean must be finite".into(),
            ));
        }
        if !(self.tensor.std.is_finite() && self.tensor.std > 0.0) {
            return Err(ConfigError::ValidationError(
                "tensor.std must be > 0".into(),
            ));
        }

        for (index, stage) in self.preprocess.stages.iter().enumerate() {
            if !stage.angle().is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "preprocess.stages[{index}].angle must be finite"
                )));
            }
            if !(stage.center().x.is_finite() && stage.center().y.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "preprocess.stages[{index}].center must be finite"
                )));
            }
            if stage.roi().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "preprocess.stages[{index}].roi must not be empty"
                )));
            }
            if stage.size().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "preprocess.stages[{index}].size must not be empty"
                )));
            }
        }
        Ok(())
    }
}
