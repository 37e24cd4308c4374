//! Configuration section types.

use serde::{Deserialize, Serialize};

use crate::mappers::Transform;

/// Transform stages applied to every frame, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Each stage rotates about `center` by `angle` degrees, crops to `roi`
    /// and resizes to `size`
    pub stages: Vec<Transform>,
}

/// Normalisation applied when converting frames to model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TensorConfig {
    /// Subtracted after scaling pixels to `[0, 1]`
    pub mean: f32,

    /// Divisor applied after subtracting the mean
    pub std: f32,
}

impl Default for TensorConfig {
    fn default() -> Self {
        Self {
            mean: 0.5,
            std: 0.5,
        }
    }
}

/// Resource limits for frame loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 10000,
        }
    }
}
