//! Frame preprocessing for the card classifier.
//!
//! Frames go through the configured transform stages, then are scaled to
//! `[0, 1]`, normalised with the configured mean and std, and laid out as an
//! NCHW tensor `[batch, channels, height, width]`.

use image::{GrayImage, ImageBuffer, Pixel};
use ndarray::Array4;
use tracing::debug;

use crate::config::{Config, TensorConfig};
use crate::iterators::{map, Pipe};
use crate::mappers::Transform;

/// Applies the configured transform chain and builds model input.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    stages: Vec<Transform>,
    tensor: TensorConfig,
}

impl Preprocessor {
    pub fn new(config: &Config) -> Self {
        debug!(
            stages = config.preprocess.stages.len(),
            mean = config.tensor.mean,
            std = config.tensor.std,
            "Preprocessor ready"
        );
        Self {
            stages: config.preprocess.stages.clone(),
            tensor: config.tensor.clone(),
        }
    }

    pub fn stages(&self) -> &[Transform] {
        &self.stages
    }

    /// Lazily run every stage over `frames`, one `map` stage per transform.
    pub fn process<'a, I>(&self, frames: I) -> Box<dyn Iterator<Item = GrayImage> + 'a>
    where
        I: Iterator<Item = GrayImage> + 'a,
    {
        type Chain<'a> = Box<dyn Iterator<Item = GrayImage> + 'a>;

        let source: Chain<'a> = Box::new(frames);
        self.stages
            .iter()
            .fold(source, |chain, stage| -> Chain<'a> {
                Box::new(chain.pipe(map(*stage)))
            })
    }

    /// Convert a frame into a `[1, channels, height, width]` tensor.
    pub fn to_tensor<P>(&self, frame: &ImageBuffer<P, Vec<u8>>) -> Array4<f32>
    where
        P: Pixel<Subpixel = u8>,
    {
        let channels = usize::from(P::CHANNEL_COUNT);
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let raw = frame.as_raw();
        let TensorConfig { mean, std } = self.tensor;

        Array4::from_shape_fn((1, channels, height, width), |(_, c, y, x)| {
            let value = raw[(y * width + x) * channels + c];
            (f32::from(value) / 255.0 - mean) / std
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point2f, Rect, Size};
    use image::{Luma, Rgb, RgbImage};

    fn block() -> GrayImage {
        GrayImage::from_fn(4, 4, |x, y| {
            if (1..=2).contains(&x) && (1..=2).contains(&y) {
                Luma([254])
            } else {
                Luma([0])
            }
        })
    }

    fn with_stages(stages: Vec<Transform>) -> Preprocessor {
        let mut config = Config::default();
        config.preprocess.stages = stages;
        Preprocessor::new(&config)
    }

    #[test]
    fn test_no_stages_passes_frames_through() {
        let preprocessor = Preprocessor::new(&Config::default());
        let out: Vec<GrayImage> = preprocessor.process(vec![block()].into_iter()).collect();
        assert_eq!(out, vec![block()]);
    }

    #[test]
    fn test_single_stage() {
        let preprocessor = with_stages(vec![Transform::new(
            0.0,
            Point2f::new(0.0, 0.0),
            Rect::new(0, 0, 4, 4),
            Size::new(2, 2),
        )]);
        let out: Vec<GrayImage> = preprocessor
            .process(vec![block(), block()].into_iter())
            .collect();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|frame| frame.as_raw() == &vec![64; 4]));
    }

    #[test]
    fn test_stages_run_in_order() {
        let center = Point2f::new(1.5, 1.5);
        let roi = Rect::new(0, 0, 4, 4);
        let preprocessor = with_stages(vec![
            Transform::new(90.0, center, roi, roi.size()),
            Transform::new(-90.0, center, roi, roi.size()),
            Transform::new(0.0, center, Rect::new(1, 1, 2, 2), Size::new(2, 2)),
        ]);
        assert_eq!(preprocessor.stages().len(), 3);

        let out: Vec<GrayImage> = preprocessor.process(std::iter::once(block())).collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_raw(), &vec![254; 4]);
    }

    #[test]
    fn test_tensor_shape() {
        let preprocessor = Preprocessor::default();
        let tensor = preprocessor.to_tensor(&GrayImage::new(6, 4));
        assert_eq!(tensor.shape(), &[1, 1, 4, 6]);

        let tensor = preprocessor.to_tensor(&RgbImage::new(3, 2));
        assert_eq!(tensor.shape(), &[1, 3, 2, 3]);
    }

    #[test]
    fn test_tensor_normalization() {
        let preprocessor = Preprocessor::new(&Config::default());

        let white = preprocessor.to_tensor(&GrayImage::from_pixel(2, 2, Luma([255])));
        assert!(white.iter().all(|v| (v - 1.0).abs() < 1e-6));

        let black = preprocessor.to_tensor(&GrayImage::new(2, 2));
        assert!(black.iter().all(|v| (v + 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_tensor_channel_layout() {
        let preprocessor = Preprocessor::new(&Config::default());
        let mut frame = RgbImage::new(2, 1);
        frame.put_pixel(1, 0, Rgb([255, 0, 255]));

        let tensor = preprocessor.to_tensor(&frame);
        assert!((tensor[[0, 0, 0, 1]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 1, 0, 1]] + 1.0).abs() < 1e-6);
        assert!((tensor[[0, 2, 0, 1]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 0, 0, 0]] + 1.0).abs() < 1e-6);
    }
}
