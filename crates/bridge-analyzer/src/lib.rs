//! Bridge Analyzer - domain model and frame preprocessing for recorded
//! bridge games.
//!
//! The crate has two halves that meet in the analyzer:
//!
//! - the bridge domain model ([`types`]) with canonical text forms
//!   ([`display`]) and hashing for marker cards ([`hash`]);
//! - lazy, memoizing iterators ([`iterators`]) that rotate, crop and resize
//!   camera frames before they reach the card classifier.
//!
//! # Architecture
//!
//! ```text
//! File → Decode (gray) → Transform stages (rotate → crop → resize) → NCHW tensor
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use bridge_analyzer::{Config, FrameDecoder, Preprocessor};
//!
//! fn main() -> bridge_analyzer::Result<()> {
//!     let config = Config::load()?;
//!     let decoder = FrameDecoder::new(config.limits.clone());
//!     let preprocessor = Preprocessor::new(&config);
//!
//!     let frame = decoder.load("table.png".as_ref())?;
//!     for frame in preprocessor.process(std::iter::once(frame)) {
//!         let input = preprocessor.to_tensor(&frame);
//!         println!("model input: {:?}", input.shape());
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod display;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod iterators;
pub mod mappers;
pub mod pipeline;
pub mod raster;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use display::{listed, to_string, Listed, Record};
pub use error::{AnalyzerError, ConfigError, PipelineError, PipelineResult, Result, TypeError};
pub use geometry::{Point2f, Rect, Size};
pub use iterators::{map, transformed, MapIter, Pipe, TransformedIter};
pub use mappers::Transform;
pub use pipeline::{FrameDecoder, Preprocessor};
pub use raster::{AsRaster, Raster};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_public_pipeline_wiring() {
        use image::GrayImage;

        let frames = vec![GrayImage::new(8, 8); 3];
        let roi = Rect::new(0, 0, 8, 8);
        let out: Vec<GrayImage> = frames
            .iter()
            .pipe(transformed(45.0, Point2f::new(4.0, 4.0), roi, Size::new(4, 4)))
            .pipe(map(Transform::new(0.0, Point2f::default(), Rect::new(0, 0, 4, 4), Size::new(2, 2))))
            .collect();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|frame| frame.dimensions() == (2, 2)));
    }
}
