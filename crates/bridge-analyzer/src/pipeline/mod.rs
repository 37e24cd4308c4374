//! From image files to model input: decoding and preprocessing.

pub mod frames;
pub mod preprocess;

pub use frames::FrameDecoder;
pub use preprocess::Preprocessor;
