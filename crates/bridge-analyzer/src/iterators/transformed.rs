//! Geometric transform adapter over a sequence of frames.
//!
//! Each frame is rotated about a centre, cut to a region of interest and
//! resized, in that order. The result for the current position is computed
//! on first access and reused until the cursor moves.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cursor::Cursor;
use super::Stage;
use crate::geometry::{Point2f, Rect, Size};
use crate::mappers::Transform;
use crate::raster::AsRaster;

/// Rotation, crop and resize settings of a transform stage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct TransformedParams {
    /// Rotation in degrees, counter-clockwise.
    pub angle: f64,
    pub center: Point2f,
    pub roi: Rect,
    pub size: Size,
}

impl TransformedParams {
    pub fn new(angle: f64, center: Point2f, roi: Rect, size: Size) -> Self {
        Self {
            angle,
            center,
            roi,
            size,
        }
    }
}

impl From<Transform> for TransformedParams {
    fn from(transform: Transform) -> Self {
        Self::new(
            transform.angle(),
            transform.center(),
            transform.roi(),
            transform.size(),
        )
    }
}

/// Build a transform stage for [`Pipe::pipe`](super::Pipe::pipe).
pub fn transformed(angle: f64, center: Point2f, roi: Rect, size: Size) -> TransformedParams {
    TransformedParams::new(angle, center, roi, size)
}

/// Whether the cached frame matches the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    #[default]
    Dirty,
    Clean,
}

type Frame<I> = <<I as Iterator>::Item as AsRaster>::Raster;

/// Iterator adapter yielding transformed copies of the inner frames.
pub struct TransformedIter<I>
where
    I: Iterator,
    I::Item: AsRaster,
{
    cursor: Cursor<I>,
    params: TransformedParams,
    content: Option<Frame<I>>,
    state: CacheState,
}

impl<I> TransformedIter<I>
where
    I: Iterator,
    I::Item: AsRaster,
{
    /// Wrap `inner`; no frame is transformed until the first access.
    pub fn new(inner: I, params: TransformedParams) -> Self {
        Self {
            cursor: Cursor::new(inner),
            params,
            content: None,
            state: CacheState::Dirty,
        }
    }

    /// Shorthand for [`TransformedIter::new`] with loose parameters.
    pub fn with_parameters(inner: I, angle: f64, center: Point2f, roi: Rect, size: Size) -> Self {
        Self::new(inner, TransformedParams::new(angle, center, roi, size))
    }

    /// The transformed frame at the current position, or `None` past the
    /// end.
    pub fn get(&mut self) -> Option<&Frame<I>> {
        if self.state == CacheState::Dirty {
            let transform = Transform::from(self.params);
            self.content = self
                .cursor
                .peek()
                .map(|frame| transform.apply(frame.as_raster()));
            self.state = CacheState::Clean;
            trace!(position = self.cursor.position(), "Transformed frame");
        }
        self.content.as_ref()
    }

    /// Step to the next frame; the cache becomes stale.
    pub fn advance(&mut self) -> &mut Self {
        self.cursor.advance();
        self.state = CacheState::Dirty;
        self
    }

    /// Number of frames advanced so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// True once the inner sequence is exhausted.
    pub fn is_end(&mut self) -> bool {
        self.cursor.is_end()
    }

    /// Whether the cached frame belongs to the current position.
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// The stage parameters this adapter was built from.
    pub fn parameters(&self) -> &TransformedParams {
        &self.params
    }
}

impl<I> Iterator for TransformedIter<I>
where
    I: Iterator,
    I::Item: AsRaster,
{
    type Item = Frame<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.get()?;
        let frame = self.content.take();
        self.advance();
        frame
    }
}

impl<I> Clone for TransformedIter<I>
where
    I: Iterator + Clone,
    I::Item: AsRaster + Clone,
{
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            params: self.params,
            content: self.content.clone(),
            state: self.state,
        }
    }
}

/// Adapters are equal when they sit at the same position of equal inner
/// sequences with equal parameters. The cache does not take part.
impl<I> PartialEq for TransformedIter<I>
where
    I: Iterator + Clone + PartialEq,
    I::Item: AsRaster + Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.cursor == other.cursor
    }
}

impl<I> Stage<I> for TransformedParams
where
    I: Iterator,
    I::Item: AsRaster,
{
    type Iter = TransformedIter<I>;

    fn attach(self, inner: I) -> Self::Iter {
        TransformedIter::new(inner, self)
    }
}
