use serde::{Deserialize, Serialize};

use crate::geometry::{Affine, Point2f, Rect, Size};
use crate::iterators::{Mapper, TransformedParams};
use crate::raster::{AsRaster, Raster};

/// Rotate about a centre, crop and resize a frame.
///
/// The uncached counterpart of
/// [`TransformedIter`](crate::iterators::TransformedIter); plug it into a
/// pipeline with [`map`](crate::iterators::map).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Transform {
    angle: f64,
    center: Point2f,
    roi: Rect,
    size: Size,
}

impl Transform {
    pub fn new(angle: f64, center: Point2f, roi: Rect, size: Size) -> Self {
        Self {
            angle,
            center,
            roi,
            size,
        }
    }

    /// Rotation in degrees, counter-clockwise.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn center(&self) -> Point2f {
        self.center
    }

    pub fn roi(&self) -> Rect {
        self.roi
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Apply the transform to `frame`.
    ///
    /// The rotation keeps the input canvas, so corners rotated out of it are
    /// lost and uncovered pixels are black.
    pub fn apply<R: Raster>(&self, frame: &R) -> R {
        let rotation = Affine::rotation(self.center, self.angle, 1.0);
        frame
            .warp_affine(&rotation, frame.size())
            .crop(self.roi)
            .resize(self.size)
    }
}

impl From<TransformedParams> for Transform {
    fn from(params: TransformedParams) -> Self {
        Self::new(params.angle, params.center, params.roi, params.size)
    }
}

impl<T: AsRaster> Mapper<T> for Transform {
    type Output = T::Raster;

    fn call(&self, frame: T) -> Self::Output {
        self.apply(frame.as_raster())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterators::{map, Pipe};
    use image::{GrayImage, Luma};

    fn block() -> GrayImage {
        let mut frame = GrayImage::new(4, 4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            frame.put_pixel(x, y, Luma([254]));
        }
        frame
    }

    /// A 2×2 block in the middle of a 4×4 frame with one cell missing.
    fn notched(missing: (u32, u32)) -> GrayImage {
        let mut frame = GrayImage::new(4, 4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            if (x, y) != missing {
                frame.put_pixel(x, y, Luma([0xff]));
            }
        }
        frame
    }

    /// Each frame is the previous one turned a quarter counter-clockwise.
    fn quarter_turns() -> [GrayImage; 4] {
        [notched((2, 1)), notched((1, 1)), notched((1, 2)), notched((2, 2))]
    }

    fn rotation_cases() -> Vec<(f64, Point2f, Rect, (i32, i32))> {
        let centred = [0.0, 90.0, 180.0, 270.0, 360.0]
            .into_iter()
            .map(|angle| (angle, Point2f::new(1.5, 1.5), Rect::new(0, 0, 4, 4), (0, 0)));

        let off_centre = [
            (0.0, Rect::new(1, 1, 2, 2)),
            (90.0, Rect::new(1, 0, 2, 2)),
            (180.0, Rect::new(0, 0, 2, 2)),
            (270.0, Rect::new(0, 1, 2, 2)),
            (360.0, Rect::new(1, 1, 2, 2)),
        ]
        .into_iter()
        .map(|(angle, roi)| (angle, Point2f::new(1.0, 1.0), roi, (1, 1)));

        centred.chain(off_centre).collect()
    }

    #[test]
    fn test_resize_down() {
        let frames = vec![block(); 4];
        let mut it = frames.iter().pipe(map(Transform::new(
            0.0,
            Point2f::new(0.0, 0.0),
            Rect::new(0, 0, 4, 4),
            Size::new(2, 2),
        )));

        let frame = it.get().map(|f| f.as_raw().clone());
        assert_eq!(frame, Some(vec![64; 4]));
    }

    #[test]
    fn test_resize_up() {
        let frame = Transform::new(
            0.0,
            Point2f::new(0.0, 0.0),
            Rect::new(0, 0, 4, 4),
            Size::new(5, 5),
        )
        .apply(&block());

        let mut expected = GrayImage::new(5, 5);
        for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3)] {
            expected.put_pixel(x, y, Luma([125]));
        }
        for (x, y) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
            expected.put_pixel(x, y, Luma([178]));
        }
        expected.put_pixel(2, 2, Luma([254]));

        assert_eq!(frame, expected);
    }

    #[test]
    fn test_rotation_round_trip() {
        let frames = quarter_turns();
        let roi = Rect::new(0, 0, 4, 4);

        for (angle, center, _, _) in rotation_cases() {
            let forward = Transform::new(angle, center, roi, roi.size());
            let backward = Transform::new(-angle, center, roi, roi.size());
            let restored: Vec<GrayImage> = frames
                .iter()
                .pipe(map(forward))
                .pipe(map(backward))
                .collect();

            assert_eq!(restored.as_slice(), frames.as_slice(), "angle {angle}, center {center:?}");
        }
    }

    #[test]
    fn test_rotation() {
        let frames = quarter_turns();

        for (angle, center, roi, (x, y)) in rotation_cases() {
            let selected = Rect::new(x, y, roi.width, roi.height);
            let mut it = frames.iter().pipe(map(Transform::new(angle, center, roi, roi.size())));

            for i in 0..frames.len() {
                let index = (angle as usize / 90 + i) % frames.len();
                let expected = Raster::crop(&frames[index], selected);
                assert_eq!(
                    it.get(),
                    Some(&expected),
                    "angle {angle}, center {center:?}, frame {i}"
                );
                it.advance();
            }
        }
    }

    #[test]
    fn test_mapper_accepts_owned_frames() {
        let transform = Transform::new(
            0.0,
            Point2f::new(0.0, 0.0),
            Rect::new(1, 1, 2, 2),
            Size::new(2, 2),
        );
        let out = transform.call(block());
        assert_eq!(out.into_raw(), vec![254; 4]);
    }

    #[test]
    fn test_ordering_is_field_wise() {
        let roi = Rect::new(0, 0, 4, 4);
        let size = Size::new(4, 4);
        let a = Transform::new(0.0, Point2f::new(0.0, 0.0), roi, size);
        let b = Transform::new(90.0, Point2f::new(0.0, 0.0), roi, size);
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a, Transform::new(0.0, Point2f::default(), roi, size));
    }

    #[test]
    fn test_serde_round_trip() {
        let transform = Transform::new(
            270.0,
            Point2f::new(1.0, 1.0),
            Rect::new(0, 1, 2, 2),
            Size::new(2, 2),
        );
        let json = serde_json::to_string(&transform).unwrap();
        let parsed: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, transform);
    }
}
