//! Lazy, memoizing iterator adapters and their composition.
//!
//! Adapters are built from *stages*: a stage holds an adapter's parameters
//! and wraps an inner iterator when attached. [`Pipe::pipe`] attaches stages
//! left to right, so
//!
//! ```
//! use bridge_analyzer::iterators::{map, Pipe};
//!
//! let lengths: Vec<usize> = ["a", "bcd"]
//!     .iter()
//!     .pipe(map(|word: &&str| word.len()))
//!     .pipe(map(|len: usize| len * 2))
//!     .collect();
//! assert_eq!(lengths, vec![2, 6]);
//! ```
//!
//! Nothing runs until an element is dereferenced, and each adapter computes
//! the value at a position at most once.

mod cursor;
pub mod map;
pub mod transformed;

pub use map::{map, MapIter, MapParams, Mapper};
pub use transformed::{transformed, CacheState, TransformedIter, TransformedParams};

/// Parameters of an adapter that can wrap an inner iterator.
pub trait Stage<I: Iterator> {
    type Iter: Iterator;

    fn attach(self, inner: I) -> Self::Iter;
}

/// Attach stages to any iterator.
pub trait Pipe: Iterator + Sized {
    fn pipe<S: Stage<Self>>(self, stage: S) -> S::Iter {
        stage.attach(self)
    }
}

impl<I: Iterator> Pipe for I {}
