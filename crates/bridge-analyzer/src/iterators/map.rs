//! Lazy mapping adapter with a per-position cache.
//!
//! A [`MapIter`] applies a [`Mapper`] to the item under its cursor the first
//! time that position is dereferenced and keeps the result until the cursor
//! moves. Stacking several `map` stages therefore never maps an element twice.

use super::cursor::{Cursor, Head};
use super::Stage;

/// A pure unary function used by [`MapIter`].
///
/// Every `Fn(In) -> Out` is a mapper; so is
/// [`Transform`](crate::mappers::Transform).
pub trait Mapper<In> {
    type Output;

    fn call(&self, input: In) -> Self::Output;
}

impl<In, Out, F> Mapper<In> for F
where
    F: Fn(In) -> Out,
{
    type Output = Out;

    fn call(&self, input: In) -> Out {
        self(input)
    }
}

/// The mapper of a map stage.
///
/// Two parameter sets are equal when their mappers are: function pointers
/// and transforms compare, closures do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MapParams<M> {
    pub mapper: M,
}

impl<M> MapParams<M> {
    /// Wrap a mapper.
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }
}

/// Build a map stage for [`Pipe::pipe`](super::Pipe::pipe).
pub fn map<M>(mapper: M) -> MapParams<M> {
    MapParams::new(mapper)
}

/// Iterator adapter mapping each inner item, memoized per position.
pub struct MapIter<I, M>
where
    I: Iterator,
    M: Mapper<I::Item>,
{
    cursor: Cursor<I>,
    params: MapParams<M>,
    cached: Option<M::Output>,
}

impl<I, M> MapIter<I, M>
where
    I: Iterator,
    M: Mapper<I::Item>,
{
    /// Wrap `inner`; nothing is pulled or mapped until the first access.
    pub fn new(inner: I, params: MapParams<M>) -> Self {
        Self {
            cursor: Cursor::new(inner),
            params,
            cached: None,
        }
    }

    /// Shorthand for [`MapIter::new`] with a bare mapper.
    pub fn with_mapper(inner: I, mapper: M) -> Self {
        Self::new(inner, MapParams::new(mapper))
    }

    /// The mapped value at the current position.
    ///
    /// The mapper runs on the first call for a position; later calls return
    /// the cached value. Returns `None` past the end.
    pub fn get(&mut self) -> Option<&M::Output> {
        if self.cached.is_none() {
            let item = self.cursor.take()?;
            self.cached = Some(self.params.mapper.call(item));
        }
        self.cached.as_ref()
    }

    /// Step to the next position, dropping the cached value.
    pub fn advance(&mut self) -> &mut Self {
        self.cursor.advance();
        self.cached = None;
        self
    }

    /// Number of positions advanced so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// True once the inner sequence is exhausted.
    pub fn is_end(&mut self) -> bool {
        self.cached.is_none() && self.cursor.is_end()
    }

    /// The stage parameters this adapter was built from.
    pub fn parameters(&self) -> &MapParams<M> {
        &self.params
    }
}

impl<I, M> Iterator for MapIter<I, M>
where
    I: Iterator,
    M: Mapper<I::Item>,
{
    type Item = M::Output;

    fn next(&mut self) -> Option<Self::Item> {
        self.get()?;
        let value = self.cached.take();
        self.advance();
        value
    }
}

impl<I, M> Clone for MapIter<I, M>
where
    I: Iterator + Clone,
    I::Item: Clone,
    M: Mapper<I::Item> + Clone,
    M::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            params: self.params.clone(),
            cached: self.cached.clone(),
        }
    }
}

/// Adapters are equal when they sit at the same position of equal inner
/// sequences with equal mappers. A value already mapped at the current
/// position is compared against the mapping of the other side's item.
impl<I, M> PartialEq for MapIter<I, M>
where
    I: Iterator + Clone + PartialEq,
    I::Item: Clone + PartialEq,
    M: Mapper<I::Item> + PartialEq,
    M::Output: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.position() != other.position() || self.params != other.params {
            return false;
        }

        let (head, inner) = self.cursor.settled();
        let (other_head, other_inner) = other.cursor.settled();
        if inner != other_inner {
            return false;
        }

        match (head, other_head) {
            (Head::Taken, Head::Taken) => self.cached == other.cached,
            (Head::Taken, Head::Read(item)) => {
                self.cached.as_ref() == Some(&self.params.mapper.call(item.into_owned()))
            }
            (Head::Read(item), Head::Taken) => {
                other.cached.as_ref() == Some(&other.params.mapper.call(item.into_owned()))
            }
            (head, other_head) => head == other_head,
        }
    }
}

impl<I, M> Stage<I> for MapParams<M>
where
    I: Iterator,
    M: Mapper<I::Item>,
{
    type Iter = MapIter<I, M>;

    fn attach(self, inner: I) -> Self::Iter {
        MapIter::new(inner, self)
    }
}
