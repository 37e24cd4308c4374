//! Lazy single-step cursor over an inner iterator.

use std::borrow::Cow;
use std::mem;

/// What the cursor holds for its current position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Head<T> {
    /// The inner iterator has not been asked for this position yet.
    Unread,
    /// The item at this position.
    Read(T),
    /// The item was handed out by [`Cursor::take`].
    Taken,
    /// The inner iterator is exhausted.
    End,
}

/// A forward cursor: a position plus the item under it, pulled on demand.
///
/// The inner iterator is only advanced when the current item is actually
/// needed, so building a pipeline does no work until the first access.
pub(crate) struct Cursor<I: Iterator> {
    inner: I,
    head: Head<I::Item>,
    position: usize,
}

impl<I: Iterator> Cursor<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner,
            head: Head::Unread,
            position: 0,
        }
    }

    fn load(&mut self) {
        if let Head::Unread = self.head {
            self.head = match self.inner.next() {
                Some(item) => Head::Read(item),
                None => Head::End,
            };
        }
    }

    /// Borrow the item at the current position.
    pub(crate) fn peek(&mut self) -> Option<&I::Item> {
        self.load();
        match &self.head {
            Head::Read(item) => Some(item),
            _ => None,
        }
    }

    /// Move the item at the current position out of the cursor.
    pub(crate) fn take(&mut self) -> Option<I::Item> {
        self.load();
        match mem::replace(&mut self.head, Head::Taken) {
            Head::Read(item) => Some(item),
            other => {
                self.head = other;
                None
            }
        }
    }

    /// Step to the next position. Stepping past the end is a no-op.
    pub(crate) fn advance(&mut self) {
        self.load();
        if !matches!(self.head, Head::End) {
            self.head = Head::Unread;
            self.position += 1;
        }
    }

    pub(crate) fn is_end(&mut self) -> bool {
        self.load();
        matches!(self.head, Head::End)
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}

impl<I> Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    /// The item under the cursor and the inner iterator just past it,
    /// without moving the cursor. An unread item is pulled from a copy of
    /// the inner iterator.
    pub(crate) fn settled(&self) -> (Head<Cow<'_, I::Item>>, Cow<'_, I>) {
        match &self.head {
            Head::Unread => {
                let mut inner = self.inner.clone();
                let head = match inner.next() {
                    Some(item) => Head::Read(Cow::Owned(item)),
                    None => Head::End,
                };
                (head, Cow::Owned(inner))
            }
            Head::Read(item) => (Head::Read(Cow::Borrowed(item)), Cow::Borrowed(&self.inner)),
            Head::Taken => (Head::Taken, Cow::Borrowed(&self.inner)),
            Head::End => (Head::End, Cow::Borrowed(&self.inner)),
        }
    }
}

/// Cursors are equal when they sit at the same position of equal
/// sequences, whether or not the current item has been read yet.
impl<I> PartialEq for Cursor<I>
where
    I: Iterator + Clone + PartialEq,
    I::Item: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.settled() == other.settled()
    }
}

impl<I> Clone for Cursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            head: self.head.clone(),
            position: self.position,
        }
    }
}
