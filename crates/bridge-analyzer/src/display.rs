//! Canonical text forms for analyzer values.
//!
//! Every type that can be written into a [`fmt::Formatter`] (that is, every
//! [`Display`] type) can be turned into its canonical string with
//! [`to_string`]. Containers are printed through [`Listed`], which gives all
//! sequences in the crate the same shape:
//!
//! ```text
//! []                  empty
//! [ e1, e2, ..., en ] non-empty
//! ```
//!
//! Aggregates are printed through [`Record`] as `name { k1 = v1, k2 = v2 }`.

use std::fmt::{self, Display, Write};

/// Render a value into a freshly allocated string.
///
/// Only available for types implementing [`Display`]; anything else is
/// rejected at compile time.
pub fn to_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Borrowing adapter that prints any iterable of printable items as a list.
///
/// Nested containers print recursively since `Listed` is itself
/// [`Display`].
#[derive(Debug, Clone, Copy)]
pub struct Listed<'a, C: ?Sized>(pub &'a C);

/// Wrap a container so it prints as `[ e1, ..., en ]`.
pub fn listed<C: ?Sized>(items: &C) -> Listed<'_, C> {
    Listed(items)
}

impl<'a, C> Display for Listed<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;

        let mut empty = true;
        for item in self.0 {
            f.write_str(if empty { " " } else { ", " })?;
            write!(f, "{item}")?;
            empty = false;
        }

        if empty {
            f.write_char(']')
        } else {
            f.write_str(" ]")
        }
    }
}

/// Writer for aggregate values, modelled after [`fmt::DebugStruct`].
///
/// Produces `name { k1 = v1, k2 = v2 }`, or `name {}` without fields.
pub struct Record<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
    close: char,
}

impl<'a, 'b> Record<'a, 'b> {
    /// Start a brace-delimited record.
    pub fn new(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        Self::open(f, name, '{', '}')
    }

    /// Start a bracket-delimited record (`name [ k = v ]`).
    pub fn bracketed(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        Self::open(f, name, '[', ']')
    }

    fn open(f: &'a mut fmt::Formatter<'b>, name: &str, open: char, close: char) -> Self {
        let result = write!(f, "{name} {open}");
        Self {
            f,
            result,
            has_fields: false,
            close,
        }
    }

    /// Append a `name = value` field.
    pub fn field(&mut self, name: &str, value: &dyn Display) -> &mut Self {
        self.result = self.result.and_then(|_| {
            let separator = if self.has_fields { ", " } else { " " };
            write!(self.f, "{separator}{name} = {value}")
        });
        self.has_fields = true;
        self
    }

    /// Close the record.
    pub fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| {
            if self.has_fields {
                write!(self.f, " {}", self.close)
            } else {
                self.f.write_char(self.close)
            }
        })
    }
}
