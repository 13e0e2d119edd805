//! Coercion of arbitrary values to display text.
//!
//! Columns never format records themselves; they go through [`force_text`],
//! which accepts anything implementing [`std::fmt::Display`]. Deferred text
//! is covered by [`LazyText`], which delays producing its string until the
//! first time it is displayed and caches the result.

use once_cell::sync::OnceCell;
use std::fmt;

/// Coerce a value to owned display text.
pub fn force_text<T: fmt::Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Display text whose computation is deferred until first use.
///
/// The thunk runs at most once; later uses reuse the cached string. Useful
/// when producing the text is expensive and the containing cell may never
/// be rendered.
pub struct LazyText {
    thunk: Box<dyn Fn() -> String + Send + Sync>,
    cell: OnceCell<String>,
}

impl LazyText {
    /// Create deferred text from a thunk.
    pub fn new(thunk: impl Fn() -> String + Send + Sync + 'static) -> Self {
        LazyText {
            thunk: Box::new(thunk),
            cell: OnceCell::new(),
        }
    }

    /// Force the text, computing it on first use.
    pub fn get(&self) -> &str {
        self.cell.get_or_init(|| (self.thunk)())
    }
}

impl fmt::Display for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get())
    }
}

impl fmt::Debug for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(text) => f.debug_tuple("LazyText").field(text).finish(),
            None => f.write_str("LazyText(<deferred>)"),
        }
    }
}
