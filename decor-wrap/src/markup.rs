//! Text formatting wrappers
//!
//! `bold`, `italic` and `shout` take an operation producing text and return
//! an operation with the same argument shape whose text is transformed.
//! The wrapper applied closest to the base runs first; outer wrappers
//! enclose the result of inner ones:
//!
//! ```
//! use decor_wrap::markup::{bold, shout};
//!
//! let loud = bold(shout(|text: &str| text.to_string()));
//! assert_eq!(loud("hello"), "<b>HELLO!!!</b>");
//! ```
//!
//! Results that carry no text (`None`, `Err`) pass through untouched, so a
//! formatted lookup still reports not-found and gate denial.

use crate::BoxedOp;

/// Return values a formatting wrapper can transform
pub trait TextOutput {
    /// Type produced after the text is transformed
    type Output;

    /// Apply `transform` to the text carried by `self`, if any
    fn map_text<M>(self, transform: M) -> Self::Output
    where
        M: FnOnce(String) -> String;
}

impl TextOutput for String {
    type Output = String;

    fn map_text<M>(self, transform: M) -> String
    where
        M: FnOnce(String) -> String,
    {
        transform(self)
    }
}

impl<'a> TextOutput for &'a str {
    type Output = String;

    fn map_text<M>(self, transform: M) -> String
    where
        M: FnOnce(String) -> String,
    {
        transform(self.to_string())
    }
}

impl<T: TextOutput> TextOutput for Option<T> {
    type Output = Option<T::Output>;

    fn map_text<M>(self, transform: M) -> Self::Output
    where
        M: FnOnce(String) -> String,
    {
        self.map(|text| text.map_text(transform))
    }
}

impl<T: TextOutput, E> TextOutput for Result<T, E> {
    type Output = Result<T::Output, E>;

    fn map_text<M>(self, transform: M) -> Self::Output
    where
        M: FnOnce(String) -> String,
    {
        self.map(|text| text.map_text(transform))
    }
}

fn embolden(text: String) -> String {
    format!("<b>{}</b>", text)
}

fn italicize(text: String) -> String {
    format!("<i>{}</i>", text)
}

fn exclaim(text: String) -> String {
    format!("{}!!!", text.to_uppercase())
}

/// Surround the result of `f` with `<b>` / `</b>`
pub fn bold<A, R, F>(f: F) -> impl Fn(A) -> R::Output
where
    F: Fn(A) -> R,
    R: TextOutput,
{
    move |args| {
        tracing::trace!("bold");
        f(args).map_text(embolden)
    }
}

/// Surround the result of `f` with `<i>` / `</i>`
pub fn italic<A, R, F>(f: F) -> impl Fn(A) -> R::Output
where
    F: Fn(A) -> R,
    R: TextOutput,
{
    move |args| {
        tracing::trace!("italic");
        f(args).map_text(italicize)
    }
}

/// Uppercase the result of `f` and append `!!!`
pub fn shout<A, R, F>(f: F) -> impl Fn(A) -> R::Output
where
    F: Fn(A) -> R,
    R: TextOutput,
{
    move |args| {
        tracing::trace!("shout");
        f(args).map_text(exclaim)
    }
}

/// A formatting wrapper chosen at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `<b>…</b>`
    Bold,
    /// `<i>…</i>`
    Italic,
    /// Uppercase plus `!!!`
    Shout,
}

impl Style {
    /// Transform a piece of text directly
    pub fn apply(self, text: String) -> String {
        match self {
            Style::Bold => embolden(text),
            Style::Italic => italicize(text),
            Style::Shout => exclaim(text),
        }
    }

    /// Wrap a boxed operation with this style
    pub fn decorate<'a, A, R>(self, f: BoxedOp<'a, A, R>) -> BoxedOp<'a, A, R>
    where
        A: 'a,
        R: TextOutput<Output = R> + 'a,
    {
        match self {
            Style::Bold => Box::new(bold(f)),
            Style::Italic => Box::new(italic(f)),
            Style::Shout => Box::new(shout(f)),
        }
    }
}

/// Wrap `f` with every style in decorator order: the first style listed
/// ends up outermost, the last one runs first.
pub fn decorate_all<'a, A, R>(styles: &[Style], f: BoxedOp<'a, A, R>) -> BoxedOp<'a, A, R>
where
    A: 'a,
    R: TextOutput<Output = R> + 'a,
{
    styles
        .iter()
        .rev()
        .fold(f, |op, style| style.decorate(op))
}
