//! Stacking wrappers around a base operation
//!
//! Any function taking an operation and returning an operation is a wrapper.
//! Wrappers stack by plain nesting, by the [`Compose`] builder (innermost
//! first), or by [`decorate!`](crate::decorate) (outermost first, in the
//! order decorators are usually written). All three produce the same
//! operation:
//!
//! ```
//! use decor_wrap::compose::compose;
//! use decor_wrap::decorate;
//! use decor_wrap::markup::{bold, shout};
//!
//! let base = |text: String| text;
//! let nested = bold(shout(base));
//! let built = compose(base).wrap(shout).wrap(bold).build();
//! let stacked = decorate!(bold, shout => base);
//!
//! assert_eq!(nested("hi".into()), "<b>HI!!!</b>");
//! assert_eq!(built("hi".into()), nested("hi".into()));
//! assert_eq!(stacked("hi".into()), nested("hi".into()));
//! ```

/// An operation under construction, together with how many wrappers it carries
#[derive(Debug, Clone)]
pub struct Compose<F> {
    op: F,
    layers: usize,
}

/// Start composing around `base`
pub fn compose<F>(base: F) -> Compose<F> {
    Compose { op: base, layers: 0 }
}

impl<F> Compose<F> {
    /// Apply `wrapper` around everything composed so far
    pub fn wrap<G, W>(self, wrapper: W) -> Compose<G>
    where
        W: FnOnce(F) -> G,
    {
        tracing::trace!(layer = self.layers + 1, "wrapping operation");
        Compose {
            op: wrapper(self.op),
            layers: self.layers + 1,
        }
    }

    /// Number of wrappers applied
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Invoke the composed operation without finishing the builder
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        (self.op)(args)
    }

    /// Finish composing and return the operation
    pub fn build(self) -> F {
        self.op
    }
}

/// Stack wrappers around a base operation, outermost first.
///
/// `decorate!(a, b, c => base)` expands to `a(b(c(base)))`, so `c` runs
/// closest to `base` and `a` sees the final result. Wrappers needing
/// configuration can be given as closures: `decorate!(|f| gate.guard(f) => base)`.
#[macro_export]
macro_rules! decorate {
    (=> $base:expr) => {
        $base
    };
    ($outer:expr $(, $inner:expr)* => $base:expr) => {
        ($outer)($crate::decorate!($($inner),* => $base))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{bold, italic, shout};
    use crate::testing::CallCounter;

    #[test]
    fn test_builder_matches_nesting() {
        let base = |text: String| text;
        let built = compose(base).wrap(italic).wrap(bold).build();
        assert_eq!(built("T".into()), bold(italic(base))("T".into()));
        assert_eq!(built("T".into()), "<b><i>T</i></b>");
    }

    #[test]
    fn test_macro_matches_nesting() {
        let base = |text: String| text;
        let op = decorate!(italic, bold => base);
        assert_eq!(op("T".into()), "<i><b>T</b></i>");
    }

    #[test]
    fn test_grouping_is_associative() {
        let base = |text: String| text;
        let inner_first = compose(compose(base).wrap(shout).wrap(italic).build())
            .wrap(bold)
            .build();
        let flat = compose(base).wrap(shout).wrap(italic).wrap(bold).build();
        assert_eq!(inner_first("hey".into()), flat("hey".into()));
        assert_eq!(flat("hey".into()), "<b><i>HEY!!!</i></b>");
    }

    #[test]
    fn test_layers_and_call() {
        let composed = compose(|n: u8| n.to_string()).wrap(bold).wrap(shout);
        assert_eq!(composed.layers(), 2);
        assert_eq!(composed.call(7), "<B>7</B>!!!");
    }

    #[test]
    fn test_each_layer_calls_base_once() {
        let counter = CallCounter::new();
        let op = decorate!(bold, italic, shout => counter.probe(|n: u32| n.to_string()));
        assert_eq!(op(1), "<b><i>1!!!</i></b>");
        assert_eq!(op(2), "<b><i>2!!!</i></b>");
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_empty_stack() {
        let op = decorate!(=> |n: u32| n + 1);
        assert_eq!(op(1), 2);
        assert_eq!(compose(|n: u32| n + 1).build()(1), 2);
    }
}
