/// Label-based selector for one dimension of a labeled array.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Selector<L> {
    /// Fixes the dimension to the position of the label and drops it.
    Label(L),
    /// Keeps the whole dimension together with its labels.
    Keep,
}

/// Stand-alone form of [`Selector::Keep`], convertible into any selector.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Keep;

impl<L> Selector<L> {
    pub fn label<T: Into<L>>(label: T) -> Self {
        Self::Label(label.into())
    }

    pub const fn is_label(&self) -> bool {
        matches!(self, Self::Label(_))
    }

    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    pub fn as_label(&self) -> Option<&L> {
        match self {
            Self::Label(label) => Some(label),
            Self::Keep => None,
        }
    }
}

impl<L> From<Keep> for Selector<L> {
    fn from(_: Keep) -> Self {
        Self::Keep
    }
}

/// Builds an array of [`Selector`]s; `..` keeps a dimension, any other
/// expression is converted into a label.
///
/// ```
/// use axisarray::{sel, Label, Selector};
///
/// let selectors: [Selector<Label>; 2] = sel!["a", ..];
/// assert_eq!(selectors, [Selector::Label(Label::from("a")), Selector::Keep]);
/// ```
#[macro_export]
macro_rules! sel {
    (@fold [$( $s:tt )*]) => {
        [$( $s )*]
    };
    (@fold [$( $s:tt )*] ..) => {
        [$( $s )* $crate::Selector::Keep]
    };
    (@fold [$( $s:tt )*] .., $( $t:tt )*) => {
        $crate::sel!(@fold [$( $s )* $crate::Selector::Keep,] $( $t )*)
    };
    (@fold [$( $s:tt )*] $l:expr) => {
        [$( $s )* $crate::Selector::Label(::core::convert::Into::into($l))]
    };
    (@fold [$( $s:tt )*] $l:expr, $( $t:tt )*) => {
        $crate::sel!(@fold
            [$( $s )* $crate::Selector::Label(::core::convert::Into::into($l)),]
            $( $t )*
        )
    };
    ($( $t:tt )*) => {
        $crate::sel!(@fold [] $( $t )*)
    };
}

/// Builds an array of labels, converting every expression with `Into`.
///
/// ```
/// use axisarray::{key, Label};
///
/// let key: [Label; 2] = key!["a", 2];
/// assert_eq!(key, [Label::from("a"), Label::Int(2)]);
/// ```
#[macro_export]
macro_rules! key {
    ($( $l:expr ),* $(,)?) => {
        [$( ::core::convert::Into::into($l) ),*]
    };
}

#[cfg(test)]
mod tests {
    use super::{Keep, Selector};
    use crate::Label;

    #[test]
    fn build_selectors() {
        let subject: [Selector<Label>; 3] = sel![.., "b", ..];

        assert!(subject[0].is_keep());
        assert!(subject[1].is_label());
        assert_eq!(subject[1].as_label(), Some(&Label::from("b")));
        assert_eq!(subject[2], Selector::from(Keep));
    }

    #[test]
    fn build_selectors_with_trailing_comma() {
        let subject: [Selector<Label>; 2] = sel![1, 2,];

        assert_eq!(subject, [Selector::label(1), Selector::label(2)]);
    }

    #[test]
    fn build_key() {
        let subject: [Label; 3] = key!["a", 'x', ("b", 1)];

        assert_eq!(subject[1], Label::Char('x'));
        assert_eq!(subject[2], Label::from(("b", 1)));
    }
}
