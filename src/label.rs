use core::fmt;

/// General-purpose axis label.
///
/// Mixing label kinds lets one array carry, say, a string-labeled axis next
/// to an integer-labeled one.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Label {
    Bool(bool),
    Char(char),
    Int(i64),
    Str(String),
    Tuple(Vec<Label>),
}

impl Label {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }
}

/// Collects anything convertible into labels into one axis.
///
/// ```
/// use axisarray::{labels, Label};
///
/// let axis: Vec<Label> = labels(2..4);
/// assert_eq!(axis, [Label::Int(2), Label::Int(3)]);
/// ```
pub fn labels<L, I>(iter: I) -> Vec<L>
where
    I: IntoIterator,
    I::Item: Into<L>,
{
    iter.into_iter().map(Into::into).collect()
}

macro_rules! impl_from_int {
    ($( $int:ty ),*) => {
        $(
            impl From<$int> for Label {
                fn from(v: $int) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Label {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Label {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<A, B> From<(A, B)> for Label
where
    A: Into<Label>,
    B: Into<Label>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for Label
where
    A: Into<Label>,
    B: Into<Label>,
    C: Into<Label>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

fn fmt_tuple<F>(labels: &[Label], f: &mut fmt::Formatter<'_>, mut fmt: F) -> fmt::Result
where
    F: FnMut(&Label, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    f.write_str("(")?;
    for (i, label) in labels.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        fmt(label, f)?;
    }
    f.write_str(")")
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Debug::fmt(v, f),
            Self::Char(v) => fmt::Debug::fmt(v, f),
            Self::Int(v) => fmt::Debug::fmt(v, f),
            Self::Str(v) => fmt::Debug::fmt(v, f),
            Self::Tuple(v) => fmt_tuple(v, f, fmt::Debug::fmt),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
            Self::Tuple(v) => fmt_tuple(v, f, fmt::Display::fmt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{labels, Label};

    #[test]
    fn convert_from_primitives() {
        assert_eq!(Label::from(3_u8), Label::Int(3));
        assert_eq!(Label::from(-3_i64), Label::Int(-3));
        assert_eq!(Label::from("a"), Label::Str("a".into()));
        assert_eq!(Label::from('x'), Label::Char('x'));
        assert_eq!(Label::from(true), Label::Bool(true));
    }

    #[test]
    fn convert_from_tuples() {
        let label = Label::from(("a", 1));

        assert_eq!(label, Label::Tuple(vec![Label::from("a"), Label::Int(1)]));
        assert_eq!(label.to_string(), "(a, 1)");
        assert_eq!(format!("{:?}", label), "(\"a\", 1)");
    }

    #[test]
    fn collect_labels() {
        let axis: Vec<Label> = labels(["a", "b"]);

        assert_eq!(axis[1].as_str(), Some("b"));
        assert_eq!(axis[1].as_int(), None);

        let axis: Vec<Label> = labels(2..4);

        assert_eq!(axis[0].as_int(), Some(2));
    }

    #[test]
    fn format_labels() {
        assert_eq!(Label::from("a").to_string(), "a");
        assert_eq!(format!("{:?}", Label::from("a")), "\"a\"");
        assert_eq!(format!("{:?}", Label::from('x')), "'x'");
    }
}
