use core::{fmt, hash::Hash};
use std::collections::HashMap;

use log::trace;

use crate::{Error, Result};

/// Axes with more labels than this are abbreviated when displayed.
const ABBREVIATION_THRESHOLD: usize = 20;
const NUM_EDGE_LABELS: usize = 3;

/// Ordered, duplicate-free labels of one dimension together with the
/// label → position lookup built from them.
#[derive(Clone)]
pub struct Axis<L> {
    labels: Vec<L>,
    lookup: HashMap<L, usize>,
}

impl<L> Axis<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    /// Builds the lookup for dimension `axis`, rejecting repeated labels.
    pub(crate) fn build(axis: usize, labels: Vec<L>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            if lookup.insert(label.clone(), position).is_some() {
                return Err(Error::DuplicateLabel {
                    axis,
                    label: format!("{:?}", label),
                });
            }
        }
        trace!("built lookup for axis {} with {} labels", axis, labels.len());

        Ok(Self { labels, lookup })
    }

    /// Position of `label`, if it belongs to this axis.
    #[inline]
    pub fn position(&self, label: &L) -> Option<usize> {
        self.lookup.get(label).copied()
    }

    #[inline]
    pub fn contains(&self, label: &L) -> bool {
        self.lookup.contains_key(label)
    }
}

impl<L> Axis<L> {
    #[inline]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&L> {
        self.labels.get(position)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, L> {
        self.labels.iter()
    }
}

impl<L: PartialEq> PartialEq for Axis<L> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl<L: Eq> Eq for Axis<L> {}

impl<L: fmt::Debug> fmt::Debug for Axis<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Axis").field(&self.labels).finish()
    }
}

impl<L: fmt::Display> fmt::Display for Axis<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.labels.len();
        let abbreviate = !f.alternate() && len > ABBREVIATION_THRESHOLD;

        f.write_str("[")?;
        for (i, label) in self.labels.iter().enumerate() {
            if abbreviate && i >= NUM_EDGE_LABELS && i < len - NUM_EDGE_LABELS {
                if i == NUM_EDGE_LABELS {
                    f.write_str(", …")?;
                }
                continue;
            }
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", label)?;
        }
        f.write_str("]")
    }
}

impl<'a, L> IntoIterator for &'a Axis<L> {
    type Item = &'a L;
    type IntoIter = core::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;
    use crate::{labels, Error, Label, Result};

    #[test]
    fn build_lookup() -> Result<()> {
        let axis = Axis::build(0, labels::<Label, _>(["a", "b", "c"]))?;

        assert_eq!(axis.len(), 3);
        assert_eq!(axis.position(&"b".into()), Some(1));
        assert_eq!(axis.position(&"d".into()), None);
        assert_eq!(axis.get(2), Some(&Label::from("c")));
        for (i, label) in axis.iter().enumerate() {
            assert_eq!(axis.position(label), Some(i));
        }

        Ok(())
    }

    #[test]
    fn build_with_duplicate_label() {
        let e = Axis::build(1, labels::<Label, _>([1, 2, 1])).unwrap_err();

        assert_eq!(
            e,
            Error::DuplicateLabel {
                axis: 1,
                label: "1".to_owned()
            }
        );
    }

    #[test]
    fn build_empty() -> Result<()> {
        let axis = Axis::<Label>::build(0, Vec::new())?;

        assert!(axis.is_empty());
        assert_eq!(axis.to_string(), "[]");

        Ok(())
    }

    #[test]
    fn format_short_axis() -> Result<()> {
        let axis = Axis::build(0, labels::<Label, _>(["a", "b"]))?;

        assert_eq!(axis.to_string(), "[a, b]");
        assert_eq!(format!("{:?}", axis), "Axis([\"a\", \"b\"])");

        Ok(())
    }

    #[test]
    fn format_long_axis() -> Result<()> {
        let axis = Axis::build(0, labels::<Label, _>(1..=25))?;

        assert_eq!(axis.to_string(), "[1, 2, 3, …, 23, 24, 25]");
        assert_eq!(
            format!("{:#}", axis),
            format!(
                "[{}]",
                (1..=25).map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
            )
        );

        Ok(())
    }
}
