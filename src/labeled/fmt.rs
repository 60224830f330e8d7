use core::fmt;

use super::LabeledArray;
use crate::{array::FormatOption, ColumnMajor, NDArray, Order, Shape};

/// Name of `T` without its module path, e.g. `Complex<f64>`.
fn short_type_name<T>() -> &'static str {
    let name = core::any::type_name::<T>();
    let head = name.find('<').unwrap_or(name.len());
    let start = name[..head].rfind("::").map_or(0, |i| i + 2);
    &name[start..]
}

fn describe_shape(shape: &[usize]) -> String {
    match shape {
        [] => "0-dimensional".to_owned(),
        [len] => format!("{}-element", len),
        _ => shape
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("×"),
    }
}

/// Writes a right-aligned grid, one row per line, eliding the middle rows
/// and columns as `option` dictates.
fn write_matrix<F>(
    f: &mut fmt::Formatter<'_>,
    (n_rows, n_cols): (usize, usize),
    option: &FormatOption,
    cell: F,
) -> fmt::Result
where
    F: Fn(usize, usize) -> String,
{
    let rows = option.visible(n_rows);
    let cols = option.visible(n_cols);
    let cells = rows
        .iter()
        .map(|row| {
            cols.iter()
                .map(|col| match (*row, *col) {
                    (Some(r), Some(c)) => cell(r, c),
                    (Some(_), None) => "…".to_owned(),
                    (None, Some(_)) => "⋮".to_owned(),
                    (None, None) => "⋱".to_owned(),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let widths = (0..cols.len())
        .map(|j| {
            cells
                .iter()
                .map(|row| row[j].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    for (i, row) in cells.iter().enumerate() {
        if i != 0 {
            f.write_str("\n")?;
        }
        f.write_str(" ")?;
        for (j, (text, &width)) in row.iter().zip(&widths).enumerate() {
            if j != 0 {
                f.write_str("  ")?;
            }
            write!(f, "{:>width$}", text, width = width)?;
        }
    }
    Ok(())
}

impl<T, L, O> fmt::Display for LabeledArray<T, L, O>
where
    L: fmt::Display,
    O: Order,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.shape();
        write!(
            f,
            "{}-dimensional LabeledArray<{}> with index sets:",
            shape.len(),
            short_type_name::<T>()
        )?;
        for (i, axis) in self.axes.iter().enumerate() {
            if f.alternate() {
                write!(f, "\n    Dimension {}, {:#}", i, axis)?;
            } else {
                write!(f, "\n    Dimension {}, {}", i, axis)?;
            }
        }
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "\nAnd data, a {} array:\n", describe_shape(shape))?;

        let option = FormatOption::new(self.len(), f.alternate());
        let precision = f.precision();
        let cell = |indices: &[usize]| {
            self.data
                .get(indices)
                .map(|elem| match precision {
                    Some(p) => format!("{:.*}", p, elem),
                    None => elem.to_string(),
                })
                .unwrap_or_default()
        };

        match *shape {
            [] => f.write_str(&cell(&[])),
            [n] => write_matrix(f, (n, 1), &option, |r, _| cell(&[r])),
            [n_rows, n_cols] => write_matrix(f, (n_rows, n_cols), &option, |r, c| cell(&[r, c])),
            [n_rows, n_cols, ref trailing @ ..] => {
                let strides = ColumnMajor::default_strides(trailing);
                for (i, slice) in option.visible(trailing.array_len()).into_iter().enumerate() {
                    if i != 0 {
                        f.write_str("\n\n")?;
                    }
                    let slice = match slice {
                        Some(s) => s,
                        None => {
                            f.write_str("⋮")?;
                            continue;
                        }
                    };
                    let fixed = ColumnMajor::unravel_index(slice, trailing, &strides);
                    f.write_str("[:, :")?;
                    for (axis, &p) in self.axes[2..].iter().zip(&fixed) {
                        if let Some(label) = axis.get(p) {
                            write!(f, ", {}", label)?;
                        }
                    }
                    f.write_str("] =\n")?;
                    write_matrix(f, (n_rows, n_cols), &option, |r, c| {
                        let mut indices = vec![r, c];
                        indices.extend_from_slice(&fixed);
                        cell(&indices)
                    })?;
                }
                Ok(())
            }
        }
    }
}

impl<T, L, O> fmt::Debug for LabeledArray<T, L, O>
where
    L: fmt::Debug,
    O: Order,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledArray")
            .field("axes", &self.axes)
            .field("data", &self.data)
            .finish()
    }
}

impl<T, L, O> LabeledArray<T, L, O>
where
    L: fmt::Display,
    O: Order,
    T: fmt::Display,
{
    /// Human-readable rendering, identical to the `Display` output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::{labels, Array, Label, LabeledArray, Result};

    #[test]
    fn format_2d() -> Result<()> {
        let data = Array::<_>::from_shape_vec([2, 2], vec![1, 2, 3, 4])?;
        let subject = LabeledArray::<i32>::new(data, vec![labels(["a", "b"]), labels(2..4)])?;
        let expected = "\
2-dimensional LabeledArray<i32> with index sets:
    Dimension 0, [a, b]
    Dimension 1, [2, 3]
And data, a 2×2 array:
 1  2
 3  4";

        assert_eq!(subject.render(), expected);
        assert_eq!(format!("{}", subject), expected);

        Ok(())
    }

    #[test]
    fn format_0d() -> Result<()> {
        let data = Array::<i32>::from_shape_vec(Vec::<usize>::new(), vec![42])?;
        let subject = LabeledArray::<_>::new(data, Vec::new())?;

        assert_eq!(
            subject.render(),
            "0-dimensional LabeledArray<i32> with index sets:\nAnd data, a 0-dimensional array:\n42"
        );

        Ok(())
    }

    #[test]
    fn format_1d() -> Result<()> {
        let data = Array::<i32>::from(vec![1, 10, 100]);
        let subject = LabeledArray::<_>::new(data, vec![labels(["a", "b", "c"])])?;
        let expected = "\
1-dimensional LabeledArray<i32> with index sets:
    Dimension 0, [a, b, c]
And data, a 3-element array:
   1
  10
 100";

        assert_eq!(subject.render(), expected);

        Ok(())
    }

    #[test]
    fn format_3d() -> Result<()> {
        let data = (0..).take(8).collect::<Array<i32>>().into_shape([2, 2, 2])?;
        let subject = LabeledArray::<_>::new(
            data,
            vec![labels(["a", "b"]), labels(1..3), labels(['x', 'y'])],
        )?;
        let expected = "\
3-dimensional LabeledArray<i32> with index sets:
    Dimension 0, [a, b]
    Dimension 1, [1, 2]
    Dimension 2, [x, y]
And data, a 2×2×2 array:
[:, :, x] =
 0  2
 4  6

[:, :, y] =
 1  3
 5  7";

        assert_eq!(subject.render(), expected);

        Ok(())
    }

    #[test]
    fn format_empty() -> Result<()> {
        let subject = LabeledArray::<f64>::from_default(vec![labels(["a"]), Vec::new()])?;

        assert_eq!(
            subject.render(),
            "2-dimensional LabeledArray<f64> with index sets:\n    Dimension 0, [a]\n    Dimension 1, []"
        );

        Ok(())
    }

    #[test]
    fn format_with_precision() -> Result<()> {
        let data = Array::<f64>::from(vec![1.0, 2.5]);
        let subject = LabeledArray::<_>::new(data, vec![labels(["a", "b"])])?;

        assert!(format!("{:.2}", subject).ends_with(" 1.00\n 2.50"));

        Ok(())
    }

    #[test]
    fn format_large() -> Result<()> {
        let data = (0..).take(1600).collect::<Array<i32>>().into_shape([40, 40])?;
        let subject = LabeledArray::<_>::new(data, vec![labels(1..=40), labels(1..=40)])?;
        let rendered = subject.render();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "    Dimension 0, [1, 2, 3, …, 38, 39, 40]");
        assert_eq!(lines[4], "    0     1     2  …    37    38    39");
        assert!(lines[7].contains('⋱'));

        let full = format!("{:#}", subject);

        assert_eq!(full.lines().count(), 44);
        assert!(!full.contains('…'));

        Ok(())
    }

    #[test]
    fn format_debug() -> Result<()> {
        let data = Array::<i32>::from(vec![1, 2]);
        let subject = LabeledArray::<_, Label>::new(data, vec![labels(["a", "b"])])?;

        assert_eq!(
            format!("{:?}", subject),
            "LabeledArray { axes: [Axis([\"a\", \"b\"])], \
             data: [1, 2], shape=[2], strides=[1], order=\"row major\" }"
        );

        Ok(())
    }
}
