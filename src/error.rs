use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("duplicate label {label} in axis {axis}")]
    DuplicateLabel { axis: usize, label: String },
    #[error("label {label} not found in axis {axis}")]
    KeyNotFound { axis: usize, label: String },
    #[error("expected {expected} labels, got {got}")]
    RankMismatch { expected: usize, got: usize },
    #[error("{0}")]
    Bounds(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ShapeError {
    #[error("{0}")]
    IncompatibleDimension(String),
    #[error("{0}")]
    IncompatibleShape(String),
}

#[cfg(test)]
mod tests {
    use super::{Error, ShapeError};

    #[test]
    fn convert_from_shape_error() {
        let e = Error::from(ShapeError::IncompatibleShape("bad shape".into()));

        assert!(matches!(e, Error::Shape(ShapeError::IncompatibleShape(_))));
        assert_eq!(e.to_string(), "bad shape");
    }

    #[test]
    fn format_label_errors() {
        let e = Error::KeyNotFound {
            axis: 1,
            label: "\"c\"".into(),
        };

        assert_eq!(e.to_string(), "label \"c\" not found in axis 1");
    }
}
