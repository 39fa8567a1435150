use crate::WorkoutKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("unrecognized workout kind: {0:?}")]
    UnknownWorkout(String),
    #[error("{kind} package needs {expected} values ({actual} given)")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must be a whole number of at least 0 ({value} given)")]
    NotACount { field: &'static str, value: f64 },
}
