use log::debug;
use serde::{Deserialize, Serialize};

use crate::{PackageError, Running, SportsWalking, Swimming, Training, Workout, WorkoutKind};

/// Raw sensor data of a single workout.
///
/// The values are positional and depend on the kind of workout:
///
/// | Code  | Values                                           |
/// |-------|--------------------------------------------------|
/// | `SWM` | action, duration, weight, length_pool, count_pool |
/// | `RUN` | action, duration, weight                         |
/// | `WLK` | action, duration, weight, height                 |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn read(&self) -> Result<Box<dyn Training>, PackageError> {
        read_package(&self.code, &self.data)
    }
}

pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let kind = code.parse::<WorkoutKind>()?;

    debug!("reading {kind} package with {} values", data.len());

    if data.len() != kind.arity() {
        return Err(PackageError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let workout = Workout {
        action: count("action", data[0])?,
        duration: data[1],
        weight: data[2],
    };

    Ok(match kind {
        WorkoutKind::Running => Box::new(Running { workout }),
        WorkoutKind::SportsWalking => Box::new(SportsWalking {
            workout,
            height: data[3],
        }),
        WorkoutKind::Swimming => Box::new(Swimming {
            workout,
            length_pool: data[3],
            count_pool: count("count_pool", data[4])?,
        }),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> Result<u32, PackageError> {
    if !(0.0..=f64::from(u32::MAX)).contains(&value) || value.fract().abs() > 0.0 {
        return Err(PackageError::NotACount { field, value });
    }

    Ok(value as u32)
}
