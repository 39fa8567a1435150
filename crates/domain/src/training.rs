use std::str::FromStr;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{InfoMessage, PackageError};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Length of a single step in meters.
pub const LEN_STEP: f64 = 0.65;

/// Distance covered by a single stroke in meters.
pub const LEN_STROKE: f64 = 1.38;

const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 20.0;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIMMING_SPEED_SHIFT: f64 = 1.1;
const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Number of raw values a package of this kind carries.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = PackageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| PackageError::UnknownWorkout(code.to_string()))
    }
}

/// Sensor readings shared by all kinds of workouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    /// Number of steps or strokes.
    pub action: u32,
    /// Duration in hours.
    pub duration: f64,
    /// Body weight in kilograms.
    pub weight: f64,
}

pub trait Training {
    fn kind(&self) -> WorkoutKind;
    fn workout(&self) -> &Workout;
    fn spent_calories(&self) -> f64;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        f64::from(self.workout().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in kilometers per hour.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.workout().duration
    }

    fn training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().to_string(),
            duration: self.workout().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub workout: Workout,
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        (RUNNING_SPEED_MULTIPLIER * self.mean_speed() - RUNNING_SPEED_SHIFT) * self.workout.weight
            / M_IN_KM
            * (self.workout.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub workout: Workout,
    /// Body height in centimeters.
    pub height: f64,
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        // the squared speed is floor divided by the height
        (WALKING_WEIGHT_MULTIPLIER * self.workout.weight
            + (self.mean_speed().powi(2) / self.height).floor()
                * WALKING_SPEED_HEIGHT_MULTIPLIER
                * self.workout.weight)
            * (self.workout.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub workout: Workout,
    /// Length of the pool in meters.
    pub length_pool: f64,
    /// Number of pool lengths swum.
    pub count_pool: u32,
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.workout.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIMMING_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * self.workout.weight
    }
}
