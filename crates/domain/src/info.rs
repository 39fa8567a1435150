use derive_more::Display;

/// Summary of a completed workout.
#[derive(Debug, Display, Clone, PartialEq)]
#[display(
    "Training type: {training_type}; Duration: {duration:.3} h.; Distance: {distance:.3} km; Avg speed: {speed:.3} km/h; Calories burned: {calories:.3}."
)]
pub struct InfoMessage {
    pub training_type: String,
    /// Duration in hours.
    pub duration: f64,
    /// Distance in kilometers.
    pub distance: f64,
    /// Mean speed in kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
