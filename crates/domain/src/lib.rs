#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod info;
mod package;
mod training;

pub use error::*;
pub use info::*;
pub use package::*;
pub use training::*;
