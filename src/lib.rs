//! Initial conditions for N-body simulations: a disc of light bodies around
//! one heavy central body, written as a plain text file.

pub mod error;
pub mod sim;

pub use error::{Error, Result};
pub use sim::body::{Body, DiscDistribution};
pub use sim::initial_parameters::{InitialParameters, RadialProfile};
pub use sim::system::{BodySet, Inspection};
