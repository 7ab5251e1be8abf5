//! Parameters of a generation run.
//!
//! Every field has a default, so a parameter file only needs to name what it
//! changes:
//!
//! ```yaml
//! body_count: 4096
//! output_path: data/input.txt
//! seed: 42
//! radial_profile: uniform-area
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

use super::units::{
    Float, CENTRAL_MASS, DEFAULT_BODY_COUNT, DEFAULT_OUTPUT_PATH, MAX_DISC_HEIGHT, MAX_DISC_MASS,
    MAX_DISC_RADIUS, MAX_DISC_SPEED, MIN_DISC_MASS, MIN_DISC_RADIUS,
};

const MAX_SPAN: Float = Float::MAX / 2.;

/// How the distance of a disc body from the vertical axis is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RadialProfile {
    /// Radius uniform in `[min_radius, max_radius]`. Bodies crowd towards the outer edge.
    #[default]
    Linear,
    /// Radius drawn so that bodies are uniformly dense per unit area of the annulus.
    UniformArea,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialParameters {
    /// Total number of bodies, central body included.
    pub body_count: u32,
    pub output_path: PathBuf,
    /// Without a seed the generator picks one and logs it.
    pub seed: Option<u64>,
    pub radial_profile: RadialProfile,
    pub min_mass: Float,
    pub max_mass: Float,
    pub min_radius: Float,
    pub max_radius: Float,
    pub max_height: Float,
    pub max_speed: Float,
    pub central_mass: Float,
}

impl Default for InitialParameters {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            radial_profile: RadialProfile::Linear,
            min_mass: MIN_DISC_MASS,
            max_mass: MAX_DISC_MASS,
            min_radius: MIN_DISC_RADIUS,
            max_radius: MAX_DISC_RADIUS,
            max_height: MAX_DISC_HEIGHT,
            max_speed: MAX_DISC_SPEED,
            central_mass: CENTRAL_MASS,
        }
    }
}

impl InitialParameters {
    pub fn from_yaml_file(path: &Path) -> Result<InitialParameters> {
        let reader = BufReader::new(File::open(path)?);
        let params: InitialParameters = serde_yaml::from_reader(reader)?;
        Ok(params)
    }

    /// Number of bodies sampled from the disc, i.e. all but the central one.
    pub fn disc_body_count(&self) -> u32 {
        self.body_count.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.body_count < 1 {
            return Err(Error::InvalidParameters(format!(
                "body count must be at least 1 to hold the central body, got {}",
                self.body_count
            )));
        }
        let values = [
            ("min_mass", self.min_mass),
            ("max_mass", self.max_mass),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("max_height", self.max_height),
            ("max_speed", self.max_speed),
            ("central_mass", self.central_mass),
        ];
        for (name, value) in values.iter() {
            if !value.is_finite() {
                return Err(Error::InvalidParameters(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Self::check_range("mass", self.min_mass, self.max_mass)?;
        Self::check_range("radius", self.min_radius, self.max_radius)?;
        if self.max_height < 0. {
            return Err(Error::InvalidParameters(format!(
                "max_height must not be negative, got {}",
                self.max_height
            )));
        }
        if self.max_speed < 0. {
            return Err(Error::InvalidParameters(format!(
                "max_speed must not be negative, got {}",
                self.max_speed
            )));
        }
        let radius_span = match self.radial_profile {
            RadialProfile::Linear => (self.min_radius, self.max_radius),
            RadialProfile::UniformArea => (
                self.min_radius * self.min_radius,
                self.max_radius * self.max_radius,
            ),
        };
        Self::check_span("mass", self.min_mass, self.max_mass)?;
        Self::check_span("radius", radius_span.0, radius_span.1)?;
        Self::check_span("height", -self.max_height, self.max_height)?;
        Self::check_span("speed", -self.max_speed, self.max_speed)?;
        if self.central_mass <= 0. {
            return Err(Error::InvalidParameters(format!(
                "central_mass must be positive, got {}",
                self.central_mass
            )));
        }
        Ok(())
    }

    // Uniform sampling needs the width of the interval as a finite number.
    fn check_span(name: &str, min: Float, max: Float) -> Result<()> {
        let span = max - min;
        if !(span <= MAX_SPAN) {
            return Err(Error::InvalidParameters(format!(
                "{} range [{}, {}] is too wide to sample",
                name, min, max
            )));
        }
        Ok(())
    }

    fn check_range(name: &str, min: Float, max: Float) -> Result<()> {
        if min <= 0. {
            return Err(Error::InvalidParameters(format!(
                "minimum {} must be positive, got {}",
                name, min
            )));
        }
        if min > max {
            return Err(Error::InvalidParameters(format!(
                "minimum {} {} exceeds maximum {}",
                name, min, max
            )));
        }
        Ok(())
    }
}
