use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::sim::initial_parameters::{InitialParameters, RadialProfile};
use crate::sim::units::{Float, DIMENSIONALITY, RADIUS_TOLERANCE, TAU};

// mass, position, velocity
pub const RECORD_LENGTH: usize = 1 + 2 * DIMENSIONALITY;

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub mass: Float,
    pub position: [Float; DIMENSIONALITY],
    pub velocity: [Float; DIMENSIONALITY],
}

impl Body {
    pub fn new(
        mass: Float,
        position: [Float; DIMENSIONALITY],
        velocity: [Float; DIMENSIONALITY],
    ) -> Body {
        Body {
            mass,
            position,
            velocity,
        }
    }

    pub fn central(mass: Float) -> Body {
        Body::new(mass, [0.; DIMENSIONALITY], [0.; DIMENSIONALITY])
    }

    pub fn is_central(&self, central_mass: Float) -> bool {
        self.mass == central_mass
            && self.position.iter().all(|x| *x == 0.)
            && self.velocity.iter().all(|v| *v == 0.)
    }

    // Distance from the y axis
    pub fn radial_distance(&self) -> Float {
        let [x, _, z] = self.position;
        (x * x + z * z).sqrt()
    }

    pub fn from_values(values: [Float; RECORD_LENGTH]) -> Body {
        let [mass, x, y, z, vx, vy, vz] = values;
        Body::new(mass, [x, y, z], [vx, vy, vz])
    }

    pub fn values(&self) -> [Float; RECORD_LENGTH] {
        let [x, y, z] = self.position;
        let [vx, vy, vz] = self.velocity;
        [self.mass, x, y, z, vx, vy, vz]
    }

    /// Empty if the body lies in the disc described by `params`.
    pub fn disc_violations(&self, params: &InitialParameters) -> Vec<String> {
        let mut violations = vec![];
        let [_, y, _] = self.position;
        let [vx, vy, vz] = self.velocity;
        let radius = self.radial_distance();

        if !(params.min_mass..=params.max_mass).contains(&self.mass) {
            violations.push(format!("mass {} outside of disc mass range", self.mass));
        }
        let radius_lower = params.min_radius * (1. - RADIUS_TOLERANCE);
        let radius_upper = params.max_radius * (1. + RADIUS_TOLERANCE);
        if !(radius_lower..=radius_upper).contains(&radius) {
            violations.push(format!("radial distance {} outside of disc", radius));
        }
        if y.is_nan() || y.abs() > params.max_height {
            violations.push(format!("height {} outside of disc", y));
        }
        for (name, v) in [("vx", vx), ("vz", vz)].iter() {
            if v.is_nan() || v.abs() > params.max_speed {
                violations.push(format!("{} {} exceeds maximum speed", name, v));
            }
        }
        if vy != 0. {
            violations.push(format!("vy {} is not zero", vy));
        }
        violations
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: Float) -> fmt::Result {
    if value == 0. {
        write!(f, "0")
    } else {
        write!(f, "{:e}", value)
    }
}

/// One record of the output file: `mass x y z vx vy vz`.
impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write_value(f, *value)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct DiscDistribution {
    mass: Uniform<Float>,
    radius: Uniform<Float>,
    radial_profile: RadialProfile,
    min_radius: Float,
    max_radius: Float,
    angle: Uniform<Float>,
    height: Uniform<Float>,
    speed: Uniform<Float>,
}

impl DiscDistribution {
    /// `params` must have passed [`InitialParameters::validate`].
    pub fn new(params: &InitialParameters) -> DiscDistribution {
        let radius = match params.radial_profile {
            RadialProfile::Linear => Uniform::new_inclusive(params.min_radius, params.max_radius),
            RadialProfile::UniformArea => Uniform::new_inclusive(
                params.min_radius * params.min_radius,
                params.max_radius * params.max_radius,
            ),
        };
        DiscDistribution {
            mass: Uniform::new_inclusive(params.min_mass, params.max_mass),
            radius,
            radial_profile: params.radial_profile,
            min_radius: params.min_radius,
            max_radius: params.max_radius,
            angle: Uniform::new(0., TAU),
            height: Uniform::new_inclusive(-params.max_height, params.max_height),
            speed: Uniform::new_inclusive(-params.max_speed, params.max_speed),
        }
    }

    fn sample_radius<R: Rng + ?Sized>(&self, rng: &mut R) -> Float {
        let drawn = self.radius.sample(rng);
        match self.radial_profile {
            RadialProfile::Linear => drawn,
            RadialProfile::UniformArea => drawn.sqrt().clamp(self.min_radius, self.max_radius),
        }
    }
}

impl Distribution<Body> for DiscDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Body {
        let mass = self.mass.sample(rng);
        let radius = self.sample_radius(rng);
        let angle = self.angle.sample(rng);
        let height = self.height.sample(rng);
        let vx = self.speed.sample(rng);
        let vz = self.speed.sample(rng);
        Body::new(
            mass,
            [radius * angle.sin(), height, radius * angle.cos()],
            [vx, 0., vz],
        )
    }
}
