pub type Float = f64;
pub const DIMENSIONALITY: usize = 3;
pub const TAU: Float = std::f64::consts::TAU;

//Disc bodies, in SI units as the downstream simulator expects them:
pub const MIN_DISC_MASS: Float = 1e10;
pub const MAX_DISC_MASS: Float = 1e15;
pub const MIN_DISC_RADIUS: Float = 1e10;
pub const MAX_DISC_RADIUS: Float = 1e11;
// Out-of-plane scatter, symmetric around y = 0
pub const MAX_DISC_HEIGHT: Float = 1e10;
// Applies to vx and vz only, vy is always zero
pub const MAX_DISC_SPEED: Float = 1e2;
// x = r sin(phi) and z = r cos(phi) are rounded, so sqrt(x^2 + z^2) may leave
// [MIN_DISC_RADIUS, MAX_DISC_RADIUS] by a few ulp. Relative slack allowed when
// checking the radius of a written body.
pub const RADIUS_TOLERANCE: Float = 1e-9;

//Central body, at rest in the origin:
pub const CENTRAL_MASS: Float = 1e24;

pub const DEFAULT_BODY_COUNT: u32 = 512;
pub const DEFAULT_OUTPUT_PATH: &str = "data/input.txt";
