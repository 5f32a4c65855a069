pub mod equirectangular;
pub mod haversine;

/// vertex position in DIMACS microdegrees (degrees x 10^6),
/// x = longitude and y = latitude. kept integral everywhere except
/// inside a distance estimate.
pub type MicroCoord = geo::Coord<i32>;

/// degrees per microdegree.
pub const DEGREES_PER_MICRODEGREE: f64 = 1e-6;
