use super::{MicroCoord, DEGREES_PER_MICRODEGREE};

/// meters spanned by one microdegree of latitude (2 pi R / 360 / 1e6 with
/// R = 6,371 km). one microdegree of longitude spans this times the cosine
/// of the latitude.
pub const METERS_PER_MICRODEGREE: f64 = 0.111_194_93;

/// cosine of a microdegree latitude, the per-query constant that scales
/// longitude deltas onto the local parallel.
pub fn cos_latitude(lat_micro: i32) -> f64 {
    (f64::from(lat_micro) * DEGREES_PER_MICRODEGREE)
        .to_radians()
        .cos()
}

/// flat-projection (equirectangular) distance between two microdegree
/// coordinates, in microdegrees. `cos_lat_ref` is the precomputed cosine
/// of the reference latitude, normally the fixed endpoint of the two.
/// deltas are widened to 64 bits before squaring so antipodal longitudes
/// cannot overflow.
pub fn microdegree_distance(a: MicroCoord, b: MicroCoord, cos_lat_ref: f64) -> f64 {
    let dlat = (i64::from(a.y) - i64::from(b.y)) as f64;
    let dlon = (i64::from(a.x) - i64::from(b.x)) as f64 * cos_lat_ref;
    (dlat * dlat + dlon * dlon).sqrt()
}
