use super::{MicroCoord, DEGREES_PER_MICRODEGREE};

pub const APPROX_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// great-circle distance in meters between two microdegree WGS84
/// coordinates.
///
/// the search loop never calls this; it is the reference distance the
/// flat-projection estimate is validated against, and what the app logs
/// as the crow-flight length of a query.
pub fn haversine_distance_meters(src: MicroCoord, dst: MicroCoord) -> Result<f64, String> {
    let (src_lon, src_lat) = to_degrees(src)?;
    let (dst_lon, dst_lat) = to_degrees(dst)?;

    let lat1 = src_lat.to_radians();
    let lat2 = dst_lat.to_radians();
    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (dst_lon - src_lon).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + half_dlon.sin().powi(2) * lat1.cos() * lat2.cos();
    Ok(2.0 * APPROX_EARTH_RADIUS_M * a.sqrt().asin())
}

/// widens a microdegree coordinate to (lon, lat) degrees, rejecting
/// positions outside the lon/lat domain
fn to_degrees(coord: MicroCoord) -> Result<(f64, f64), String> {
    let lon = f64::from(coord.x) * DEGREES_PER_MICRODEGREE;
    let lat = f64::from(coord.y) * DEGREES_PER_MICRODEGREE;
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(format!(
            "coordinate ({}, {}) outside the lon/lat domain [-180, 180] x [-90, 90]",
            lon, lat
        ));
    }
    Ok((lon, lat))
}
