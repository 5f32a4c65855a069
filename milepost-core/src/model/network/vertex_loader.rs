use super::{MicroCoord, NetworkError};
use crate::util::fs::read_utils;
use crate::util::progress::ScanProgress;
use crate::util::scan;
use geo::coord;
use std::path::Path;

/// reads a DIMACS `.co` coordinate file into the side-table of a graph
/// with `n` vertices.
///
/// `c` lines are comments. an optional auxiliary problem line announces
/// the vertex count; its trailing integer is validated against `n`
/// (the token run between `aux` and the count varies across dataset
/// generations, so everything up to the final integer is skipped).
/// `v <id> <lon> <lat>` lines carry 1-based ids and microdegree
/// coordinates, longitude first. every vertex must receive a coordinate.
pub(crate) fn read_coords(path: &Path, n: usize) -> Result<Vec<MicroCoord>, NetworkError> {
    let label = path.display().to_string();
    let buf = read_utils::read_to_buffer(path).map_err(|source| NetworkError::IoOpenFailed {
        path: label.clone(),
        source,
    })?;
    let end = buf.len();
    let mut pos = 0usize;

    let mut coords: Vec<MicroCoord> = vec![coord! { x: 0, y: 0 }; n];
    let mut observed = 0usize;

    let mut progress = ScanProgress::start(format!("coordinates: {}", label), end);

    while pos < end {
        scan::skip_spaces(&buf, &mut pos, end);
        if pos >= end {
            break;
        }
        match buf[pos] {
            b'\n' | b'\r' => pos += 1,
            b'c' => scan::skip_line(&buf, &mut pos, end),
            b'p' => {
                let declared = read_aux_line(&buf, &mut pos, end, &label)?;
                if declared != n {
                    return Err(NetworkError::CountMismatch {
                        path: label,
                        kind: "vertices",
                        declared,
                        observed: n,
                    });
                }
            }
            b'v' => {
                pos += 1;
                scan::skip_spaces(&buf, &mut pos, end);
                let id = scan::parse_unsigned(&buf, &mut pos, end);
                if id == 0 || id as usize > n {
                    return Err(NetworkError::VertexOutOfRange { path: label, id, n });
                }
                scan::skip_spaces(&buf, &mut pos, end);
                let lon = scan::parse_signed(&buf, &mut pos, end);
                scan::skip_spaces(&buf, &mut pos, end);
                let lat = scan::parse_signed(&buf, &mut pos, end);
                scan::skip_line(&buf, &mut pos, end);
                let (x, y) = match (i32::try_from(lon), i32::try_from(lat)) {
                    (Ok(x), Ok(y)) => (x, y),
                    _ => return Err(NetworkError::CoordinateOverflow { path: label, id }),
                };
                coords[(id - 1) as usize] = coord! { x: x, y: y };
                observed += 1;
            }
            _ => scan::skip_line(&buf, &mut pos, end),
        }
        progress.tick(pos);
    }
    progress.finish(end);

    if observed != n {
        return Err(NetworkError::CountMismatch {
            path: label,
            kind: "coordinates",
            declared: n,
            observed,
        });
    }
    Ok(coords)
}

/// parses the auxiliary problem line of a `.co` file with the cursor on
/// the `p`, returning the declared vertex count (its final integer).
fn read_aux_line(
    buf: &[u8],
    pos: &mut usize,
    end: usize,
    label: &str,
) -> Result<usize, NetworkError> {
    *pos += 1;
    scan::skip_spaces(buf, pos, end);
    let kind = scan::token(buf, pos, end);
    if kind != b"aux" {
        return Err(NetworkError::HeaderMalformed {
            path: label.to_string(),
            detail: format!(
                "expected problem kind 'aux', found '{}'",
                String::from_utf8_lossy(kind)
            ),
        });
    }
    let mut count: Option<u64> = None;
    loop {
        scan::skip_spaces(buf, pos, end);
        if *pos >= end || buf[*pos] == b'\n' || buf[*pos] == b'\r' {
            break;
        }
        if buf[*pos].is_ascii_digit() {
            count = Some(scan::parse_unsigned(buf, pos, end));
        } else {
            scan::skip_non_spaces(buf, pos, end);
        }
    }
    scan::skip_line(buf, pos, end);
    match count {
        Some(c) => Ok(c as usize),
        None => Err(NetworkError::HeaderMalformed {
            path: label.to_string(),
            detail: String::from("auxiliary problem line carries no vertex count"),
        }),
    }
}
