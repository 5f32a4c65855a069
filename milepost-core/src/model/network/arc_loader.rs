use super::NetworkError;
use crate::util::fs::read_utils;
use crate::util::progress::ScanProgress;
use crate::util::scan;
use std::path::Path;

/// CSR arrays produced by the arc pass, before the coordinate table
/// joins them in a [`super::Graph`].
#[derive(Debug)]
pub(crate) struct ArcTable {
    pub row_ptr: Vec<u32>,
    pub col_idx: Vec<u32>,
    pub weights: Vec<u32>,
}

/// reads a DIMACS `.gr` arc file into CSR form.
///
/// lines are classified by their first non-blank byte: `c` comments,
/// exactly one `p sp <n> <m>` problem line, `a u v w` directed arcs,
/// and `e u v` undirected edges stored as one directed arc of weight 1.
/// ids are 1-based in the text and 0-based in the produced arrays.
///
/// the build is two passes over the arc set: the line scan appends
/// `(u, v, w)` triples to an intermediate buffer while counting degrees,
/// then a prefix sum over the degrees and a cursor scatter lay the arcs
/// out contiguously per source, preserving input order within each
/// source. the intermediate buffer is dropped before returning, so peak
/// memory stays O(n + m).
pub(crate) fn read_arcs(path: &Path) -> Result<ArcTable, NetworkError> {
    let label = path.display().to_string();
    let buf = read_utils::read_to_buffer(path).map_err(|source| NetworkError::IoOpenFailed {
        path: label.clone(),
        source,
    })?;
    let end = buf.len();
    let mut pos = 0usize;

    let mut header: Option<(usize, usize)> = None;
    let mut degree: Vec<u32> = Vec::new();
    let mut arcs: Vec<(u32, u32, u32)> = Vec::new();

    let mut progress = ScanProgress::start(format!("arcs: {}", label), end);

    while pos < end {
        scan::skip_spaces(&buf, &mut pos, end);
        if pos >= end {
            break;
        }
        match buf[pos] {
            b'\n' | b'\r' => pos += 1,
            b'c' => scan::skip_line(&buf, &mut pos, end),
            b'p' => {
                if header.is_some() {
                    return Err(NetworkError::HeaderMalformed {
                        path: label,
                        detail: String::from("second problem line"),
                    });
                }
                let (n, m) = read_problem_line(&buf, &mut pos, end, &label)?;
                log::debug!("problem header in {}: n={} m={}", label, n, m);
                degree = vec![0u32; n];
                arcs.reserve(m);
                header = Some((n, m));
            }
            b'a' => {
                let n = expect_header(header, &label)?;
                pos += 1;
                let (u, v) = read_endpoints(&buf, &mut pos, end, n, &label)?;
                scan::skip_spaces(&buf, &mut pos, end);
                let w = scan::parse_unsigned(&buf, &mut pos, end);
                let w = u32::try_from(w).map_err(|_| NetworkError::WeightOverflow {
                    path: label.clone(),
                    weight: w,
                })?;
                scan::skip_line(&buf, &mut pos, end);
                degree[u as usize] += 1;
                arcs.push((u, v, w));
            }
            b'e' => {
                // undirected edge with implicit unit weight; absent from
                // the road datasets but part of the format family
                let n = expect_header(header, &label)?;
                pos += 1;
                let (u, v) = read_endpoints(&buf, &mut pos, end, n, &label)?;
                scan::skip_line(&buf, &mut pos, end);
                degree[u as usize] += 1;
                arcs.push((u, v, 1));
            }
            _ => scan::skip_line(&buf, &mut pos, end),
        }
        progress.tick(pos);
    }
    progress.finish(end);

    let (n, m) = header.ok_or(NetworkError::HeaderMissing(label.clone()))?;
    if arcs.len() != m {
        return Err(NetworkError::CountMismatch {
            path: label,
            kind: "arcs",
            declared: m,
            observed: arcs.len(),
        });
    }

    let mut row_ptr = vec![0u32; n + 1];
    for i in 0..n {
        row_ptr[i + 1] = row_ptr[i] + degree[i];
    }
    let mut cur = row_ptr.clone();
    let mut col_idx = vec![0u32; m];
    let mut weights = vec![0u32; m];
    for &(u, v, w) in &arcs {
        let slot = cur[u as usize] as usize;
        col_idx[slot] = v;
        weights[slot] = w;
        cur[u as usize] += 1;
    }

    Ok(ArcTable {
        row_ptr,
        col_idx,
        weights,
    })
}

/// parses `p sp <n> <m>` with the cursor on the `p`, leaving it past the
/// end of the line.
fn read_problem_line(
    buf: &[u8],
    pos: &mut usize,
    end: usize,
    label: &str,
) -> Result<(usize, usize), NetworkError> {
    *pos += 1;
    scan::skip_spaces(buf, pos, end);
    let kind = scan::token(buf, pos, end);
    if kind != b"sp" {
        return Err(NetworkError::HeaderMalformed {
            path: label.to_string(),
            detail: format!(
                "expected problem kind 'sp', found '{}'",
                String::from_utf8_lossy(kind)
            ),
        });
    }
    let n = read_header_count(buf, pos, end, label)?;
    let m = read_header_count(buf, pos, end, label)?;
    // n+1 offsets and m arc slots must be indexable through u32
    if n >= u32::MAX as usize || m > u32::MAX as usize {
        return Err(NetworkError::HeaderMalformed {
            path: label.to_string(),
            detail: format!("counts n={} m={} exceed the 32-bit id space", n, m),
        });
    }
    scan::skip_line(buf, pos, end);
    Ok((n, m))
}

fn read_header_count(
    buf: &[u8],
    pos: &mut usize,
    end: usize,
    label: &str,
) -> Result<usize, NetworkError> {
    scan::skip_spaces(buf, pos, end);
    if *pos >= end || !buf[*pos].is_ascii_digit() {
        return Err(NetworkError::HeaderMalformed {
            path: label.to_string(),
            detail: String::from("problem line does not carry two counts"),
        });
    }
    Ok(scan::parse_unsigned(buf, pos, end) as usize)
}

fn expect_header(header: Option<(usize, usize)>, label: &str) -> Result<usize, NetworkError> {
    match header {
        Some((n, _)) => Ok(n),
        None => Err(NetworkError::HeaderMissing(label.to_string())),
    }
}

/// reads the two 1-based endpoint ids of an arc line, returning them
/// 0-based after range-checking against the declared vertex count.
fn read_endpoints(
    buf: &[u8],
    pos: &mut usize,
    end: usize,
    n: usize,
    label: &str,
) -> Result<(u32, u32), NetworkError> {
    scan::skip_spaces(buf, pos, end);
    let u = scan::parse_unsigned(buf, pos, end);
    scan::skip_spaces(buf, pos, end);
    let v = scan::parse_unsigned(buf, pos, end);
    for id in [u, v] {
        if id == 0 || id as usize > n {
            return Err(NetworkError::VertexOutOfRange {
                path: label.to_string(),
                id,
                n,
            });
        }
    }
    Ok(((u - 1) as u32, (v - 1) as u32))
}
