use super::{arc_loader, vertex_loader, Graph, GraphConfig, NetworkError};
use crate::util::fs::fs_utils;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

impl TryFrom<&GraphConfig> for Graph {
    type Error = NetworkError;

    /// loads a road network from the pair of DIMACS files named by the
    /// config basename: the `.gr` arc pass builds the CSR arrays, the
    /// `.co` pass fills the coordinate side-table, and the validated
    /// graph is assembled from both.
    fn try_from(config: &GraphConfig) -> Result<Self, Self::Error> {
        let gr_path = resolve(config.gr_path())?;
        let start = Instant::now();
        let arcs = arc_loader::read_arcs(&gr_path)?;
        let n = arcs.row_ptr.len() - 1;
        log::info!(
            "parsed {} in {} ms ({} vertices, {} arcs)",
            gr_path.display(),
            start.elapsed().as_millis(),
            n,
            arcs.col_idx.len()
        );

        let co_path = resolve(config.co_path())?;
        let start = Instant::now();
        let coords = vertex_loader::read_coords(&co_path, n)?;
        log::info!(
            "parsed {} in {} ms",
            co_path.display(),
            start.elapsed().as_millis()
        );

        Graph::new(arcs.row_ptr, arcs.col_idx, arcs.weights, coords)
    }
}

/// maps a configured input path onto the file actually present,
/// accepting a gzip-compressed sibling.
fn resolve(path: PathBuf) -> Result<PathBuf, NetworkError> {
    fs_utils::find_with_gz(&path).ok_or_else(|| NetworkError::IoOpenFailed {
        path: path.display().to_string(),
        source: std::io::Error::new(ErrorKind::NotFound, "no such file, nor a .gz sibling"),
    })
}

/// convenience entry point mirroring `Graph::try_from` for callers
/// holding only a basename.
pub fn graph_from_basename<P: AsRef<Path>>(basename: P) -> Result<Graph, NetworkError> {
    let config = GraphConfig::new(basename.as_ref().display().to_string());
    Graph::try_from(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::VertexId;
    use flate2::{write::GzEncoder, Compression};
    use geo::coord;
    use std::io::Write;

    fn write_dataset(dir: &tempfile::TempDir, gr: &str, co: &str) -> String {
        let base = dir.path().join("net");
        std::fs::write(base.with_extension("gr"), gr).unwrap();
        std::fs::write(base.with_extension("co"), co).unwrap();
        base.display().to_string()
    }

    #[test]
    fn test_load_small_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let base = write_dataset(
            &dir,
            "c tiny network\np sp 3 3\na 1 2 4\na 2 3 4\na 1 3 10\n",
            "p aux sp co 3\nv 1 100 200\nv 2 110 210\nv 3 120 220\n",
        );
        let graph = graph_from_basename(&base).unwrap();
        assert_eq!(graph.n(), 3);
        assert_eq!(graph.m(), 3);
        assert_eq!(graph.coord(VertexId(1)), coord! { x: 110, y: 210 });
        assert_eq!(graph.arc_weight(VertexId(0), VertexId(2)), Some(10));
    }

    #[test]
    fn test_gzip_inputs_load_identically() {
        let dir = tempfile::tempdir().unwrap();
        let gr = "p sp 2 1\na 1 2 7\n";
        let co = "v 1 1 2\nv 2 3 4\n";
        let plain_base = write_dataset(&dir, gr, co);

        let gz_base = dir.path().join("packed");
        for (suffix, content) in [("gr.gz", gr), ("co.gz", co)] {
            let f = std::fs::File::create(gz_base.with_extension(suffix)).unwrap();
            let mut enc = GzEncoder::new(f, Compression::default());
            enc.write_all(content.as_bytes()).unwrap();
            enc.finish().unwrap();
        }

        let plain = graph_from_basename(&plain_base).unwrap();
        let packed = graph_from_basename(gz_base.display().to_string()).unwrap();
        assert_eq!(plain.n(), packed.n());
        assert_eq!(plain.arc_targets(), packed.arc_targets());
        assert_eq!(plain.arc_weights(), packed.arc_weights());
        assert_eq!(plain.coord(VertexId(0)), packed.coord(VertexId(0)));
    }

    #[test]
    fn test_round_trip_through_dimacs_text() {
        // hand-built graph -> DIMACS text -> parser -> identical arrays
        let original = Graph::new(
            vec![0, 2, 3, 3],
            vec![1, 2, 2],
            vec![5, 9, 5],
            vec![
                coord! { x: -73_000_000, y: 41_000_000 },
                coord! { x: -73_100_000, y: 41_100_000 },
                coord! { x: -73_200_000, y: 41_200_000 },
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("round");
        let mut gr = std::fs::File::create(base.with_extension("gr")).unwrap();
        original.write_dimacs_gr(&mut gr).unwrap();
        let mut co = std::fs::File::create(base.with_extension("co")).unwrap();
        original.write_dimacs_co(&mut co).unwrap();

        let parsed = graph_from_basename(base.display().to_string()).unwrap();
        assert_eq!(parsed.n(), original.n());
        assert_eq!(parsed.m(), original.m());
        assert_eq!(parsed.arc_targets(), original.arc_targets());
        assert_eq!(parsed.arc_weights(), original.arc_weights());
        for u in 0..original.n() {
            let u = VertexId(u as u32);
            assert_eq!(parsed.neighbours(u), original.neighbours(u));
            assert_eq!(parsed.coord(u), original.coord(u));
        }
    }

    #[test]
    fn test_generated_text_parses_to_the_same_arcs() {
        // pseudo-random but deterministic arc soup: every arc written
        // must come back exactly once, with input order kept per source
        let n: u64 = 500;
        let m: u64 = 4_000;
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move |modulus: u64| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % modulus
        };

        let mut arcs: Vec<(u64, u64, u64)> = Vec::with_capacity(m as usize);
        let mut gr = format!("c generated\np sp {} {}\n", n, m);
        for _ in 0..m {
            let arc = (next(n) + 1, next(n) + 1, next(10_000));
            gr.push_str(&format!("a {} {} {}\n", arc.0, arc.1, arc.2));
            arcs.push(arc);
        }
        let mut co = String::new();
        for id in 1..=n {
            co.push_str(&format!("v {} {} {}\n", id, next(360_000_000), next(180_000_000)));
        }

        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("soup");
        std::fs::write(base.with_extension("gr"), gr).unwrap();
        std::fs::write(base.with_extension("co"), co).unwrap();
        let graph = graph_from_basename(base.display().to_string()).unwrap();

        assert_eq!(graph.n(), n as usize);
        assert_eq!(graph.m(), m as usize);
        let mut expected: Vec<Vec<(u64, u64)>> = vec![vec![]; n as usize];
        for (u, v, w) in arcs {
            expected[(u - 1) as usize].push((v - 1, w));
        }
        for u in 0..n as usize {
            let stored: Vec<(u64, u64)> = graph
                .out_arcs(VertexId(u as u32))
                .map(|(v, w)| (u64::from(v.0), u64::from(w)))
                .collect();
            assert_eq!(stored, expected[u], "arc list diverged at vertex {}", u);
        }
    }

    #[test]
    fn test_missing_gr_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = graph_from_basename(dir.path().join("absent").display().to_string()).unwrap_err();
        assert!(matches!(err, NetworkError::IoOpenFailed { .. }));
    }

    #[test]
    fn test_missing_co_file() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("arcsonly");
        std::fs::write(base.with_extension("gr"), "p sp 1 0\n").unwrap();
        let err = graph_from_basename(base.display().to_string()).unwrap_err();
        assert!(matches!(err, NetworkError::IoOpenFailed { .. }));
    }
}
