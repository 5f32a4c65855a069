use super::{MicroCoord, NetworkError, VertexId};
use std::io::{self, Write};
use std::ops::Range;

/// Road network topology in compressed-sparse-row form.
///
/// All out-arcs of the graph live in one flat `col_idx` array, ordered by
/// source vertex; `row_ptr[u] .. row_ptr[u+1]` is the half-open index
/// range of the arcs leaving `u`, and the same indices apply element-wise
/// to `weights`. A coordinate side-table carries one microdegree position
/// per vertex for the distance estimate.
///
/// # Performance
///
/// The four arrays are contiguous, fixed-length, and never resized after
/// construction, so a neighbour scan is a pair of adjacent slice reads.
/// Arcs sharing a source keep the order they had in the input.
#[derive(Debug)]
pub struct Graph {
    row_ptr: Box<[u32]>,
    col_idx: Box<[u32]>,
    weights: Box<[u32]>,
    coords: Box<[MicroCoord]>,
}

impl Graph {
    /// assembles a graph from prebuilt CSR arrays, validating every
    /// layout invariant. this is the only constructor; no partially
    /// valid graph can escape it.
    ///
    /// # Arguments
    ///
    /// * `row_ptr` - arc offsets, length n+1, non-decreasing, last entry m
    /// * `col_idx` - destination vertex per arc, each below n
    /// * `weights` - arc cost per arc, same length as `col_idx`
    /// * `coords`  - one microdegree coordinate per vertex
    pub fn new(
        row_ptr: Vec<u32>,
        col_idx: Vec<u32>,
        weights: Vec<u32>,
        coords: Vec<MicroCoord>,
    ) -> Result<Graph, NetworkError> {
        if row_ptr.is_empty() {
            return Err(NetworkError::InvalidTopology(String::from(
                "row_ptr must have length n+1, found length 0",
            )));
        }
        let n = row_ptr.len() - 1;
        let m = col_idx.len();
        if row_ptr[0] != 0 {
            return Err(NetworkError::InvalidTopology(format!(
                "row_ptr must start at 0, found {}",
                row_ptr[0]
            )));
        }
        if let Some(i) = (0..n).find(|&i| row_ptr[i] > row_ptr[i + 1]) {
            return Err(NetworkError::InvalidTopology(format!(
                "row_ptr decreases between vertices {} and {}",
                i,
                i + 1
            )));
        }
        if row_ptr[n] as usize != m {
            return Err(NetworkError::InvalidTopology(format!(
                "row_ptr ends at {} but {} arcs are stored",
                row_ptr[n], m
            )));
        }
        if weights.len() != m {
            return Err(NetworkError::InvalidTopology(format!(
                "{} arcs but {} weights",
                m,
                weights.len()
            )));
        }
        if coords.len() != n {
            return Err(NetworkError::InvalidTopology(format!(
                "{} vertices but {} coordinates",
                n,
                coords.len()
            )));
        }
        if let Some(&v) = col_idx.iter().find(|&&v| v as usize >= n) {
            return Err(NetworkError::InvalidTopology(format!(
                "arc destination {} outside vertex range [0, {})",
                v, n
            )));
        }
        Ok(Graph {
            row_ptr: row_ptr.into_boxed_slice(),
            col_idx: col_idx.into_boxed_slice(),
            weights: weights.into_boxed_slice(),
            coords: coords.into_boxed_slice(),
        })
    }

    /// number of vertices in the Graph
    pub fn n(&self) -> usize {
        self.row_ptr.len() - 1
    }

    /// number of directed arcs in the Graph
    pub fn m(&self) -> usize {
        self.col_idx.len()
    }

    /// the half-open arc-index range of the out-arcs of `u`; applies to
    /// both [`Graph::arc_targets`] and [`Graph::arc_weights`]
    pub fn neighbours(&self, u: VertexId) -> Range<usize> {
        self.row_ptr[u.as_usize()] as usize..self.row_ptr[u.as_usize() + 1] as usize
    }

    /// destination vertex ids of all arcs, indexed by arc position
    pub fn arc_targets(&self) -> &[u32] {
        &self.col_idx
    }

    /// costs of all arcs, indexed by arc position
    pub fn arc_weights(&self) -> &[u32] {
        &self.weights
    }

    /// iterates the out-arcs of `u` as (destination, weight) pairs, in
    /// stored CSR order
    pub fn out_arcs(&self, u: VertexId) -> impl Iterator<Item = (VertexId, u32)> + '_ {
        let range = self.neighbours(u);
        self.col_idx[range.clone()]
            .iter()
            .zip(self.weights[range].iter())
            .map(|(&v, &w)| (VertexId(v), w))
    }

    pub fn out_degree(&self, u: VertexId) -> usize {
        self.neighbours(u).len()
    }

    pub fn coord(&self, u: VertexId) -> MicroCoord {
        self.coords[u.as_usize()]
    }

    /// the cost of traversing arc (u, v), or None if no such arc exists.
    /// parallel arcs resolve to the cheapest, matching what relaxation
    /// would have chosen on an optimal path.
    pub fn arc_weight(&self, u: VertexId, v: VertexId) -> Option<u32> {
        self.out_arcs(u)
            .filter(|(dst, _)| *dst == v)
            .map(|(_, w)| w)
            .min()
    }

    /// writes the arc table in DIMACS `.gr` text form with 1-based ids.
    pub fn write_dimacs_gr<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "p sp {} {}", self.n(), self.m())?;
        for u in 0..self.n() {
            let u = VertexId(u as u32);
            for (v, w) in self.out_arcs(u) {
                writeln!(out, "a {} {} {}", u.external(), v.external(), w)?;
            }
        }
        Ok(())
    }

    /// writes the coordinate table in DIMACS `.co` text form with
    /// 1-based ids, longitude before latitude.
    pub fn write_dimacs_co<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "p aux sp co {}", self.n())?;
        for u in 0..self.n() {
            let c = self.coords[u];
            writeln!(out, "v {} {} {}", u + 1, c.x, c.y)?;
        }
        Ok(())
    }
}
