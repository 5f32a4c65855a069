use super::fs_utils;
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// reads an entire input file into memory, transparently decoding gzip
/// based on the file suffix. the DIMACS readers scan the returned buffer
/// in place, so a single contiguous read keeps them allocation-free per
/// line even for multi-gigabyte datasets.
pub fn read_to_buffer<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    if fs_utils::is_gzip(&path) {
        let f = File::open(path)?;
        let mut buf = Vec::new();
        GzDecoder::new(f).read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read(path)
    }
}
