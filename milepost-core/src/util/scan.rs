//! byte-cursor scanning primitives for line-oriented ASCII inputs.
//!
//! these replace locale-aware stream extraction in the DIMACS readers:
//! every function advances a cursor over a shared read-only buffer and
//! performs no per-token allocation. "space" here means space or tab;
//! tokens additionally end at `\r` and `\n` so a scan never runs past
//! the current line.

/// advances the cursor while it points at a space or tab.
pub fn skip_spaces(buf: &[u8], pos: &mut usize, end: usize) {
    while *pos < end && (buf[*pos] == b' ' || buf[*pos] == b'\t') {
        *pos += 1;
    }
}

/// advances the cursor while it points at a non-space, non-line-break byte.
pub fn skip_non_spaces(buf: &[u8], pos: &mut usize, end: usize) {
    while *pos < end && !matches!(buf[*pos], b' ' | b'\t' | b'\r' | b'\n') {
        *pos += 1;
    }
}

/// returns the non-space run starting at the cursor, advancing past it.
pub fn token<'a>(buf: &'a [u8], pos: &mut usize, end: usize) -> &'a [u8] {
    let start = *pos;
    skip_non_spaces(buf, pos, end);
    &buf[start..*pos]
}

/// reads a run of ASCII digits into an unsigned integer, stopping at the
/// first non-digit. an empty digit span yields 0.
pub fn parse_unsigned(buf: &[u8], pos: &mut usize, end: usize) -> u64 {
    let mut x: u64 = 0;
    while *pos < end {
        let c = buf[*pos];
        if !c.is_ascii_digit() {
            break;
        }
        x = x * 10 + u64::from(c - b'0');
        *pos += 1;
    }
    x
}

/// like [`parse_unsigned`] but consumes an optional leading `-`.
pub fn parse_signed(buf: &[u8], pos: &mut usize, end: usize) -> i64 {
    let mut neg = false;
    if *pos < end && buf[*pos] == b'-' {
        neg = true;
        *pos += 1;
    }
    let x = parse_unsigned(buf, pos, end) as i64;
    if neg {
        -x
    } else {
        x
    }
}

/// advances the cursor past the next `\n`, or to `end` on the last line.
pub fn skip_line(buf: &[u8], pos: &mut usize, end: usize) {
    while *pos < end && buf[*pos] != b'\n' {
        *pos += 1;
    }
    if *pos < end {
        *pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_spaces() {
        let buf = b"  \t 42";
        let mut pos = 0;
        skip_spaces(buf, &mut pos, buf.len());
        assert_eq!(pos, 4);
        assert_eq!(buf[pos], b'4');
    }

    #[test]
    fn test_skip_spaces_at_end() {
        let buf = b"   ";
        let mut pos = 0;
        skip_spaces(buf, &mut pos, buf.len());
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_skip_non_spaces_stops_at_newline() {
        let buf = b"sp\nnext";
        let mut pos = 0;
        skip_non_spaces(buf, &mut pos, buf.len());
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_token() {
        let buf = b"aux 2 264346";
        let mut pos = 0;
        assert_eq!(token(buf, &mut pos, buf.len()), b"aux");
        skip_spaces(buf, &mut pos, buf.len());
        assert_eq!(token(buf, &mut pos, buf.len()), b"2");
    }

    #[test]
    fn test_parse_unsigned() {
        let buf = b"23947347 8";
        let mut pos = 0;
        assert_eq!(parse_unsigned(buf, &mut pos, buf.len()), 23_947_347);
        assert_eq!(buf[pos], b' ');
    }

    #[test]
    fn test_parse_unsigned_empty_span_is_zero() {
        let buf = b"abc";
        let mut pos = 0;
        assert_eq!(parse_unsigned(buf, &mut pos, buf.len()), 0);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_parse_signed() {
        let buf = b"-73530767 41085396";
        let mut pos = 0;
        assert_eq!(parse_signed(buf, &mut pos, buf.len()), -73_530_767);
        skip_spaces(buf, &mut pos, buf.len());
        assert_eq!(parse_signed(buf, &mut pos, buf.len()), 41_085_396);
    }

    #[test]
    fn test_skip_line() {
        let buf = b"c comment\na 1 2 3";
        let mut pos = 0;
        skip_line(buf, &mut pos, buf.len());
        assert_eq!(buf[pos], b'a');
        skip_line(buf, &mut pos, buf.len());
        assert_eq!(pos, buf.len());
    }
}
