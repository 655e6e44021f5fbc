// Square helpers for the mailbox layout.
//
// index = row * 8 + file, file 0 = a-file, row 0 = 8th rank.
// So a8 = 0, h8 = 7, a1 = 56, h1 = 63.

pub const A8: usize = 0;
pub const E8: usize = 4;
pub const H8: usize = 7;
pub const A1: usize = 56;
pub const E1: usize = 60;
pub const H1: usize = 63;

#[inline]
pub fn file_of(idx: usize) -> usize {
    idx % 8
}

#[inline]
pub fn row_of(idx: usize) -> usize {
    idx / 8
}

/// Square reached by moving `file_delta` files and `row_delta` rows from `idx`,
/// or `None` if that leaves the board. Working in file/row space instead of raw
/// index offsets is what keeps pieces from wrapping around the a/h edges.
#[inline]
pub fn step(idx: usize, file_delta: i32, row_delta: i32) -> Option<usize> {
    let file = file_of(idx) as i32 + file_delta;
    let row = row_of(idx) as i32 + row_delta;
    if (0..8).contains(&file) && (0..8).contains(&row) {
        Some((row * 8 + file) as usize)
    } else {
        None
    }
}

/// Algebraic name of a square, e.g. `e4`.
pub fn square_name(idx: usize) -> String {
    let file = (b'a' + file_of(idx) as u8) as char;
    let rank = (b'8' - row_of(idx) as u8) as char;
    format!("{}{}", file, rank)
}

/// Parses an algebraic square name (`a1`..`h8`).
pub fn parse_square(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some((b'8' - rank) as usize * 8 + (file - b'a') as usize)
}
