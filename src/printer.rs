use std::{
    fmt,
    io::{self, Write},
};

/// Number of leading and trailing elements shown for long sequences.
pub const HALF_WIDTH: usize = 10;

/// Displays a sequence as `[ e1 e2 ... ]`, eliding the middle once it holds
/// more than twice the half-width elements.
#[derive(Debug, Clone, Copy)]
pub struct Truncated<'a, T> {
    seq: &'a [T],
    half_width: usize,
}

impl<'a, T> Truncated<'a, T> {
    pub fn new(seq: &'a [T]) -> Truncated<'a, T> {
        Truncated::with_half_width(seq, HALF_WIDTH)
    }

    pub fn with_half_width(seq: &'a [T], half_width: usize) -> Truncated<'a, T> {
        Truncated { seq, half_width }
    }
}

impl<T: fmt::Display> fmt::Display for Truncated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.half_width;
        let len = self.seq.len();
        f.write_str("[ ")?;
        // strictly greater: exactly 2n elements are still shown in full
        if len > n.saturating_mul(2) {
            for e in &self.seq[..n] {
                write!(f, "{} ", e)?;
            }
            write!(f, "..<{}>.. ", len - 2 * n)?;
            for e in &self.seq[len - n..] {
                write!(f, "{} ", e)?;
            }
        } else {
            for e in self.seq {
                write!(f, "{} ", e)?;
            }
        }
        f.write_str("]")
    }
}

/// Prints `seq` on a single line to stdout. Same as [`write_to`] on a locked
/// stdout, except that a failed write panics like `println!`.
pub fn print<T: fmt::Display>(seq: &[T]) {
    println!("{}", Truncated::new(seq));
}

/// Writes `seq` with the default half-width, followed by a newline.
pub fn write_to<W: Write, T: fmt::Display>(writer: &mut W, seq: &[T]) -> io::Result<()> {
    write_with_half_width(writer, seq, HALF_WIDTH)
}

/// Like [`write_to`], showing `half_width` elements on each side.
pub fn write_with_half_width<W: Write, T: fmt::Display>(
    writer: &mut W,
    seq: &[T],
    half_width: usize,
) -> io::Result<()> {
    writeln!(writer, "{}", Truncated::with_half_width(seq, half_width))
}
