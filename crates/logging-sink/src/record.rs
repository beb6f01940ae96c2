//! crates/logging-sink/src/record.rs
//! Byte-level rendering of a single log record.

use std::fmt::Display;
use std::io::{self, StderrLock, Write};

/// Byte written between the tag and each value, and between values.
pub const VALUE_SEPARATOR: u8 = b' ';

/// Byte terminating every record.
pub const RECORD_TERMINATOR: u8 = b'\n';

/// Streams one record into `out`.
///
/// The record is `tag`, then for every entry of `values` a
/// [`VALUE_SEPARATOR`] followed by the value's [`Display`] rendering, then a
/// [`RECORD_TERMINATOR`]. An empty `values` slice still produces the tag and
/// the terminator.
///
/// Writes are issued in order against the same writer and stop at the first
/// error, which is returned unchanged. Partial output already accepted by the
/// writer is not rolled back.
///
/// # Examples
///
/// ```
/// use logging_sink::write_record;
///
/// let mut out = Vec::new();
/// write_record(&mut out, "[Warning]", &[&"disk at", &97, &'%'])?;
/// assert_eq!(out, b"[Warning] disk at 97 %\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_record<W>(out: &mut W, tag: &str, values: &[&dyn Display]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    out.write_all(tag.as_bytes())?;
    for value in values {
        out.write_all(&[VALUE_SEPARATOR])?;
        write!(out, "{value}")?;
    }
    out.write_all(&[RECORD_TERMINATOR])
}

/// Returns the destination used when a call site names none: standard error.
///
/// The handle is locked for as long as the guard lives. Standard error is
/// process-wide and externally owned; dropping the guard releases the lock
/// without closing the stream.
#[must_use]
pub fn default_destination() -> StderrLock<'static> {
    io::stderr().lock()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    struct Celsius(f32);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:.1}C", self.0)
        }
    }

    /// Writer that accepts a fixed number of bytes and then fails.
    struct Truncating {
        accepted: Vec<u8>,
        capacity: usize,
    }

    impl Write for Truncating {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.accepted.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
            }
            let take = room.min(buf.len());
            self.accepted.extend_from_slice(&buf[..take]);
            Ok(take)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tag_only_record_ends_with_terminator() {
        let mut out = Vec::new();
        write_record(&mut out, "[Error]", &[]).expect("write succeeds");
        assert_eq!(out, b"[Error]\n");
    }

    #[test]
    fn values_are_space_separated_in_order() {
        let mut out = Vec::new();
        write_record(
            &mut out,
            "[Error]",
            &[&"a cannot be greater than", &50],
        )
        .expect("write succeeds");
        assert_eq!(out, b"[Error] a cannot be greater than 50\n");
    }

    #[test]
    fn heterogeneous_values_use_their_display_impl() {
        let mut out = Vec::new();
        let owned = String::from("owned");
        write_record(
            &mut out,
            "[Info]",
            &[&owned, &-3_i64, &2.5_f64, &true, &'x', &Celsius(21.04)],
        )
        .expect("write succeeds");
        assert_eq!(out, b"[Info] owned -3 2.5 true x 21.0C\n");
    }

    #[test]
    fn empty_string_values_still_get_a_separator() {
        let mut out = Vec::new();
        write_record(&mut out, "[Debug]", &[&"", &""]).expect("write succeeds");
        assert_eq!(out, b"[Debug]  \n");
    }

    #[test]
    fn accepts_unsized_writers() {
        let mut buffer = Vec::new();
        let out: &mut dyn Write = &mut buffer;
        write_record(out, "[Critical]", &[&"down"]).expect("write succeeds");
        assert_eq!(buffer, b"[Critical] down\n");
    }

    #[test]
    fn writer_errors_are_returned_unchanged() {
        let mut out = Truncating {
            accepted: Vec::new(),
            capacity: 4,
        };
        let error = write_record(&mut out, "[Warning]", &[&1]).expect_err("writer is full");
        assert_eq!(error.kind(), io::ErrorKind::WriteZero);
        assert_eq!(out.accepted, b"[War");
    }

    #[test]
    fn separator_and_terminator_constants() {
        assert_eq!(VALUE_SEPARATOR, b' ');
        assert_eq!(RECORD_TERMINATOR, b'\n');
    }
}
