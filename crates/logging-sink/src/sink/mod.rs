//! crates/logging-sink/src/sink/mod.rs
//! Owning record sink.

mod writing;

/// Streaming sink that renders log records into an [`io::Write`](std::io::Write) target.
///
/// The sink owns the underlying writer. [`write_record`](Self::write_record)
/// renders one record using the facade's byte format, while the
/// [`Write`](std::io::Write) implementation forwards raw bytes untouched. The
/// latter lets a sink be handed to the facade as an explicit destination and
/// recovered afterwards with [`into_inner`](Self::into_inner).
///
/// The sink adds no locking. Sharing one between threads requires external
/// synchronisation, exactly as for the writer it wraps.
///
/// # Examples
///
/// ```
/// use logging_sink::RecordSink;
///
/// let mut sink = RecordSink::new(Vec::new());
/// sink.write_record("[Warning]", &[&"vanished", &24])?;
/// sink.write_record("[Error]", &[&"partial"])?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[Warning] vanished 24\n[Error] partial\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RecordSink<W> {
    writer: W,
}

impl<W> RecordSink<W> {
    /// Creates a sink that writes records into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for RecordSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> From<W> for RecordSink<W> {
    fn from(writer: W) -> Self {
        Self::new(writer)
    }
}
