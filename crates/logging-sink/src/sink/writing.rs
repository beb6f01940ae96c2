use super::RecordSink;
use crate::record::write_record;
use std::fmt::Display;
use std::io::{self, Write};

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Renders one record into the underlying writer.
    ///
    /// See [`write_record`](crate::write_record) for the exact byte format.
    pub fn write_record(&mut self, tag: &str, values: &[&dyn Display]) -> io::Result<()> {
        write_record(&mut self.writer, tag, values)
    }
}

impl<W> Write for RecordSink<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingFlush {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn write_record_appends_one_line_per_record() {
        let mut sink = RecordSink::new(Vec::new());
        sink.write_record("[Info]", &[&"phase", &1]).unwrap();
        sink.write_record("[Info]", &[&"phase", &2]).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[Info] phase 1"));
        assert_eq!(lines.next(), Some("[Info] phase 2"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn raw_writes_pass_through_unchanged() {
        let mut sink = RecordSink::new(Vec::new());
        sink.write_all(b"prefix ").unwrap();
        write!(sink, "{}", 7).unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"prefix 7");
    }

    #[test]
    fn flush_reaches_the_writer() {
        let mut sink = RecordSink::new(CountingFlush::default());
        sink.write_record("[Error]", &[]).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.get_ref().flushes, 1);
        assert_eq!(sink.get_ref().bytes, b"[Error]\n");
    }

    #[test]
    fn get_mut_allows_direct_writer_access() {
        let mut sink = RecordSink::new(Vec::new());
        sink.get_mut().extend_from_slice(b"seed\n");
        sink.write_record("[Debug]", &[&"after"]).unwrap();
        assert_eq!(sink.into_inner(), b"seed\n[Debug] after\n");
    }

    #[test]
    fn default_and_from_wrap_the_writer() {
        let sink: RecordSink<Vec<u8>> = RecordSink::default();
        assert!(sink.get_ref().is_empty());

        let sink = RecordSink::from(vec![b'x']);
        assert_eq!(sink.into_inner(), b"x");
    }

    #[test]
    fn sink_can_be_used_through_a_mutable_reference() {
        let mut sink = RecordSink::new(Vec::new());
        {
            let borrowed: &mut RecordSink<Vec<u8>> = &mut sink;
            write_record(borrowed, "[Warning]", &[&"borrowed"]).unwrap();
        }
        assert_eq!(sink.into_inner(), b"[Warning] borrowed\n");
    }
}
