#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` renders log records for the `logging` facade. A record is a
//! severity tag followed by an ordered list of displayable values; it is never
//! materialised as an owned object, only streamed into an
//! [`io::Write`](std::io::Write) destination by [`write_record`].
//!
//! # Design
//!
//! The crate exposes two layers:
//!
//! - [`write_record`] streams one record into any writer, including unsized
//!   trait objects. This is the single body shared by every active severity.
//! - [`RecordSink`], a lightweight owner of a writer that renders records and
//!   forwards raw [`Write`](std::io::Write) calls, so it can be handed to the
//!   facade as an explicit destination.
//!
//! [`default_destination`] returns the standard error handle used when a call
//! site does not name a destination.
//!
//! # Invariants
//!
//! - The tag is written first, then each value preceded by exactly one
//!   [`VALUE_SEPARATOR`], then a single [`RECORD_TERMINATOR`].
//! - Values are rendered through [`Display`](std::fmt::Display) in slice order.
//! - Destinations are borrowed or owned by the caller and are never closed;
//!   records are only ever appended.
//!
//! # Concurrency
//!
//! Nothing here synchronises writers. A record written to a destination that
//! other threads also write to may interleave with their output unless the
//! destination serialises writes itself. [`default_destination`] locks
//! standard error for as long as the returned guard lives, which covers one
//! record when used the way the facade uses it.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer unchanged.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{RecordSink, write_record};
//!
//! let mut buffer = Vec::new();
//! write_record(&mut buffer, "[Error]", &[&"bad", &5])?;
//! assert_eq!(buffer, b"[Error] bad 5\n");
//!
//! let mut sink = RecordSink::new(Vec::new());
//! sink.write_record("[Critical]", &[])?;
//! assert_eq!(sink.into_inner(), b"[Critical]\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod record;
mod sink;

pub use record::{RECORD_TERMINATOR, VALUE_SEPARATOR, default_destination, write_record};
pub use sink::RecordSink;
