//! The two output streams of a generation run.
//!
//! A [`Sink`] borrows its writers; whoever opened them (usually the driver)
//! owns them and releases them when it goes out of scope, on success and on
//! error alike.

use std::io::{self, Write};

use crate::doc::Doc;

/// Which output stream a construct belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Type and service declarations.
    Types,
    /// Constant declarations.
    Vars,
}

/// Output streams shared by every emitter during one generation run.
pub struct Sink<'w> {
    types: Box<dyn Write + 'w>,
    vars: Box<dyn Write + 'w>,
}

impl<'w> Sink<'w> {
    pub fn new(types: impl Write + 'w, vars: impl Write + 'w) -> Self {
        Self {
            types: Box::new(types),
            vars: Box::new(vars),
        }
    }

    /// Write a top-level form followed by a blank line.
    pub fn write_form(&mut self, stream: Stream, doc: &Doc) -> io::Result<()> {
        let writer = self.writer(stream);
        writer.write_all(doc.render().as_bytes())?;
        writer.write_all(b"\n\n")
    }

    /// Flush both streams.
    pub fn flush(&mut self) -> io::Result<()> {
        self.types.flush()?;
        self.vars.flush()
    }

    fn writer(&mut self, stream: Stream) -> &mut (dyn Write + 'w) {
        match stream {
            Stream::Types => self.types.as_mut(),
            Stream::Vars => self.vars.as_mut(),
        }
    }
}
