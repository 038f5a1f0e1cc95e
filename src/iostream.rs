use std::io::{self, BufRead, BufReader, Read};

use crate::error::{CliError, CliResult};

/// A readable stream that knows whether it is attached to a terminal.
pub trait InputStream: Read {
   fn is_terminal(&self) -> bool;
}

/// The process's standard input.
pub struct Stdin(io::Stdin);

impl Stdin {
   pub fn new() -> Self {
      Self(io::stdin())
   }
}

impl Default for Stdin {
   fn default() -> Self {
      Self::new()
   }
}

impl Read for Stdin {
   fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      self.0.read(buf)
   }
}

impl InputStream for Stdin {
   fn is_terminal(&self) -> bool {
      atty::is(atty::Stream::Stdin)
   }
}

pub fn is_interactive<S: InputStream + ?Sized>(stream: &S) -> bool {
   stream.is_terminal()
}

/// Drain a piped (non-terminal) stream to end of stream.
///
/// A terminal is never read from, so this cannot block waiting for typing.
pub fn piped_input<S: InputStream + ?Sized>(stream: &mut S) -> CliResult<Vec<u8>> {
   if is_interactive(&*stream) {
      return Ok(Vec::new());
   }

   let mut reader = BufReader::new(stream);
   let mut piped = Vec::new();
   loop {
      let read = reader
         .read_until(b'\n', &mut piped)
         .map_err(CliError::io("unable to read from pipe"))?;
      if read == 0 {
         break;
      }
   }

   Ok(piped)
}
