//! Terminal output helpers
//!
//! Decides whether output goes through a pager and whether it is colored,
//! and adapts the minus pager to `std::io::Write`.

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `Write`.
///
/// Writes may split a multi-byte character; the incomplete tail is held back
/// until the rest of it arrives.
pub struct PagerWriter {
    pager: Pager,
    pending: Vec<u8>,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter {
            pager,
            pending: Vec::new(),
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            Err(error) if error.error_len().is_none() => error.valid_up_to(),
            Err(error) => {
                self.pending.clear();
                return Err(io::Error::new(io::ErrorKind::InvalidData, error));
            }
        };
        let text = String::from_utf8(self.pending.drain(..valid).collect())
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        self.pager.push_str(text).map_err(io::Error::other)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Paging is used on an interactive terminal unless `NO_PAGER` is set.
pub fn should_page() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

/// Color is used on an interactive terminal unless `NO_COLOR` is set.
pub fn should_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
