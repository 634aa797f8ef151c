//! Asking the user to pick from a list or type a line.

#[cfg(test)]
mod tests;

use anyhow::Result;
use std::io::{BufRead, Write};

/// The quick-pick and free-text input surface a command may need.
pub trait Interaction {
    /// Show `items` and return the chosen index, or `None` when cancelled.
    ///
    /// # Errors
    /// Fails when the user cannot be asked at all.
    fn choose(&mut self, caption: &str, items: &[String]) -> Result<Option<usize>>;

    /// Ask for one line of text, or `None` when cancelled.
    ///
    /// # Errors
    /// Fails when the user cannot be asked at all.
    fn input(&mut self, caption: &str) -> Result<Option<String>>;
}

/// Numbered menus and line input over any reader/writer pair.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Prompt reading answers from `reader` and drawing menus on `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompt on the process's stdin, drawing on stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Interaction for LinePrompt<R, W> {
    fn choose(&mut self, caption: &str, items: &[String]) -> Result<Option<usize>> {
        if items.is_empty() {
            writeln!(self.writer, "Nothing to choose for {caption}.")?;
            return Ok(None);
        }
        writeln!(self.writer, "\nSelect {caption}:")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, item)?;
        }
        writeln!(self.writer, "  0. Cancel")?;
        write!(self.writer, "Choice [0]: ")?;
        self.writer.flush().ok();

        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(0) => Ok(None),
            Ok(n) if n <= items.len() => Ok(Some(n - 1)),
            _ => {
                writeln!(self.writer, "Invalid choice, cancelling.")?;
                Ok(None)
            }
        }
    }

    fn input(&mut self, caption: &str) -> Result<Option<String>> {
        write!(self.writer, "{caption}: ")?;
        self.writer.flush().ok();
        self.read_line()
    }
}
