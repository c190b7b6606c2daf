use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Input was closed; the console exits cleanly.
#[derive(Debug, thiserror::Error)]
#[error("end of input")]
pub struct EndOfInput;

pub fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.is::<EndOfInput>()
}

/// Line-oriented prompt over any async reader and blocking writer.
pub struct Prompt<R, W> {
    input: R,
    pub(crate) out: W,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `label`, read one line and strip the line ending.
    pub async fn line(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .await
            .context("failed to read input")?;
        if read == 0 {
            return Err(EndOfInput.into());
        }
        Ok(buf.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }

    /// Like [`Prompt::line`] but an empty answer keeps `current`.
    pub async fn line_or(&mut self, label: &str, current: &str) -> Result<String> {
        let answer = self.line(&format!("{label} [{current}]: ")).await?;
        if answer.trim().is_empty() {
            Ok(current.to_owned())
        } else {
            Ok(answer)
        }
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_lines_until_eof() {
        let mut prompt = Prompt::new(&b"first\r\n\nlast"[..], Vec::new());

        assert_eq!(prompt.line("> ").await.unwrap(), "first");
        assert_eq!(prompt.line_or("name", "kept").await.unwrap(), "kept");
        assert_eq!(prompt.line("> ").await.unwrap(), "last");

        let err = prompt.line("> ").await.unwrap_err();
        assert!(is_end_of_input(&err));

        let shown = String::from_utf8(prompt.out).unwrap();
        assert!(shown.contains("name [kept]: "));
    }
}
