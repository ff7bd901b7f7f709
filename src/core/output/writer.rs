//! Async example writer.

use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::{OutputFormat, OutputResult};

/// Writes headings, labels and JSON payloads to an async sink.
pub struct ExampleWriter<W> {
    inner: W,
    format: OutputFormat,
}

impl<W> ExampleWriter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Create a writer over `inner`.
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self { inner, format }
    }

    /// Write a section heading, e.g. `=== SEARCH TRACKS EXAMPLE ===`.
    pub async fn heading(&mut self, title: &str) -> OutputResult<()> {
        self.write_str(&format!("\n=== {} ===\n", title)).await
    }

    /// Write a line of text.
    pub async fn line(&mut self, text: &str) -> OutputResult<()> {
        self.write_str(text).await?;
        self.write_str("\n").await
    }

    /// Write an empty line.
    pub async fn blank(&mut self) -> OutputResult<()> {
        self.write_str("\n").await
    }

    /// Write `value` as JSON followed by a newline.
    pub async fn json<T>(&mut self, value: &T) -> OutputResult<()>
    where
        T: Serialize + ?Sized,
    {
        let rendered = self.render(value)?;
        self.line(&rendered).await
    }

    /// Write `label:` then the JSON payload below it.
    pub async fn labeled_json<T>(&mut self, label: &str, value: &T) -> OutputResult<()>
    where
        T: Serialize + ?Sized,
    {
        self.line(&format!("{}:", label)).await?;
        self.json(value).await
    }

    /// Flush the underlying sink.
    pub async fn flush(&mut self) -> OutputResult<()> {
        self.inner.flush().await?;
        Ok(())
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn render<T>(&self, value: &T) -> OutputResult<String>
    where
        T: Serialize + ?Sized,
    {
        let rendered = match self.format {
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Compact => serde_json::to_string(value)?,
        };
        Ok(rendered)
    }

    async fn write_str(&mut self, text: &str) -> OutputResult<()> {
        self.inner.write_all(text.as_bytes()).await?;
        Ok(())
    }
}
