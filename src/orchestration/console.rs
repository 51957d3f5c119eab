//! Console orchestration: drives the chart from a pointer feed.
//!
//! Each input line is `<x> <y>` in screen pixels. Each answer is one JSON
//! line, the chart `Point` or `null` outside the plotting area.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::capability::{Chart, Point};
use crate::error::{BootstrapError, BootstrapResult};
use crate::orchestration::{Configured, Orchestration, OrchestrationModule};

/// Orchestration module bound to a reader and a writer.
pub struct ConsoleModule<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> ConsoleModule<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R, W> OrchestrationModule for ConsoleModule<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    type Orchestration = ConsoleOrchestration<R, W>;

    fn load(self) -> BoxFuture<'static, BootstrapResult<Self::Orchestration>> {
        Box::pin(async move {
            Ok(ConsoleOrchestration {
                reader: self.reader,
                writer: self.writer,
            })
        })
    }
}

/// Loaded console orchestration, waiting for `setup`.
pub struct ConsoleOrchestration<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Orchestration for ConsoleOrchestration<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    type Configured = ConsoleApp<R, W>;

    fn setup(self, chart: Chart) -> BootstrapResult<Self::Configured> {
        tracing::debug!("Chart registered with console");
        Ok(ConsoleApp {
            chart,
            reader: self.reader,
            writer: self.writer,
        })
    }
}

/// Console application with its chart registered.
pub struct ConsoleApp<R, W> {
    chart: Chart,
    reader: R,
    writer: W,
}

impl<R, W> Configured for ConsoleApp<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    fn main(self) -> BoxFuture<'static, BootstrapResult<()>> {
        self.run().boxed()
    }
}

impl<R, W> ConsoleApp<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn run(mut self) -> BootstrapResult<()> {
        let mut answered = 0usize;
        let mut skipped = 0usize;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring pointer line that is not UTF-8");
                    skipped += 1;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            let Some((x, y)) = parse_pointer(line) else {
                tracing::warn!(input = %line, "Ignoring malformed pointer line");
                skipped += 1;
                continue;
            };

            let point: Option<Point> = self.chart.coord(x, y);
            let mut answer =
                serde_json::to_vec(&point).map_err(|e| BootstrapError::Main(e.to_string()))?;
            answer.push(b'\n');
            self.writer.write_all(&answer).await?;
            answered += 1;
        }

        self.writer.flush().await?;
        tracing::info!(answered, skipped, "Pointer feed closed");
        Ok(())
    }
}

/// Parse `<x> <y>` into screen coordinates.
fn parse_pointer(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn identity_chart() -> Chart {
        Chart::new(|(x, y)| {
            if x < 0 || y < 0 {
                None
            } else {
                Some((f64::from(x), f64::from(y)))
            }
        })
    }

    async fn run(input: &[u8]) -> String {
        let mut out = Vec::new();
        let app = ConsoleApp {
            chart: identity_chart(),
            reader: Cursor::new(input.to_vec()),
            writer: &mut out,
        };

        app.run().await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_pointer() {
        assert_eq!(parse_pointer("12 -4\n"), Some((12, -4)));
        assert_eq!(parse_pointer("  7\t8 "), Some((7, 8)));
        assert_eq!(parse_pointer("1"), None);
        assert_eq!(parse_pointer("1 2 3"), None);
        assert_eq!(parse_pointer("a b"), None);
    }

    #[tokio::test]
    async fn test_console_answers_each_pointer() {
        let out = run(b"1 2\n\n-1 5\nnonsense\n3 4").await;

        assert_eq!(out, "{\"x\":1.0,\"y\":2.0}\nnull\n{\"x\":3.0,\"y\":4.0}\n");
    }

    #[tokio::test]
    async fn test_console_skips_non_utf8_line() {
        let out = run(b"1 2\n\xff\xfe\n3 4\n").await;

        assert_eq!(out, "{\"x\":1.0,\"y\":2.0}\n{\"x\":3.0,\"y\":4.0}\n");
    }

    #[tokio::test]
    async fn test_module_load_then_setup() {
        let orchestration = ConsoleModule::new(Cursor::new(b"0 0\n".to_vec()), Vec::new())
            .load()
            .await
            .unwrap();

        let app = orchestration.setup(identity_chart()).unwrap();
        app.main().await.unwrap();
    }
}
