use std::io::{BufWriter, Write};

use log::debug;
use serde::Serialize;

use crate::errors::PaddockError;
use crate::render::{ChartPayload, ChartSink, ChartTarget};

#[derive(Serialize)]
struct ChartLine<'a> {
    target: ChartTarget,
    payload: ChartPayload<'a>,
}

/// Writes one `{"target": ..., "payload": ...}` JSON line per chart
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered lines and hand back the inner writer
    pub fn finish(self) -> Result<W, PaddockError> {
        debug!("Wrote {} chart payloads", self.written);
        self.writer
            .into_inner()
            .map_err(|e| PaddockError::ExportWriteError { source: e.into_error() })
    }
}

impl<W: Write> ChartSink for JsonLinesSink<W> {
    fn render(&mut self, target: ChartTarget, payload: ChartPayload<'_>) -> Result<(), PaddockError> {
        let line = serde_json::to_string(&ChartLine { target, payload }).map_err(|e| {
            PaddockError::ExportSerializeError {
                target: target.to_string(),
                source: e,
            }
        })?;
        writeln!(self.writer, "{}", line).map_err(|e| PaddockError::ExportWriteError { source: e })?;
        self.written += 1;
        Ok(())
    }
}
