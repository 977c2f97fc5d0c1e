//! Writing session snapshots.

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::session::DebugSession;

// Brotli settings for `.br` output
const BROTLI_QUALITY: i32 = 6;
const BROTLI_WINDOW_BITS: i32 = 22;
const BROTLI_BUFFER_SIZE: usize = 4096;

/// Writes a [`DebugSession`] as pretty-printed JSON.
pub struct SessionWriter {
    output: Box<dyn Write>,
    path: String,
    compressed: bool,
}

impl SessionWriter {
    /// Creates `file_path`, compressing with Brotli when the name ends in `.br`
    /// (e.g. `session.json.br`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rdbgview::{SessionWriter, DebugSession};
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = SessionWriter::new("session.json.br")?;
    /// writer.write_session(&DebugSession::default())?;
    /// writer.finish()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create session file: {}", file_path))?;
        let compressed = file_path.ends_with(".br");

        let output: Box<dyn Write> = if compressed {
            let params = BrotliEncoderParams {
                quality: BROTLI_QUALITY,
                lgwin: BROTLI_WINDOW_BITS,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), BROTLI_BUFFER_SIZE, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(Self {
            output,
            path: file_path.to_string(),
            compressed,
        })
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn write_session(&mut self, session: &DebugSession) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.output, session)
            .with_context(|| format!("Failed to write session to {}", self.path))?;
        self.output
            .write_all(b"\n")
            .with_context(|| format!("Failed to write session to {}", self.path))
    }

    /// Flushes and closes the file. A compressed stream is only complete
    /// once this returns.
    pub fn finish(mut self) -> Result<()> {
        self.output
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path))?;
        log::debug!(
            "session written to {}{}",
            self.path,
            if self.compressed { " (brotli)" } else { "" }
        );
        // Dropping the compressor writes the final Brotli block.
        Ok(())
    }
}
