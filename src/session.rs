//! Debugger session snapshots.
//!
//! A snapshot captures everything the panels show for a paused program:
//! breakpoints, the call stack, variable scopes and source files. Snapshots
//! are stored as a single JSON document, optionally Brotli-compressed when
//! the file name ends with `.br`.

use anyhow::{Context, Result};
use brotli::Decompressor;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};

use crate::model::{Breakpoint, Frame, Scope, Source};
use crate::traits::SessionReader;

/// Everything known about a paused debug session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugSession {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub scopes: Vec<Scope>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl DebugSession {
    /// Total number of variables over all scopes (top level only).
    pub fn variable_count(&self) -> usize {
        self.scopes.iter().map(|s| s.variables.len()).sum()
    }
}

/// Parses a session snapshot file.
///
/// # Examples
///
/// ```no_run
/// # use rdbgview::parse_session;
/// # fn main() -> anyhow::Result<()> {
/// let session = parse_session("session.json")?;
/// let compressed = parse_session("session.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_session(file_path: &str) -> Result<DebugSession> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let reader: Box<dyn Read> = if file_path.ends_with(".br") {
        Box::new(BufReader::new(Decompressor::new(file, 4096)))
    } else {
        Box::new(BufReader::new(file))
    };

    let session: DebugSession = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse session JSON: {}", file_path))?;

    log::info!(
        "loaded session '{}' from {}: {} breakpoints, {} frames, {} variables",
        session.name,
        file_path,
        session.breakpoints.len(),
        session.frames.len(),
        session.variable_count()
    );
    Ok(session)
}

/// Reads session snapshots from JSON files.
#[derive(Debug, Default)]
pub struct JsonSessionReader;

impl JsonSessionReader {
    pub fn new() -> Self {
        Self
    }
}

impl SessionReader for JsonSessionReader {
    fn read(&self, file_path: &str) -> Result<DebugSession> {
        parse_session(file_path)
    }

    fn source_name(&self) -> &'static str {
        "JSON session"
    }
}
