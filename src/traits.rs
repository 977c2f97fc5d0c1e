use crate::session::DebugSession;

/// Trait for sources of debugger session snapshots.
///
/// Implemented by the on-disk JSON reader and by the demo generator, so the
/// GUI can load either through the same path.
pub trait SessionReader {
    /// Opens and parses a session, returning the snapshot.
    fn read(&self, file_path: &str) -> anyhow::Result<DebugSession>;

    /// Short human-readable name of the session source.
    fn source_name(&self) -> &'static str;
}
