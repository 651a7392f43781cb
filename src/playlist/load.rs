//! JSON playlist parsing and writing.
//!
//! The on-disk format is a JSON array of entry objects:
//!
//! ```json
//! [
//!   {"mediaRef": "intro.mp4",
//!    "actions": [{"time": 1.5, "title": "Welcome"}],
//!    "pauses": [{"time": 4.0, "duration": 2.0, "classAdd": ["dim"]}]},
//!   {"duration": 3.0}
//! ]
//! ```
//!
//! Semantic rules (sorted times, positive pause durations) are validated
//! after parse; malformed event ordering is rejected here rather than
//! producing undefined scheduling later.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::{Playlist, PlaylistEntry};

impl Playlist {
    /// Parse a playlist from a file path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a playlist from a reader.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<PlaylistEntry> =
            serde_json::from_reader(reader).context("Failed to parse playlist JSON")?;

        let playlist = Playlist::new(entries);
        playlist
            .validate()
            .context("Playlist violates event ordering rules")?;
        Ok(playlist)
    }

    /// Parse from a string.
    pub fn parse_str(content: &str) -> Result<Self> {
        Self::parse_reader(content.as_bytes())
    }

    /// Write the playlist to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
        self.write_to(&mut file)
    }

    /// Write the playlist to a writer as pretty-printed JSON.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.entries)
            .context("Failed to serialize playlist")?;
        writeln!(writer)?;
        Ok(())
    }
}
