use crate::evaluation::Snapshot;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

/// Append-only series of [`Snapshot`]s taken over the course of a
/// profiling run.
pub struct ProfileCurve {
    entries: Vec<Snapshot>,
}

impl ProfileCurve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.last().cloned()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(
            w,
            "samples_seen{d}mean{d}p50{d}p95{d}p99{d}seconds",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{:.6}{d}{:.6}{d}{:.6}{d}{:.6}{d}{:.6}",
                s.samples_seen,
                s.mean,
                s.p50,
                s.p95,
                s.p99,
                s.seconds,
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = File::create(path)?;
        let body = serde_json::to_string(&self.entries).map_err(Error::other)?;
        writeln!(w, "{body}")?;
        Ok(())
    }
}

impl Default for ProfileCurve {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}
