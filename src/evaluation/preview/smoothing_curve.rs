use crate::evaluation::Snapshot;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

/// Ordered sequence of [`Snapshot`]s collected over a smoothing run.
pub struct SmoothingCurve {
    entries: Vec<Snapshot>,
}

impl SmoothingCurve {
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

    /// Writes the fixed snapshot columns to `path`; `extras` stay
    /// in-memory only.
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
            "samples_seen{d}mean_abs_residual{d}rms_residual{d}seconds",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{:.6}",
                s.samples_seen,
                s.mean_abs_residual,
                s.rms_residual,
                s.seconds,
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "[")?;
        for (i, s) in self.entries.iter().enumerate() {
            writeln!(
                w,
                "  {{\"samples_seen\":{},\"mean_abs_residual\":{},\"rms_residual\":{},\"seconds\":{}}}{}",
                s.samples_seen,
                s.mean_abs_residual,
                s.rms_residual,
                s.seconds,
                if i + 1 == self.entries.len() { "" } else { "," }
            )?;
        }
        writeln!(w, "]")?;
        Ok(())
    }
}

impl Default for SmoothingCurve {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}
