use crate::evaluation::{SmoothingCurve, SmoothingEvaluator, Snapshot};
use crate::filters::ScalarFilter;
use crate::signals::Signal;
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Drives a filter over a signal and samples evaluation snapshots.
///
/// The loop pulls one raw sample at a time, feeds it through the filter,
/// hands the (raw, filtered) pair to the evaluator, and records a
/// [`Snapshot`] every `sample_frequency` samples plus one final snapshot
/// when the run ends.
pub struct SmoothingTask {
    filter: Box<dyn ScalarFilter>,
    signal: Box<dyn Signal>,
    evaluator: Box<dyn SmoothingEvaluator>,

    curve: SmoothingCurve,

    max_samples: Option<u64>,
    max_seconds: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    start_time: Instant,

    progress_tx: Option<Sender<Snapshot>>,
}

impl SmoothingTask {
    pub fn new(
        filter: Box<dyn ScalarFilter>,
        signal: Box<dyn Signal>,
        evaluator: Box<dyn SmoothingEvaluator>,
        max_samples: Option<u64>,
        max_seconds: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }

        Ok(Self {
            filter,
            signal,
            evaluator,
            curve: SmoothingCurve::default(),
            max_samples,
            max_seconds,
            sample_frequency,
            processed: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_time = Instant::now();

        while self.signal.has_more_samples() {
            if let Some(n) = self.max_samples {
                if self.processed >= n {
                    break;
                }
            }
            if let Some(s) = self.max_seconds {
                if self.start_time.elapsed().as_secs() >= s {
                    break;
                }
            }
            let Some(raw) = self.signal.next_sample() else {
                break;
            };
            self.processed += 1;

            let filtered = self
                .filter
                .update(raw)
                .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

            self.evaluator.add_result(raw, filtered);

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        self.push_snapshot();
        Ok(())
    }

    pub fn curve(&self) -> &SmoothingCurve {
        &self.curve
    }

    fn push_snapshot(&mut self) {
        let secs = self.start_time.elapsed().as_secs_f64();
        let perf = self.evaluator.performance();

        let mut mae = f64::NAN;
        let mut rms = f64::NAN;
        let mut extras = BTreeMap::new();

        for m in perf {
            let key: &str = m.name.as_ref();
            match key {
                "mean_abs_residual" => mae = m.value,
                "rms_residual" => rms = m.value,
                _ => {
                    extras.insert(key.to_string(), m.value);
                }
            }
        }

        let snapshot = Snapshot {
            samples_seen: self.processed,
            mean_abs_residual: mae,
            rms_residual: rms,
            seconds: secs,
            extras,
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot.clone());
        }

        self.curve.push(snapshot);
    }
}
