use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Runs a solver repeatedly, timing every run and checking that each one
/// produces the same answer as the first.
#[derive(Default)]
pub struct Bencher {
    expected: Option<(usize, usize)>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, reporting errors as messages on the output.
    pub(crate) fn iter<O, F>(&mut self, o: &mut Output<O>, opts: &Opts, iter: F) -> Result<()>
    where
        O: Write,
        F: FnMut() -> Result<(usize, usize)>,
    {
        if let Err(e) = self.inner_iter(o, opts, iter) {
            o.error(format_args!("{e:#}"))?;
        }

        Ok(())
    }

    fn inner_iter<O, F>(&mut self, o: &mut Output<O>, opts: &Opts, mut iter: F) -> Result<()>
    where
        O: Write,
        F: FnMut() -> Result<(usize, usize)>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            let s = Instant::now();

            o.info(format_args!("warming up ({warmup:?})..."))?;

            loop {
                let value = iter()?;
                let after = Instant::now();
                self.check(value)?;

                if after.duration_since(s) >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();
                self.check(value)?;
                samples.push(after.duration_since(before));
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();
                self.check(value)?;
                samples.push(after.duration_since(before));

                if after.duration_since(start) >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let report = Report::from_sorted(&samples);
        log::debug!("{report}");
        o.report(&report)?;
        Ok(())
    }

    /// Every run must agree with the first one.
    fn check(&mut self, value: (usize, usize)) -> Result<()> {
        let value = std::hint::black_box(value);

        match self.expected {
            Some(expected) if expected != value => {
                bail!("{value:?} (value) != {expected:?} (first run)");
            }
            Some(_) => {}
            None => {
                self.expected = Some(value);
            }
        }

        Ok(())
    }
}
