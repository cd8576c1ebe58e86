//! CLI helpers.

mod bencher;
mod output;
mod stdout_logger;


use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

pub use self::bencher::Bencher;
pub(self) use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default, Debug)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Input to read.
    path: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options from the environment and install the logger they
    /// ask for.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options out of the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    opts.set_path(other.into())?;
                }
            }
        }

        for arg in it {
            opts.set_path(arg.into())?;
        }

        Ok(opts)
    }

    fn set_path(&mut self, path: PathBuf) -> Result<()> {
        if let Some(existing) = &self.path {
            bail!(
                "more than one input: {} and {}",
                existing.display(),
                path.display()
            );
        }

        self.path = Some(path);
        Ok(())
    }

    /// The input path given on the command line, or `default`.
    pub fn path_or<'a>(&'a self, default: &'a Path) -> &'a Path {
        self.path.as_deref().unwrap_or(default)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Parse the argument following an option.
fn value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;
    let value = value
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;
    value
        .parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Run `solve` the way the options ask for, writing to stdout.
pub fn run<F>(opts: &Opts, solve: F) -> Result<()>
where
    F: FnMut() -> Result<(usize, usize)>,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    run_with(&mut o, opts, solve)
}

fn run_with<O, F>(o: &mut Output<O>, opts: &Opts, mut solve: F) -> Result<()>
where
    O: Write,
    F: FnMut() -> Result<(usize, usize)>,
{
    match opts.mode {
        Mode::Default => match solve() {
            Ok((part1, part2)) => {
                o.answer(part1, part2)?;
            }
            Err(error) => {
                if opts.json {
                    o.error(format_args!("{error:#}"))?;
                }

                return Err(error);
            }
        },
        Mode::Bench => {
            let mut b = Bencher::new();
            b.iter(o, opts, solve)?;
        }
    }

    Ok(())
}

/// Timings collected by a bench run.
#[derive(Default, Debug, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Summarize samples which have been sorted in ascending order.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
        }
    }
}

/// Nearest-rank percentile in basis points.
fn percentile(samples: &[Duration], basis: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples
        .get(last * basis / 10000)
        .copied()
        .unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
