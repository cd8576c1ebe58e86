use std::path::Path;

use lib::cli::Opts;
use lib::prelude::*;

/// Default input, relative to the package.
const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/d10.txt");

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let path = opts.path_or(Path::new(INPUT));

    let data = std::fs::read(path).with_context(|| anyhow!("{}", path.display()))?;
    log::debug!("read {} bytes from {}", data.len(), path.display());

    lib::cli::run(&opts, || {
        lib::solve(&data).with_context(|| anyhow!("{}", path.display()))
    })
}
