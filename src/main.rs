mod logging;

use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use console::Term;
use dotenv::dotenv;
use extdir::cli::{self, Cli, Invocation};
use extdir::{
    check_root, report, walk, AppConfig, ProgressTicker, TraversalContext, WalkOptions,
    PROGRESS_INTERVAL,
};
use indicatif::HumanDuration;
use tracing::{debug, error, warn};

fn main() {
    dotenv().ok();

    let program = cli::program_name();

    let (root, print_paths) = match Cli::parse_invocation(&program, std::env::args_os()) {
        Invocation::Version => {
            println!("{}", cli::version_line(&program));
            return;
        }
        Invocation::Help(text) => {
            print!("{}", text);
            return;
        }
        Invocation::Usage(text) => {
            eprint!("{}", text);
            return;
        }
        Invocation::Walk { root, print_paths } => (root, print_paths),
    };

    let (config, config_error) = match extdir::config::load_configuration() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let _guard = logging::init_logger(&config);

    if let Some(err) = config_error {
        warn!("Ignoring configuration, using defaults: {}", err);
    }

    if let Err(err) = run(&root, print_paths) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(root: &Path, print_paths: bool) -> anyhow::Result<()> {
    check_root(root)?;

    let mut ctx = TraversalContext::new();
    let options = WalkOptions { print_paths };

    let ticker = ProgressTicker::spawn(
        Arc::clone(&ctx.progress),
        PROGRESS_INTERVAL,
        Term::stderr(),
    );

    let start = Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let walked = walk(root, &options, &mut ctx, &mut out);
    out.flush()?;

    // Stop and join the ticker before the report so the two never interleave.
    if let Err(err) = ticker.finish() {
        debug!("Progress output failed: {}", err);
    }
    walked.with_context(|| format!("walking {}", root.display()))?;

    debug!(
        "Walked {} entries in {}",
        ctx.visited(),
        HumanDuration(start.elapsed())
    );

    report::write_report(&mut out, &ctx.tally, ctx.visited()).context("writing report")?;

    Ok(())
}
