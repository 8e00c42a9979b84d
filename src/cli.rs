use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

#[derive(Debug, Parser)]
#[command(name = "extdir")]
#[command(
    about = "Recurses a directory and reports file counts by extension",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version and exit
    #[arg(long)]
    pub version: bool,

    /// Print each visited path
    #[arg(long = "path")]
    pub print_paths: bool,

    /// Directory to walk
    #[arg(value_name = "PATH")]
    pub roots: Vec<PathBuf>,
}

/// What a command line asks the program to do.
#[derive(Debug)]
pub enum Invocation {
    Version,
    /// Help requested explicitly; goes to stdout.
    Help(String),
    /// Malformed invocation; goes to stderr.
    Usage(String),
    Walk { root: PathBuf, print_paths: bool },
}

impl Cli {
    pub fn parse_invocation<I, T>(program: &str, args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                return Invocation::Help(long_help(program));
            }
            Err(err) => {
                return Invocation::Usage(format!("{}\n{}", err.render(), long_help(program)));
            }
        };

        if cli.version {
            return Invocation::Version;
        }

        let mut roots = cli.roots;
        if roots.len() != 1 {
            return Invocation::Usage(long_help(program));
        }

        Invocation::Walk {
            root: roots.remove(0),
            print_paths: cli.print_paths,
        }
    }
}

fn long_help(program: &str) -> String {
    Cli::command()
        .bin_name(program.to_string())
        .render_long_help()
        .to_string()
}

/// File stem of argv[0], as the user invoked us.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "extdir".to_string())
}

pub fn version_line(program: &str) -> String {
    format!("{} version {}", program, VERSION)
}
