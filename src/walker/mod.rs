mod extension;

pub use extension::extension_key;

use crate::error::{Error, Result};
use crate::tally::ExtensionTally;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, error};
use walkdir::WalkDir;

/// Running count of visited entries. The walk is the only writer; the
/// progress ticker reads it and may see a slightly stale value.
#[derive(Debug, Default)]
pub struct ProgressState {
    visited: AtomicUsize,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) {
        self.visited.fetch_add(1, Ordering::Release);
    }

    pub fn visited(&self) -> usize {
        self.visited.load(Ordering::Acquire)
    }
}

/// State threaded through one traversal.
#[derive(Debug, Default)]
pub struct TraversalContext {
    pub tally: ExtensionTally,
    pub progress: Arc<ProgressState>,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, extension: &str) {
        self.tally.increment(extension);
        self.progress.record();
    }

    pub fn visited(&self) -> usize {
        self.progress.visited()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WalkOptions {
    /// Echo each visited path to `out` as it is counted.
    pub print_paths: bool,
}

/// Fails with [`Error::Root`] unless `root` is a directory we can list.
pub fn check_root(root: &Path) -> Result<()> {
    let root_error = |source: io::Error| Error::Root {
        path: root.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root).map_err(root_error)?;
    if !metadata.is_dir() {
        return Err(root_error(io::Error::other("not a directory")));
    }
    fs::read_dir(root).map_err(root_error)?;
    Ok(())
}

/// Depth-first walk of everything below `root`, counting each file and
/// directory by extension. The root itself is not counted.
///
/// A root that is missing, not a directory, or unreadable aborts the walk
/// with [`Error::Root`]. Any other entry that fails is logged and skipped;
/// a directory whose listing fails is not counted.
pub fn walk<W: Write>(
    root: &Path,
    options: &WalkOptions,
    ctx: &mut TraversalContext,
    out: &mut W,
) -> Result<()> {
    check_root(root)?;

    debug!("Walking {}", root.display());

    let mut tallier = Tallier::new(options, ctx, out);

    for entry_result in WalkDir::new(root).min_depth(1) {
        match entry_result {
            Ok(entry) => tallier.entry(entry.path(), entry.file_type().is_dir())?,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                if err.depth() == 0 {
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("cannot read directory"));
                    return Err(Error::Root { path, source });
                }
                match err.io_error() {
                    Some(io_err) => error!("{}: {}", path.display(), io_err),
                    None => error!("{}: {}", path.display(), err),
                }
                tallier.failed(&path)?;
            }
        }
    }

    tallier.finish()?;
    Ok(())
}

/// Counts entries in walk order. walkdir yields a directory before it
/// tries to list it, so each directory is held back until the next item
/// shows whether its listing failed.
struct Tallier<'a, W> {
    options: &'a WalkOptions,
    ctx: &'a mut TraversalContext,
    out: &'a mut W,
    pending_dir: Option<PathBuf>,
}

impl<'a, W: Write> Tallier<'a, W> {
    fn new(options: &'a WalkOptions, ctx: &'a mut TraversalContext, out: &'a mut W) -> Self {
        Self {
            options,
            ctx,
            out,
            pending_dir: None,
        }
    }

    fn entry(&mut self, path: &Path, is_dir: bool) -> io::Result<()> {
        self.flush_pending()?;
        if is_dir {
            self.pending_dir = Some(path.to_path_buf());
            Ok(())
        } else {
            self.record(path)
        }
    }

    fn failed(&mut self, path: &Path) -> io::Result<()> {
        if self.pending_dir.as_deref() == Some(path) {
            self.pending_dir = None;
            return Ok(());
        }
        self.flush_pending()
    }

    fn finish(mut self) -> io::Result<()> {
        self.flush_pending()
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        match self.pending_dir.take() {
            Some(dir) => self.record(&dir),
            None => Ok(()),
        }
    }

    fn record(&mut self, path: &Path) -> io::Result<()> {
        if self.options.print_paths {
            writeln!(self.out, "{}", path.display())?;
        }
        let name = path.file_name().unwrap_or(path.as_os_str());
        self.ctx.record(&extension_key(name));
        Ok(())
    }
}
