use crate::walker::ProgressState;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;

pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Background thread that writes the running visited count every
/// `interval` until [`ProgressTicker::finish`] is called.
pub struct ProgressTicker {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<io::Result<()>>,
}

impl ProgressTicker {
    pub fn spawn<W>(state: Arc<ProgressState>, interval: Duration, mut writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || -> io::Result<()> {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        writeln!(writer, "Files count: {}", state.visited())?;
                        writer.flush()?;
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        writeln!(writer, "File count: {}", state.visited())?;
                        writeln!(writer, "Done!")?;
                        return writer.flush();
                    }
                }
            }
        });

        Self { stop_tx, handle }
    }

    /// Signals the ticker to stop and waits for its final lines.
    pub fn finish(self) -> io::Result<()> {
        // Already gone only if the thread died on a write error, which join reports.
        let _ = self.stop_tx.send(());
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => {
                debug!("Progress thread panicked");
                Err(io::Error::other("progress thread panicked"))
            }
        }
    }
}
