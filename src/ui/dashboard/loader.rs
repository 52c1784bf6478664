use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{error, info};

use paddock::dataset::{Dataset, DirectorySource, load_blocking};
use paddock::errors::PaddockError;

pub(crate) type LoadResult = Result<Dataset, PaddockError>;

/// Load the dataset from `data_dir` on a background thread. The result arrives on the
/// returned channel exactly once.
pub(crate) fn spawn_load(data_dir: PathBuf) -> Receiver<LoadResult> {
    let (load_tx, load_rx) = mpsc::channel::<LoadResult>();
    thread::spawn(move || {
        info!("Loading dataset from {:?}", data_dir);
        let result = load_blocking(&DirectorySource::new(&data_dir));
        if let Err(e) = &result {
            error!("Failed to load dataset from {:?}: {}", data_dir, e);
        }
        // the receiver is gone if the window was closed mid-load
        let _ = load_tx.send(result);
    });
    load_rx
}
