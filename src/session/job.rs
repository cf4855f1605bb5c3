use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::ai::{search, SearchConfig, SearchMetrics};
use crate::game::{GameState, Player};

/// Result sent back from the search thread.
#[derive(Debug, Clone)]
pub struct SearchReply {
    pub column: Option<usize>,
    pub metrics: SearchMetrics,
}

/// Poll result of a running job.
#[derive(Debug)]
pub enum JobStatus {
    Running,
    Done(SearchReply),
    /// The search thread went away without replying.
    Lost,
}

/// One `search` call running on its own thread.
///
/// The job owns its copy of the position, so the caller's state can never
/// be aliased by an in-flight search.
pub struct SearchJob {
    rx: Receiver<SearchReply>,
    handle: Option<JoinHandle<()>>,
}

impl SearchJob {
    pub fn spawn(state: GameState, player: Player, config: SearchConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let (column, metrics) = search(&state, player, &config);
            // receiver dropped means the game was abandoned
            let _ = tx.send(SearchReply { column, metrics });
        });
        SearchJob {
            rx,
            handle: Some(handle),
        }
    }

    /// Non-blocking check for the result.
    pub fn poll(&mut self) -> JobStatus {
        match self.rx.try_recv() {
            Ok(reply) => {
                self.join();
                JobStatus::Done(reply)
            }
            Err(TryRecvError::Empty) => JobStatus::Running,
            Err(TryRecvError::Disconnected) => {
                self.join();
                JobStatus::Lost
            }
        }
    }

    /// Block until the search finishes.
    pub fn wait(mut self) -> Option<SearchReply> {
        let reply = self.rx.recv().ok();
        self.join();
        reply
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("search thread panicked");
            }
        }
    }
}
