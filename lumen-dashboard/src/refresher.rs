//! Board refresher
//!
//! Re-derives every pipeline on a fixed interval and publishes the result
//! through a watch channel, so elapsed times keep moving and readers always
//! see a board no older than one interval.

use lumen_core::domain::display::DisplayDescriptor;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::service::DashboardService;

pub type Board = Vec<DisplayDescriptor>;

/// Handle to the running refresh task
///
/// The task stops on [`Refresher::shutdown`] or when the handle is dropped.
pub struct Refresher {
    service: DashboardService,
    board_tx: watch::Sender<Board>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Refresher {
    /// Spawns the refresh loop. The first refresh happens immediately.
    pub fn spawn(service: DashboardService, interval: Duration) -> Self {
        let (board_tx, _) = watch::channel(Vec::new());
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let handle = tokio::spawn(Self::run(
            service.clone(),
            board_tx.clone(),
            interval,
            shutdown_rx,
        ));

        Self {
            service,
            board_tx,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Receiver that observes every published board
    pub fn subscribe(&self) -> watch::Receiver<Board> {
        self.board_tx.subscribe()
    }

    /// Re-derives and publishes immediately, outside the schedule
    pub async fn refresh_now(&self) -> Board {
        let board = self.service.board().await;
        self.board_tx.send_replace(board.clone());
        board
    }

    /// Stops the loop and waits for it to exit
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Refresh task panicked: {}", e);
            }
        }
    }

    async fn run(
        service: DashboardService,
        board_tx: watch::Sender<Board>,
        interval: Duration,
        mut shutdown_rx: oneshot::Receiver<()>,
    ) {
        info!("Starting board refresher (interval: {:?})", interval);

        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = ticker.tick() => {
                    let board = service.board().await;
                    debug!("Refreshed board with {} pipeline(s)", board.len());
                    board_tx.send_replace(board);
                }
            }
        }

        info!("Board refresher stopped");
    }
}

impl Drop for Refresher {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
