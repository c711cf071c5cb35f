//! Unread notification badge poller.

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use super::scheduler::Job;
use crate::api::ApiClient;

/// Polls the unread-count endpoint and publishes the value to whoever
/// renders the badge. A failed poll publishes nothing; subscribers keep
/// showing the last known count.
pub struct UnreadCountJob {
    api: ApiClient,
    user_id: String,
    interval: Duration,
    count_tx: watch::Sender<u32>,
}

impl UnreadCountJob {
    /// Returns the job and the receiver for the published counts. The
    /// receiver starts at zero until the first successful poll.
    pub fn new(
        api: ApiClient,
        user_id: impl Into<String>,
        interval: Duration,
    ) -> (Self, watch::Receiver<u32>) {
        let (count_tx, count_rx) = watch::channel(0);
        (
            Self {
                api,
                user_id: user_id.into(),
                interval,
                count_tx,
            },
            count_rx,
        )
    }
}

#[async_trait::async_trait]
impl Job for UnreadCountJob {
    fn name(&self) -> &'static str {
        "unread_count_poll"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn execute(&self) -> Result<(), String> {
        // A failure propagates to the scheduler, which logs it; nothing
        // is published and the badge keeps its last value.
        match self.api.unread_count(&self.user_id).await {
            Ok(count) => {
                debug!(count, "Unread count polled");
                let _ = self.count_tx.send(count);
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        }
    }
}
