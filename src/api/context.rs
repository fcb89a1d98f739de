//! Per-call cancellation and deadlines.
//!
//! Every API call takes a [`RequestContext`]. A context can carry a
//! [`CancellationToken`], a deadline, or both; whichever fires first aborts the
//! in-flight request and becomes the call's error.
//!
//! ```rust,ignore
//! use smartme::api::RequestContext;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let ctx = RequestContext::background()
//!     .with_cancellation(token.clone())
//!     .with_timeout(Duration::from_secs(2));
//!
//! // From another task: token.cancel();
//! let devices = client.get_devices(&ctx).await?;
//! ```

use std::future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::api::error::ApiError;

/// Cancellation signal and optional deadline for a single API call.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Abort the call when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Abort the call at `deadline`. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Abort the call once `timeout` has elapsed from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The context's error if it is already done.
    ///
    /// Cancellation takes precedence over an expired deadline.
    pub fn err(&self) -> Option<ApiError> {
        if self.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Some(ApiError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ApiError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves with the context's error once it is cancelled or its deadline passes.
    ///
    /// Never resolves for a background context.
    pub async fn done(&self) -> ApiError {
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => ApiError::Cancelled,
            _ = expired => ApiError::DeadlineExceeded,
        }
    }
}
