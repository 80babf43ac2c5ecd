use async_trait::async_trait;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Returned by [`OrCancelExt::or_cancel`] when the token fired before the
/// wrapped future completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelErr {
    Cancelled,
}

impl std::fmt::Display for CancelErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("operation cancelled")
    }
}

impl std::error::Error for CancelErr {}

/// Races a future against a [`CancellationToken`].
///
/// The wrapped future is dropped as soon as the token is cancelled, so any
/// work it had in flight (an HTTP request, a lock acquisition) is abandoned
/// without producing a value.
#[async_trait]
pub trait OrCancelExt: Sized {
    type Output;

    async fn or_cancel(self, token: &CancellationToken) -> Result<Self::Output, CancelErr>;
}

#[async_trait]
impl<F> OrCancelExt for F
where
    F: Future + Send,
    F::Output: Send,
{
    type Output = F::Output;

    async fn or_cancel(self, token: &CancellationToken) -> Result<Self::Output, CancelErr> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(CancelErr::Cancelled),
            res = self => Ok(res),
        }
    }
}
