use tokio_util::sync::CancellationToken;

pub mod axum;

/// A long-running listener owned by the application.
#[async_trait::async_trait]
pub trait Server {
    type Error;

    /// Binds and serves until the listener fails or the cancel token fires.
    /// A bind failure is returned immediately; nothing is retried.
    async fn serve(&mut self) -> Result<(), Self::Error>;

    fn cancel_token(&self) -> CancellationToken;
}
