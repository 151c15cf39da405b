use futures::{stream::FuturesUnordered, StreamExt};
use tokio::signal::unix::{signal, SignalKind};

use crate::server::Server;

/// Owns the process's servers and drives them until they finish, a signal
/// arrives, or one of them fails.
#[derive(Default)]
pub struct Application {
    servers: Vec<Box<dyn Server<Error = anyhow::Error>>>,
}

impl Application {
    pub fn new() -> Self {
        Application::default()
    }

    pub fn server(mut self, srv: impl Server<Error = anyhow::Error> + 'static) -> Application {
        self.servers.push(Box::new(srv));
        self
    }

    /// Runs every registered server. SIGTERM/SIGINT cancel all of them; a
    /// server error cancels the rest and is returned once they have stopped.
    pub async fn serve_all(mut self) -> anyhow::Result<()> {
        let cancel_tokens = self
            .servers
            .iter()
            .map(|srv| srv.cancel_token())
            .collect::<Vec<_>>();

        let signal_tokens = cancel_tokens.clone();
        let signal_handle = tokio::spawn(async move {
            let mut sigterm = signal(SignalKind::terminate()).unwrap();
            let mut sigint = signal(SignalKind::interrupt()).unwrap();

            tokio::select! {
                _ = sigterm.recv() => {},
                _ = sigint.recv() => {},
            }
            signal_tokens.iter().for_each(|token| token.cancel());
        });

        let mut serving = self
            .servers
            .iter_mut()
            .map(|srv| srv.serve())
            .collect::<FuturesUnordered<_>>();

        let mut first_error = None;
        while let Some(res) = serving.next().await {
            if let Err(err) = res {
                cancel_tokens.iter().for_each(|token| token.cancel());
                first_error.get_or_insert(err);
            }
        }
        drop(serving);

        signal_handle.abort();
        let _ = signal_handle.await;

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
