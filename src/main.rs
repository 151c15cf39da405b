use hello_server::{
    application::Application, config::Config, routes, server::axum::AxumServerBuilder,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env()?;

    let srv = AxumServerBuilder::default()
        .bind(config.listen_addr())
        .router(routes::app())
        .build()?;

    Application::new().server(srv).serve_all().await
}
