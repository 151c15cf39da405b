use axum::{response::Html, routing::get, Router};

const GREETING: &str = "<h1>Hello World!</h1>";

/// Builds the application router: the root path answers with a static HTML
/// greeting, every other path falls through to the default 404.
pub fn app() -> Router {
    Router::new().route("/", get(root))
}

async fn root() -> Html<&'static str> {
    Html(GREETING)
}
