use dotenvy::dotenv;
use tracing::info;

use keygate::logging::init_tracing;
use keygate::router::init_router;
use keygate::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    let app = init_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listener");
    info!("Keygate listening on http://0.0.0.0:{port}");
    axum::serve(listener, app).await.expect("server error");
}
