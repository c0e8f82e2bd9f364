#[tokio::main]
async fn main() {
    dogpound_observability::init();

    let config = dogpound_api::config::ApiConfig::from_env();
    let app = dogpound_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
