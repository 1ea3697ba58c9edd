use crate::{
    modules,
    types::{Config, Context, ToContext},
};
use axum::{
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);

        Self::with_context(ctx)
    }

    pub fn with_context(ctx: Arc<Context>) -> Self {
        let router = Router::new()
            .merge(modules::get_router())
            .with_state(ctx.clone())
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([Method::OPTIONS, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_origin(cors::Any),
            );

        Self { ctx, router }
    }

    #[cfg(test)]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn serve(self) {
        let listener = TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port))
            .await
            .expect("Failed to bind listener");

        tracing::info!("App is running on {}:{}", self.ctx.app.host, self.ctx.app.port);

        axum::serve(listener, self.router)
            .await
            .expect("Server stopped unexpectedly");
    }
}
