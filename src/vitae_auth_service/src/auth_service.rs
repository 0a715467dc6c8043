use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use vitae_application::AccessGate;
use vitae_axum::{
    require_auth,
    routes::{health, login, me, register},
};
use vitae_core::{CredentialCodec, IdentityStore, TokenIssuer, TokenVerifier};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The authentication service: account registration, login and the gated
/// `/user/me` route.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService from its three collaborators.
    ///
    /// # Arguments
    /// * `identity_store` - Store for accounts (must be Clone)
    /// * `codec` - Password hasher and verifier (must be Clone)
    /// * `token_codec` - Bearer token issuer and verifier (must be Clone)
    ///
    /// Each route is given only the state it needs.
    pub fn new<S, C, T>(identity_store: S, codec: C, token_codec: T) -> Self
    where
        S: IdentityStore + Clone + 'static,
        C: CredentialCodec + Clone + 'static,
        T: TokenIssuer + TokenVerifier + Clone + 'static,
    {
        let protected = Router::new()
            .route("/user/me", get(me))
            .route_layer(from_fn_with_state(
                AccessGate::new(token_codec.clone()),
                require_auth::<T>,
            ));

        let router = Router::new()
            // Register needs the store and the codec
            .route("/auth/register", post(register::<S, C>))
            .with_state((identity_store.clone(), codec.clone()))
            // Login additionally issues a token
            .route("/auth/login", post(login::<S, C, T>))
            .with_state((identity_store, codec, token_codec))
            .route("/health", get(health))
            .merge(protected);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be served or nested.
    ///
    /// An empty `allowed_origins` list accepts any origin.
    pub fn as_router(mut self, allowed_origins: &[String]) -> Router {
        self.router = self.router.layer(cors_layer(allowed_origins));
        self.with_trace_layer().router
    }

    /// Serve on `listener` until Ctrl-C or SIGTERM.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: &[String],
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully");
}
