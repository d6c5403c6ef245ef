use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_service::api::router;
use todo_service::config::DbConfig;
use todo_service::db::{self, PgTodoStore};
use todo_service::state::AppState;

const PORT: u16 = 9010;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "todo_service=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!("fatal: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = DbConfig::from_env()?;
    let pool = db::connect(&config).await?;
    db::ensure_schema(&pool).await?;

    let state = AppState {
        store: Arc::new(PgTodoStore::new(pool)),
    };
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], PORT));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    // The signal handler flips the server into draining mode; the deadline
    // below bounds how long draining may take.
    let draining = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let draining = draining.clone();
        async move {
            shutdown_signal().await;
            draining.notify_one();
        }
    });

    tokio::select! {
        result = server.into_future() => result?,
        () = forced_stop(draining) => {}
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received, draining in-flight requests"),
        Err(err) => error!("failed to listen for interrupt: {}", err),
    }
}

async fn forced_stop(draining: Arc<Notify>) {
    draining.notified().await;
    tokio::time::sleep(SHUTDOWN_GRACE).await;
    warn!(
        "grace period of {:?} elapsed, stopping with requests still in flight",
        SHUTDOWN_GRACE
    );
}
