use std::{
    fs::{self, OpenOptions},
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::{Parser, ValueEnum};
use rusqlite::Connection;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_tracker::{
    AppState, build_router, graceful_shutdown, logging_middleware,
    stores::{FileStore, KeyValueStore, MemoryStore, SqliteStore},
};

/// The file name of the SQLite database inside the data directory.
const SQLITE_FILE_NAME: &str = "finance_tracker.db";

/// Where transactions are kept.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreKind {
    /// Keep transactions in memory, they are lost when the server stops.
    Memory,
    /// Keep transactions in a JSON file in the data directory.
    File,
    /// Keep transactions in a SQLite database in the data directory.
    Sqlite,
}

/// The web server for the personal finance tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to keep transactions.
    #[arg(long, value_enum, default_value_t = StoreKind::File)]
    store: StoreKind,

    /// The directory for the `file` and `sqlite` stores.
    #[arg(long, default_value = "data")]
    data_path: PathBuf,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    ///
    /// Used to decide which month is the current month.
    #[arg(long, default_value = "Etc/UTC")]
    timezone: String,

    /// The file to write debug logs to.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging(&args.log_path);

    let store = open_store(args.store, &args.data_path);
    let state = AppState::new(store, &args.timezone).expect("Could not create app state");

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Could not start server");
}

fn open_store(kind: StoreKind, data_path: &Path) -> Box<dyn KeyValueStore> {
    match kind {
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory store, transactions will be lost on shutdown");
            Box::new(MemoryStore::new())
        }
        StoreKind::File => {
            tracing::info!("Keeping transactions in {}", data_path.display());
            Box::new(FileStore::new(data_path))
        }
        StoreKind::Sqlite => {
            fs::create_dir_all(data_path).expect("Could not create data directory");
            let db_path = data_path.join(SQLITE_FILE_NAME);
            tracing::info!("Keeping transactions in {}", db_path.display());

            let connection = Connection::open(&db_path).expect("Could not open database");
            Box::new(SqliteStore::new(connection).expect("Could not initialize database"))
        }
    }
}

fn setup_logging(log_path: &Path) {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
