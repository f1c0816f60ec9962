use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::router;
use crate::store::FlagStore;

/// Runs the mock flag API on the given listener until `shutdown` resolves.
///
/// The store lives exactly as long as this future: every call gets a fresh,
/// empty one, which is what lets each test spin up an isolated server.
pub async fn serve<F>(listener: TcpListener, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = Arc::new(FlagStore::new());
    let app = router::router(store);

    tracing::info!("listening on {:?}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .unwrap()
}
