//! Common test harness for pipeline integration tests.

use axum::extract::Request;
use axum::middleware::{self, Next};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use waitlist_client::{BackupList, SubmitClient};
use waitlist_proxy::{ProxyConfig, ProxyState};
use waitlist_sheet::{SheetState, SheetTable};

/// A running sheet store plus proxy, with enough handles to inspect
/// both sides from a test.
pub struct Pipeline {
    /// URL of the proxy's submission endpoint
    pub submit_url: String,
    /// URL of the sheet store root (write and read path)
    pub sheet_url: String,
    /// Direct handle on the table behind the sheet server
    pub sheet_state: SheetState,
    /// Number of requests the proxy's submission route has seen
    pub proxy_hits: Arc<AtomicUsize>,
    /// Owns the table and backup files for the test's lifetime
    pub dir: tempfile::TempDir,
}

impl Pipeline {
    /// A submission client pointed at this pipeline's proxy, with its
    /// backup list inside the test directory.
    pub fn client(&self) -> SubmitClient {
        let backup = BackupList::load(self.dir.path().join("emails.json")).unwrap();
        SubmitClient::new(&self.submit_url, backup).unwrap()
    }
}

async fn serve(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn(configured: bool) -> Pipeline {
    let dir = tempfile::tempdir().unwrap();
    let table = SheetTable::open(dir.path().join("signups.csv")).unwrap();
    let sheet_state: SheetState = Arc::new(Mutex::new(table));

    let sheet_addr = serve(waitlist_sheet::router(sheet_state.clone())).await;
    let sheet_url = format!("http://{sheet_addr}/");

    let config = if configured {
        ProxyConfig::new(sheet_url.clone())
    } else {
        ProxyConfig::unconfigured()
    };

    let proxy_hits = Arc::new(AtomicUsize::new(0));
    let counter = proxy_hits.clone();
    let proxy_router = waitlist_proxy::router(ProxyState::new(config).unwrap()).layer(
        middleware::from_fn(move |req: Request, next: Next| {
            if req.uri().path() == "/api/submit" {
                counter.fetch_add(1, Ordering::SeqCst);
            }
            async move { next.run(req).await }
        }),
    );
    let proxy_addr = serve(proxy_router).await;

    Pipeline {
        submit_url: format!("http://{proxy_addr}/api/submit"),
        sheet_url,
        sheet_state,
        proxy_hits,
        dir,
    }
}

/// Sheet store and proxy wired together.
pub async fn spawn_pipeline() -> Pipeline {
    spawn(true).await
}

/// Sheet store running, proxy started without a resolved sheet URL.
pub async fn spawn_unconfigured_pipeline() -> Pipeline {
    spawn(false).await
}
