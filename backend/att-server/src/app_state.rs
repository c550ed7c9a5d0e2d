use att_auth::AuthorizationPipeline;
use att_db::{AttendanceLedger, LectureRepository, StudentRepository};
use att_token::ProofTokenCodec;

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared, immutable handles passed to every handler.
///
/// Collaborators are injected at construction; nothing here is mutated
/// per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub pipeline: Arc<AuthorizationPipeline>,
    pub tokens: ProofTokenCodec,
    pub ledger: AttendanceLedger,
    pub lectures: LectureRepository,
    pub students: StudentRepository,
    /// Bound applied to each ledger call
    pub call_timeout: Duration,
    /// Whole-request bound enforced by the router
    pub request_timeout: Duration,
    pub login_url: String,
    /// Present when a Prometheus recorder was installed
    pub metrics: Option<PrometheusHandle>,
}
