pub mod transport;

use std::rc::Rc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use shared::{
    ApiResponse, AuthRequest, AuthenticatedUser, DailyPlan, DashboardData, GeneratePlanRequest,
    HealthReportInput, LoginRequest, RegisterRequest, Reminder, ReminderFilter, ReportSummary,
    Statistics, SubmittedReport, TaskCompletion, UpdateProfileRequest, UserProfile, UserRecord,
};

use crate::clock::BrowserClock;
use crate::config::{ApiMode, ClientConfig};
use crate::error::{failure_response, ClientError, TransportError};
use crate::mock::{LocalStorageUserRepository, MockBackend};

pub use transport::{GlooTransport, HttpMethod, HttpRequest, Transport};

/// HealthSmart backend client.
///
/// Each operation resolves to an [`ApiResponse`]; failures never surface as
/// `Err` or panics. Whether calls go over HTTP or to the simulated backend is
/// fixed when the client is built.
pub struct ApiClient {
    backend: Backend,
}

enum Backend {
    Live(LiveBackend),
    Mock(MockBackend),
}

struct LiveBackend {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl LiveBackend {
    async fn request<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: Result<HttpRequest, TransportError>,
    ) -> ApiResponse<T> {
        match self.exchange(request).await {
            Ok(response) => response,
            Err(err) => failure_response(operation, err),
        }
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        request: Result<HttpRequest, TransportError>,
    ) -> Result<ApiResponse<T>, ClientError> {
        let request = request?;
        let url = format!("{}{}", self.base_url, request.path);
        let body = self.transport.send(url, request).await?;
        Ok(ApiResponse::from_json(&body)?)
    }
}

impl ApiClient {
    /// Builds the browser client for the configured mode.
    pub fn new(config: ClientConfig) -> Self {
        match config.mode {
            ApiMode::Live => {
                log::info!("Using HealthSmart API at {}", config.base_url);
                Self::live(&config.base_url, GlooTransport)
            }
            ApiMode::Mock => {
                log::info!("Using simulated HealthSmart API");
                Self::mock(MockBackend::new(
                    Rc::new(LocalStorageUserRepository::default()),
                    Rc::new(BrowserClock),
                ))
            }
        }
    }

    pub fn live(base_url: &str, transport: impl Transport + 'static) -> Self {
        Self {
            backend: Backend::Live(LiveBackend {
                base_url: base_url.trim_end_matches('/').to_string(),
                transport: Box::new(transport),
            }),
        }
    }

    pub fn mock(backend: MockBackend) -> Self {
        Self {
            backend: Backend::Mock(backend),
        }
    }

    pub fn mode(&self) -> ApiMode {
        match self.backend {
            Backend::Live(_) => ApiMode::Live,
            Backend::Mock(_) => ApiMode::Mock,
        }
    }

    // User endpoints
    pub async fn authenticate(&self, request: AuthRequest) -> ApiResponse<AuthenticatedUser> {
        match &self.backend {
            Backend::Mock(mock) => mock.authenticate(request).await,
            Backend::Live(live) => {
                live.request("authenticate", HttpRequest::post("/user/auth", &request))
                    .await
            }
        }
    }

    pub async fn login(&self, request: LoginRequest) -> ApiResponse<UserRecord> {
        match &self.backend {
            Backend::Mock(mock) => mock.login(request).await,
            Backend::Live(live) => {
                live.request("login", HttpRequest::post("/user/login", &request))
                    .await
            }
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> ApiResponse<UserRecord> {
        match &self.backend {
            Backend::Mock(mock) => mock.register(request).await,
            Backend::Live(live) => {
                live.request("register", HttpRequest::post("/user/register", &request))
                    .await
            }
        }
    }

    pub async fn get_user_profile(&self, user_id: i64) -> ApiResponse<UserProfile> {
        match &self.backend {
            Backend::Mock(mock) => mock.get_user_profile(user_id).await,
            Backend::Live(live) => {
                live.request(
                    "get_user_profile",
                    Ok(HttpRequest::get(format!("/user/{}", user_id))),
                )
                .await
            }
        }
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) -> ApiResponse<()> {
        match &self.backend {
            Backend::Mock(mock) => mock.update_profile(request).await,
            Backend::Live(live) => {
                live.request(
                    "update_profile",
                    HttpRequest::put(format!("/user/{}", request.user_id), &request),
                )
                .await
            }
        }
    }

    // Health report endpoints
    pub async fn submit_health_report(
        &self,
        report: HealthReportInput,
    ) -> ApiResponse<SubmittedReport> {
        match &self.backend {
            Backend::Mock(mock) => mock.submit_health_report(report).await,
            Backend::Live(live) => {
                live.request(
                    "submit_health_report",
                    HttpRequest::post("/health-report", &report),
                )
                .await
            }
        }
    }

    pub async fn get_health_reports(&self, user_id: i64) -> ApiResponse<Vec<ReportSummary>> {
        match &self.backend {
            Backend::Mock(mock) => mock.get_health_reports(user_id).await,
            Backend::Live(live) => {
                live.request(
                    "get_health_reports",
                    Ok(HttpRequest::get(format!("/health-report/user/{}", user_id))),
                )
                .await
            }
        }
    }

    // Plan endpoints
    pub async fn generate_plan(&self, user_id: i64, report_id: i64) -> ApiResponse<()> {
        match &self.backend {
            Backend::Mock(mock) => mock.generate_plan(user_id, report_id).await,
            Backend::Live(live) => {
                let body = GeneratePlanRequest { user_id, report_id };
                live.request("generate_plan", HttpRequest::post("/plan/generate", &body))
                    .await
            }
        }
    }

    /// `None` when the backend has no plan for that day.
    pub async fn get_daily_plan(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> ApiResponse<Option<DailyPlan>> {
        match &self.backend {
            Backend::Mock(mock) => mock.get_daily_plan(user_id, date).await,
            Backend::Live(live) => {
                let request = HttpRequest::get("/plan/daily")
                    .query("userId", user_id)
                    .query("date", date.format("%Y-%m-%d"));
                live.request("get_daily_plan", Ok(request)).await
            }
        }
    }

    // Analytics endpoints
    pub async fn get_dashboard_data(&self, user_id: i64) -> ApiResponse<DashboardData> {
        match &self.backend {
            Backend::Mock(mock) => mock.get_dashboard_data(user_id).await,
            Backend::Live(live) => {
                let request = HttpRequest::get("/analytics/dashboard").query("userId", user_id);
                live.request("get_dashboard_data", Ok(request)).await
            }
        }
    }

    /// `period` is sent as given; the simulation reads it through
    /// [`shared::StatisticsPeriod`].
    pub async fn get_statistics(&self, user_id: i64, period: &str) -> ApiResponse<Statistics> {
        match &self.backend {
            Backend::Mock(mock) => mock.get_statistics(user_id, period).await,
            Backend::Live(live) => {
                let request = HttpRequest::get("/analytics/statistics")
                    .query("userId", user_id)
                    .query("period", period);
                live.request("get_statistics", Ok(request)).await
            }
        }
    }

    // Reminder endpoints
    pub async fn get_reminders(
        &self,
        user_id: i64,
        filter: ReminderFilter,
    ) -> ApiResponse<Vec<Reminder>> {
        match &self.backend {
            Backend::Mock(mock) => mock.get_reminders(user_id, filter).await,
            Backend::Live(live) => {
                let request = HttpRequest::get("/reminders")
                    .query("userId", user_id)
                    .query("filter", filter.as_str());
                live.request("get_reminders", Ok(request)).await
            }
        }
    }

    // Task endpoints
    pub async fn complete_task(&self, task_id: i64, data: TaskCompletion) -> ApiResponse<()> {
        match &self.backend {
            Backend::Mock(mock) => mock.complete_task(task_id, data).await,
            Backend::Live(live) => {
                live.request(
                    "complete_task",
                    HttpRequest::post(format!("/task/{}/complete", task_id), &data),
                )
                .await
            }
        }
    }
}
