//! Simulated backend for offline development.
//!
//! Every operation waits for a fixed, operation-specific delay and then
//! fabricates its answer from the arguments, the clock and canned fixtures.
//! Only `authenticate` touches state: the user repository.

pub mod fixtures;
mod users;

use std::rc::Rc;
use std::time::Duration;

use chrono::{NaiveDate, Timelike};
use rand::Rng;
use shared::{
    ApiResponse, AuthRequest, AuthenticatedUser, DailyCompletion, DailyPlan, DashboardData,
    HealthReportInput, LoginRequest, RegisterRequest, Reminder, ReminderFilter, ReportSummary,
    Statistics, StatisticsPeriod, SubmittedReport, TaskCompletion, UpdateProfileRequest,
    UserProfile, UserRecord,
};

use crate::clock::Clock;
use crate::error::{failure_response, ClientError};

pub use users::{
    InMemoryUserRepository, LocalStorageUserRepository, UserRepository, USERS_STORAGE_KEY,
};

const MIN_USERNAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 3;
/// Days shown in the completion chart, whatever the period.
const DISPLAYED_DAYS: usize = 7;

const AUTH_DELAY: Duration = Duration::from_millis(500);
const PROFILE_DELAY: Duration = Duration::from_millis(300);
const ACK_DELAY: Duration = Duration::from_millis(150);
const SUBMIT_REPORT_DELAY: Duration = Duration::from_millis(1000);
const READ_LIST_DELAY: Duration = Duration::from_millis(300);
const READ_DELAY: Duration = Duration::from_millis(500);

const WELCOME_BACK_MESSAGE: &str = "Login successful, welcome back!";
const NEW_USER_MESSAGE: &str = "New user registered automatically, welcome to HealthSmart!";

pub struct MockBackend {
    users: Rc<dyn UserRepository>,
    clock: Rc<dyn Clock>,
}

impl MockBackend {
    pub fn new(users: Rc<dyn UserRepository>, clock: Rc<dyn Clock>) -> Self {
        Self { users, clock }
    }

    async fn pause(&self, operation: &str, delay: Duration) {
        log::debug!("simulating {} ({} ms)", operation, delay.as_millis());
        self.clock.sleep(delay).await;
    }

    /// Logs in a known username or registers a new one.
    ///
    /// Returning users are not password-checked.
    pub async fn authenticate(&self, request: AuthRequest) -> ApiResponse<AuthenticatedUser> {
        self.pause("authenticate", AUTH_DELAY).await;
        match self.resolve_user(request) {
            Ok(user) => ApiResponse::success(user),
            Err(err) => failure_response("authenticate", err),
        }
    }

    fn resolve_user(&self, request: AuthRequest) -> Result<AuthenticatedUser, ClientError> {
        if request.username.chars().count() < MIN_USERNAME_LEN {
            return Err(ClientError::Validation(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LEN
            )));
        }
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ClientError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        if let Some(user) = self.users.find_by_username(&request.username)? {
            return Ok(AuthenticatedUser {
                user,
                is_new_user: false,
                message: WELCOME_BACK_MESSAGE.to_string(),
            });
        }

        let nickname = request
            .nickname
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| request.username.clone());
        let email = request
            .email
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("{}@example.com", request.username));
        let user = UserRecord {
            user_id: self.clock.now().timestamp_millis(),
            username: request.username,
            nickname,
            email,
        };

        self.users.append(user.clone())?;
        log::info!("Registered simulated user {} ({})", user.username, user.user_id);

        Ok(AuthenticatedUser {
            user,
            is_new_user: true,
            message: NEW_USER_MESSAGE.to_string(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> ApiResponse<UserRecord> {
        self.pause("login", AUTH_DELAY).await;
        if request.username.is_empty() || request.password.chars().count() < MIN_PASSWORD_LEN {
            return failure_response(
                "login",
                ClientError::Validation("Invalid username or password".to_string()),
            );
        }

        ApiResponse::success(UserRecord {
            user_id: 1,
            nickname: request.username.clone(),
            email: format!("{}@example.com", request.username),
            username: request.username,
        })
    }

    pub async fn register(&self, request: RegisterRequest) -> ApiResponse<UserRecord> {
        self.pause("register", AUTH_DELAY).await;
        ApiResponse::success(UserRecord {
            user_id: rand::thread_rng().gen_range(0..1000),
            username: request.username,
            nickname: request.nickname,
            email: request.email,
        })
    }

    pub async fn get_user_profile(&self, user_id: i64) -> ApiResponse<UserProfile> {
        self.pause("get_user_profile", PROFILE_DELAY).await;
        ApiResponse::success(fixtures::demo_profile(user_id))
    }

    pub async fn update_profile(&self, _request: UpdateProfileRequest) -> ApiResponse<()> {
        self.pause("update_profile", ACK_DELAY).await;
        ApiResponse::ack("Profile updated")
    }

    pub async fn submit_health_report(&self, report: HealthReportInput) -> ApiResponse<SubmittedReport> {
        self.pause("submit_health_report", SUBMIT_REPORT_DELAY).await;
        let bmi = report
            .bmi()
            .map(|bmi| format!("{:.1}", bmi))
            .unwrap_or_else(|| "--".to_string());

        ApiResponse::success(SubmittedReport {
            report_id: rand::thread_rng().gen_range(0..1000),
            bmi,
            report_month: report.report_month,
            submitted_at: None,
            message: Some("Report submitted".to_string()),
        })
    }

    pub async fn get_health_reports(&self, _user_id: i64) -> ApiResponse<Vec<ReportSummary>> {
        self.pause("get_health_reports", READ_LIST_DELAY).await;
        ApiResponse::success(fixtures::report_history())
    }

    pub async fn generate_plan(&self, _user_id: i64, _report_id: i64) -> ApiResponse<()> {
        self.pause("generate_plan", ACK_DELAY).await;
        ApiResponse::ack("Plan generated")
    }

    pub async fn get_daily_plan(
        &self,
        _user_id: i64,
        date: NaiveDate,
    ) -> ApiResponse<Option<DailyPlan>> {
        self.pause("get_daily_plan", READ_DELAY).await;
        ApiResponse::success(Some(fixtures::daily_plan(date, self.clock.now().hour())))
    }

    pub async fn get_dashboard_data(&self, _user_id: i64) -> ApiResponse<DashboardData> {
        self.pause("get_dashboard_data", READ_DELAY).await;
        ApiResponse::success(fixtures::dashboard())
    }

    pub async fn get_statistics(
        &self,
        _user_id: i64,
        period: &str,
    ) -> ApiResponse<Statistics> {
        self.pause("get_statistics", READ_DELAY).await;
        let period = StatisticsPeriod::from(period);

        let mut rng = rand::thread_rng();
        let series: Vec<DailyCompletion> = (1..=period.days())
            .map(|day| DailyCompletion {
                label: format!("Day {}", day),
                completion: rng.gen_range(60..100),
            })
            .collect();
        let skipped = series.len().saturating_sub(DISPLAYED_DAYS);
        let daily_completion = series.into_iter().skip(skipped).collect();

        ApiResponse::success(fixtures::statistics(daily_completion))
    }

    pub async fn get_reminders(
        &self,
        _user_id: i64,
        filter: ReminderFilter,
    ) -> ApiResponse<Vec<Reminder>> {
        self.pause("get_reminders", READ_LIST_DELAY).await;
        let reminders = fixtures::reminders()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        ApiResponse::success(reminders)
    }

    pub async fn complete_task(&self, _task_id: i64, _data: TaskCompletion) -> ApiResponse<()> {
        self.pause("complete_task", ACK_DELAY).await;
        ApiResponse::ack("Task completed")
    }
}
