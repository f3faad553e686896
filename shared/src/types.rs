use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub email: String,
}

/// Unified login-or-register request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(flatten)]
    pub user: UserRecord,
    #[serde(default)]
    pub is_new_user: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

/// Partial profile update; only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

// ============================================================================
// Health Report Types
// ============================================================================

/// Monthly health questionnaire. Height is in centimetres, weight in kilograms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportInput {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_month: Option<String>,
    pub height: f64,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systolic_pressure: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diastolic_pressure: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours_avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

impl HealthReportInput {
    /// Body mass index, `None` when the height is not positive.
    pub fn bmi(&self) -> Option<f64> {
        if self.height <= 0.0 {
            return None;
        }
        let meters = self.height / 100.0;
        Some(self.weight / (meters * meters))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedReport {
    pub report_id: i64,
    /// One-decimal display text. The backend may send a bare number.
    #[serde(deserialize_with = "display_decimal")]
    pub bmi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub report_id: i64,
    #[serde(default, alias = "reportMonth")]
    pub month: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
}

fn display_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => format!("{value:.1}"),
        NumberOrText::Text(text) => text,
    })
}

// ============================================================================
// Plan Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub user_id: i64,
    pub report_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseIntensity {
    Low,
    Medium,
    High,
}

/// Today's plan. Every field may be missing from the backend's answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyPlan {
    #[serde(alias = "taskDate", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(alias = "calorieGoal")]
    pub daily_calorie_goal: u32,
    pub meal_breakfast: String,
    pub meal_lunch: String,
    pub meal_dinner: String,
    pub meal_snacks: String,
    pub exercise_type: String,
    pub exercise_duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_intensity: Option<ExerciseIntensity>,
    pub exercise_description: String,
    pub reminders: Vec<String>,
}

// ============================================================================
// Analytics Types
// ============================================================================

/// Category of a today-task. Reminders carry the same names as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Meal,
    Exercise,
    Encouragement,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Meal => "meal",
            ActivityKind::Exercise => "exercise",
            ActivityKind::Encouragement => "encouragement",
            ActivityKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieProgress {
    pub current: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub total: u32,
    pub best: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub weight: f64,
    pub sleep: f64,
    pub exercise: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayTask {
    pub task_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub completed: bool,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub calorie: CalorieProgress,
    pub macros: Macros,
    pub streak: Streak,
    pub health_metrics: HealthMetrics,
    pub today_tasks: Vec<TodayTask>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatisticsPeriod {
    Week,
    Month,
    Quarter,
}

impl StatisticsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticsPeriod::Week => "week",
            StatisticsPeriod::Month => "month",
            StatisticsPeriod::Quarter => "quarter",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            StatisticsPeriod::Week => 7,
            StatisticsPeriod::Month => 30,
            StatisticsPeriod::Quarter => 90,
        }
    }
}

/// Anything that is not exactly `week` or `month` is treated as a quarter.
impl From<&str> for StatisticsPeriod {
    fn from(s: &str) -> Self {
        match s {
            "week" => StatisticsPeriod::Week,
            "month" => StatisticsPeriod::Month,
            _ => StatisticsPeriod::Quarter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCompletion {
    pub label: String,
    pub completion: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub completion_rate: f64,
    pub planned_calories: u32,
    pub actual_calories: u32,
    pub calorie_deviation: i32,
    pub planned_exercise: u32,
    pub actual_exercise: u32,
    pub daily_completion: Vec<DailyCompletion>,
}

// ============================================================================
// Reminder Types
// ============================================================================

/// A notification. `kind` keeps the backend's `type` text as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub unread: bool,
}

impl Reminder {
    pub fn is_kind(&self, kind: ActivityKind) -> bool {
        self.kind == kind.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderFilter {
    All,
    Unread,
    Kind(String),
}

impl ReminderFilter {
    pub fn as_str(&self) -> &str {
        match self {
            ReminderFilter::All => "all",
            ReminderFilter::Unread => "unread",
            ReminderFilter::Kind(kind) => kind.as_str(),
        }
    }

    pub fn matches(&self, reminder: &Reminder) -> bool {
        match self {
            ReminderFilter::All => true,
            ReminderFilter::Unread => reminder.unread,
            ReminderFilter::Kind(kind) => reminder.kind == *kind,
        }
    }
}

impl From<&str> for ReminderFilter {
    fn from(s: &str) -> Self {
        match s {
            "all" => ReminderFilter::All,
            "unread" => ReminderFilter::Unread,
            other => ReminderFilter::Kind(other.to_string()),
        }
    }
}

// ============================================================================
// Task Types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_calorie_intake: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_exercise_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
