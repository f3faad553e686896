//! Canned payloads for simulation mode.
//!
//! These are development fixtures for building UI without a backend. None of
//! the values, including the hour-dependent meal statuses, are business rules.

use chrono::NaiveDate;
use shared::{
    ActivityKind, CalorieProgress, DailyCompletion, DailyPlan, DashboardData, ExerciseIntensity,
    HealthMetrics, Macros, Reminder, ReportSummary, Statistics, Streak, TodayTask, UserProfile,
};

pub fn demo_profile(user_id: i64) -> UserProfile {
    UserProfile {
        user_id,
        username: "demo_user".to_string(),
        nickname: "Demo User".to_string(),
        email: "demo@healthsmart.com".to_string(),
        phone: Some("13800138000".to_string()),
        gender: Some("male".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
    }
}

pub fn report_history() -> Vec<ReportSummary> {
    vec![
        ReportSummary {
            report_id: 1,
            month: Some("2024-01".to_string()),
            weight: Some(70.0),
            bmi: Some(22.9),
        },
        ReportSummary {
            report_id: 2,
            month: Some("2024-02".to_string()),
            weight: Some(69.0),
            bmi: Some(22.5),
        },
    ]
}

/// Daily plan whose meal lines pretend to track the time of day.
///
/// Before 09:00 breakfast reads as eaten and lunch as pending, until 14:00
/// lunch reads as eaten, until 18:00 dinner reads as pending. Later hours keep
/// the plain menu.
pub fn daily_plan(date: NaiveDate, hour: u32) -> DailyPlan {
    let mut breakfast = "Oatmeal + eggs + milk";
    let mut lunch = "Brown rice + chicken breast + green salad";
    let mut dinner = "Steamed fish + stir-fried greens + purple sweet potato";

    if hour < 9 {
        breakfast = "Done: oatmeal, eggs, milk ✓";
        lunch = "Lunch pending";
    } else if hour < 14 {
        lunch = "Done: brown rice, chicken breast, green salad ✓";
    } else if hour < 18 {
        dinner = "Dinner pending";
    }

    DailyPlan {
        date: Some(date),
        daily_calorie_goal: 2000,
        meal_breakfast: breakfast.to_string(),
        meal_lunch: lunch.to_string(),
        meal_dinner: dinner.to_string(),
        meal_snacks: "Nuts + fruit".to_string(),
        exercise_type: "Aerobic".to_string(),
        exercise_duration: 45,
        exercise_intensity: Some(ExerciseIntensity::Medium),
        exercise_description: "Jog or walk briskly for 45 minutes to build cardio fitness and burn fat. Best about an hour after a meal.".to_string(),
        reminders: vec![
            "Drink plenty of water, at least 8 glasses a day".to_string(),
            "Keep a good posture and avoid sitting too long".to_string(),
            "You are in good shape today, keep it up!".to_string(),
        ],
    }
}

pub fn dashboard() -> DashboardData {
    DashboardData {
        calorie: CalorieProgress {
            current: 1650,
            target: 2000,
        },
        macros: Macros {
            protein: 85,
            carbs: 220,
            fat: 55,
        },
        streak: Streak {
            current: 7,
            total: 45,
            best: 15,
        },
        health_metrics: HealthMetrics {
            bmi: 22.5,
            weight: 70.0,
            sleep: 7.5,
            exercise: 45,
        },
        today_tasks: vec![
            today_task(1, "Breakfast: oatmeal + eggs", ActivityKind::Meal, true, "07:00-08:00"),
            today_task(2, "Lunch: brown rice + chicken breast", ActivityKind::Meal, true, "12:00-13:00"),
            today_task(3, "Exercise: 45 minute jog", ActivityKind::Exercise, false, "17:00-18:00"),
            today_task(4, "Dinner: steamed fish + greens", ActivityKind::Meal, false, "18:30-19:30"),
        ],
    }
}

fn today_task(task_id: i64, title: &str, kind: ActivityKind, completed: bool, time: &str) -> TodayTask {
    TodayTask {
        task_id,
        title: title.to_string(),
        kind,
        completed,
        time: time.to_string(),
    }
}

/// Fixed aggregate totals around a generated completion series.
pub fn statistics(daily_completion: Vec<DailyCompletion>) -> Statistics {
    Statistics {
        completion_rate: 78.5,
        planned_calories: 14000,
        actual_calories: 13200,
        calorie_deviation: -800,
        planned_exercise: 315,
        actual_exercise: 280,
        daily_completion,
    }
}

pub fn reminders() -> Vec<Reminder> {
    vec![
        reminder(1, ActivityKind::Meal, "Breakfast", "Time for breakfast, start the day with balanced nutrition!", "07:00", true),
        reminder(2, ActivityKind::Exercise, "Workout", "Today's plan: 45 minute jog", "17:00", true),
        reminder(3, ActivityKind::Encouragement, "Keep going", "You have kept it up for 7 days, great job!", "08:00", false),
        reminder(4, ActivityKind::Meal, "Lunch", "Lunch time, mix vegetables and protein", "12:00", false),
        reminder(5, ActivityKind::Meal, "Dinner", "Keep dinner light and small", "18:30", false),
    ]
}

fn reminder(id: i64, kind: ActivityKind, title: &str, content: &str, time: &str, unread: bool) -> Reminder {
    Reminder {
        id,
        kind: kind.as_str().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        time: time.to_string(),
        unread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_early_morning_plan() {
        let plan = daily_plan(date(), 7);
        assert!(plan.meal_breakfast.starts_with("Done"));
        assert_eq!(plan.meal_lunch, "Lunch pending");
        assert!(!plan.meal_dinner.contains("pending"));
    }

    #[test]
    fn test_midday_plan() {
        for hour in [9, 13] {
            let plan = daily_plan(date(), hour);
            assert!(!plan.meal_breakfast.starts_with("Done"));
            assert!(plan.meal_lunch.starts_with("Done"));
            assert!(!plan.meal_dinner.contains("pending"));
        }
    }

    #[test]
    fn test_afternoon_plan() {
        for hour in [14, 17] {
            let plan = daily_plan(date(), hour);
            assert!(!plan.meal_lunch.starts_with("Done"));
            assert_eq!(plan.meal_dinner, "Dinner pending");
        }
    }

    #[test]
    fn test_evening_plan_uses_defaults() {
        let evening = daily_plan(date(), 20);
        let reference = daily_plan(date(), 18);
        assert_eq!(evening, reference);
        assert!(!evening.meal_breakfast.starts_with("Done"));
        assert!(!evening.meal_lunch.starts_with("Done"));
        assert!(!evening.meal_dinner.contains("pending"));
        assert_eq!(evening.date, Some(date()));
    }

    #[test]
    fn test_reminder_fixture_counts() {
        let all = reminders();
        assert_eq!(all.len(), 5);
        assert_eq!(all.iter().filter(|r| r.unread).count(), 2);
        assert_eq!(all.iter().filter(|r| r.is_kind(ActivityKind::Meal)).count(), 3);
    }

    #[test]
    fn test_dashboard_has_four_tasks() {
        let data = dashboard();
        assert_eq!(data.today_tasks.len(), 4);
        assert_eq!(data.calorie.target, 2000);
    }
}
