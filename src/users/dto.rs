use serde::{Deserialize, Serialize};
use time::Date;

use crate::meals::dto::MealWithIngredients;

time::serde::format_description!(day_format, Date, "[year]-[month]-[day]");

/// Optional `?day=YYYY-MM-DD` on the daily-view endpoints; defaults to
/// today in UTC.
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    #[serde(default, with = "day_format::option")]
    pub day: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub target_calories: Option<i64>,
    pub maintenance_calories: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Composed read-model: profile + one day's meals + the derived total.
#[derive(Debug, Serialize)]
pub struct DailyView {
    pub id: i64,
    pub name: String,
    pub target_calories: i64,
    pub maintenance_calories: i64,
    pub consumed_calories: i64,
    pub meals: Vec<MealWithIngredients>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_request_accepts_partial_bodies() {
        let req: UpdateSettingsRequest =
            serde_json::from_str(r#"{"target_calories": 1800}"#).unwrap();
        assert_eq!(req.target_calories, Some(1800));
        assert_eq!(req.maintenance_calories, None);

        let req: UpdateSettingsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.target_calories, None);
        assert_eq!(req.maintenance_calories, None);
    }

    #[test]
    fn daily_view_serializes_consumed_total() {
        let view = DailyView {
            id: 1,
            name: "You".into(),
            target_calories: 2000,
            maintenance_calories: 2200,
            consumed_calories: 500,
            meals: vec![],
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains(r#""consumed_calories":500"#));
        assert!(json.contains(r#""meals":[]"#));
    }
}
