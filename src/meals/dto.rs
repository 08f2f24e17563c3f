use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::meals::repo::Ingredient;

#[derive(Debug, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    pub amount: String,
    pub calories: i64,
}

#[derive(Debug, Deserialize)]
pub struct LogMealRequest {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,
}

#[derive(Debug, Serialize)]
pub struct LogMealResponse {
    pub message: String,
    pub meal_id: i64,
    pub total_calories: i64,
}

#[derive(Debug, Serialize)]
pub struct MealWithIngredients {
    pub id: i64,
    pub name: String,
    pub total_calories: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    pub ingredients: Vec<Ingredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_meal_request_parses_ingredient_list() {
        let req: LogMealRequest = serde_json::from_str(
            r#"{
                "name": "Lunch",
                "ingredients": [
                    {"name": "Rice", "amount": "1 cup", "calories": 200},
                    {"name": "Chicken", "amount": "150g", "calories": 300}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(req.name, "Lunch");
        assert_eq!(req.ingredients.len(), 2);
        assert_eq!(req.ingredients[1].amount, "150g");
    }

    #[test]
    fn log_meal_request_defaults_to_no_ingredients() {
        let req: LogMealRequest = serde_json::from_str(r#"{"name": "Coffee"}"#).unwrap();
        assert!(req.ingredients.is_empty());
    }
}
