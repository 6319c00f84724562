use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::saved_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub cook_time: String,
    pub prep_time: Option<String>,
    pub total_time: Option<String>,
    pub difficulty: String,
    pub servings: i32,
    /// JSON-serialized array of free-text ingredient lines
    pub ingredients: String,
    /// JSON-serialized array of free-text instruction steps
    pub instructions: String,
    pub cuisine: Option<String>,
    pub tags: Option<String>,
    pub source: String,
    pub meal_type: Option<String>,
    pub dietary: Option<String>,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub cook_time: &'a str,
    pub prep_time: Option<&'a str>,
    pub total_time: Option<&'a str>,
    pub difficulty: &'a str,
    pub servings: i32,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub cuisine: Option<&'a str>,
    pub tags: Option<&'a str>,
    pub source: &'a str,
    pub meal_type: Option<&'a str>,
    pub dietary: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::custom_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomIngredient {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub validated: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::custom_ingredients)]
pub struct NewCustomIngredient<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub category: &'a str,
    pub validated: bool,
}

/// Audit row for one generation request. Write-only; never read back.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_history)]
pub struct NewHistoryEvent<'a> {
    pub user_id: Option<Uuid>,
    pub base_ingredients: &'a str,
    pub main_ingredients: &'a str,
    pub meal_type: Option<&'a str>,
    pub dietary: Option<&'a str>,
    pub customizations: &'a str,
    pub surprise_mode: bool,
    pub recipes_generated: i32,
    pub source: &'a str,
    pub success: bool,
}

/// Serialize free-text lines for a JSON text column.
pub fn lines_to_json(lines: &[String]) -> String {
    serde_json::to_string(lines).unwrap_or_else(|_| "[]".to_string())
}

/// Deserialize a JSON text column back into lines. Malformed stored data
/// degrades to an empty list rather than failing the whole listing.
pub fn lines_from_json(text: &str) -> Vec<String> {
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_round_trip() {
        let lines = vec![
            "1 cup rice".to_string(),
            "1/2 cup chicken, diced".to_string(),
            "Salt \"to taste\"".to_string(),
        ];
        let stored = lines_to_json(&lines);
        assert_eq!(lines_from_json(&stored), lines);
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(lines_from_json(&lines_to_json(&[])), Vec::<String>::new());
    }

    #[test]
    fn test_malformed_stored_text_degrades_to_empty() {
        assert_eq!(lines_from_json("not json"), Vec::<String>::new());
    }
}
