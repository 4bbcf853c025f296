//! User cooking preferences folded into the prompt text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipePreferences {
    pub allergies: String,
    pub ingredients: String,
    pub diet: String,
    pub cuisine: String,
    pub skill_level: String,
}

impl RecipePreferences {
    pub fn is_empty(&self) -> bool {
        [
            &self.allergies,
            &self.ingredients,
            &self.diet,
            &self.cuisine,
            &self.skill_level,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

/// Append each non-blank preference to the prompt as its own paragraph.
pub fn compose_prompt(prompt: &str, preferences: &RecipePreferences) -> String {
    if preferences.is_empty() {
        return prompt.to_string();
    }

    let sections = [
        ("Avoid the following allergens", &preferences.allergies),
        ("Use the following ingredients", &preferences.ingredients),
        ("Follow the following diet", &preferences.diet),
        ("Preferred cuisine", &preferences.cuisine),
        ("Cooking skill level", &preferences.skill_level),
    ];

    let mut full = prompt.to_string();
    for (label, value) in sections {
        let value = value.trim();
        if !value.is_empty() {
            full.push_str(&format!("\n\n{label}: {value}"));
        }
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preferences_leave_prompt_alone() {
        let prefs = RecipePreferences::default();
        assert!(prefs.is_empty());
        assert_eq!(compose_prompt("a quick soup", &prefs), "a quick soup");
    }

    #[test]
    fn blank_preferences_count_as_empty() {
        let prefs = RecipePreferences {
            cuisine: "   ".into(),
            skill_level: "\t".into(),
            ..Default::default()
        };
        assert!(prefs.is_empty());
        assert_eq!(compose_prompt("tacos", &prefs), "tacos");
    }

    #[test]
    fn preferences_appended_in_order() {
        let prefs = RecipePreferences {
            allergies: "peanuts".into(),
            ingredients: "rice, tofu".into(),
            diet: "low carb".into(),
            ..Default::default()
        };
        assert_eq!(
            compose_prompt("dinner idea", &prefs),
            "dinner idea\n\nAvoid the following allergens: peanuts\
             \n\nUse the following ingredients: rice, tofu\
             \n\nFollow the following diet: low carb"
        );
    }

    #[test]
    fn blank_fields_are_skipped() {
        let prefs = RecipePreferences {
            allergies: "   ".into(),
            cuisine: "thai".into(),
            skill_level: "beginner".into(),
            ..Default::default()
        };
        assert!(!prefs.is_empty());
        assert_eq!(
            compose_prompt("curry", &prefs),
            "curry\n\nPreferred cuisine: thai\n\nCooking skill level: beginner"
        );
    }
}
