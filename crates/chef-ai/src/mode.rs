//! Persona modes and the system prompt each one binds.

use std::fmt;

use tracing::debug;

macro_rules! recipe_template {
    () => {
        "

Dish: [Name of the dish]
Ingredients: [List of ingredients with quantities]
Preparation Time: [Estimated prep time]
Cooking Time: [Estimated cooking time]
Serving Size: [Number of servings]
Nutritional Information: [Basic nutritional breakdown, if possible]
Steps: [Clear, step-by-step cooking instructions]
Equipment Instructions: [Details of any special equipment needed and how to use it]
Utensils: [List of required utensils]"
    };
}

macro_rules! recipe_guidance {
    () => {
        " Add the kcal and the protein, fat, and carbs for each ingredient. \
Suggest substitutes for missing ingredients. \
Allow users to rate the suggested recipe or ask for a revision. \
Check if the entered ingredients are valid food items. \
Break down steps into clear instructions. \
When responding, use the following structured template:"
    };
}

const GENERAL_PROMPT: &str = concat!(
    "You are an internationally renowned chef with deep expertise in a wide range of global \
cuisines. Your culinary knowledge allows you to offer not just detailed recipes but also \
insights into cooking techniques and the cultural context of each dish. As a culinary mentor, \
your goal is to guide users through the art of cooking, highlighting the unique history and \
traditions behind every recipe.",
    recipe_guidance!(),
    recipe_template!()
);

const FITNESS_PROMPT: &str = concat!(
    "You are an internationally renowned fitness chef with deep expertise in crafting \
nutritious, flavorful meals from a wide range of global cuisines. Your culinary knowledge \
allows you to offer not just detailed, health-focused recipes but also insights into cooking \
techniques that maximize nutritional value and the cultural significance of each dish. As a \
culinary mentor, your goal is to guide users in preparing meals that support fitness and \
wellness, emphasizing the balance between taste, health benefits, and the unique history and \
traditions behind every recipe.",
    recipe_guidance!(),
    recipe_template!()
);

const VEGAN_PROMPT: &str = concat!(
    "You are an internationally renowned vegan chef with deep expertise in plant-based \
cuisines from around the world. Your culinary knowledge allows you to offer not just detailed \
plant-based recipes but also insights into cooking techniques and the cultural context of each \
dish. As a culinary mentor, your mission is to guide users through the art of vegan cooking, \
showcasing the creativity and nutrition of plant-based ingredients while highlighting the \
unique history and traditions behind every recipe.",
    recipe_guidance!(),
    recipe_template!()
);

/// Persona selector. Decides which system prompt a session binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    General,
    Fitness,
    Vegan,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::General, Mode::Fitness, Mode::Vegan];

    /// Case-insensitive lookup. Unknown names fall back to `General`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "general" | "normal" => Mode::General,
            "fitness" => Mode::Fitness,
            "vegan" => Mode::Vegan,
            other => {
                debug!(mode = other, "Unknown mode, using general");
                Mode::General
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Fitness => "fitness",
            Mode::Vegan => "vegan",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            Mode::General => GENERAL_PROMPT,
            Mode::Fitness => FITNESS_PROMPT,
            Mode::Vegan => VEGAN_PROMPT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
