use std::path::PathBuf;

use chef_ai::RecipePreferences;
use clap::{Parser, Subcommand};

/// Chef: a recipe assistant backed by a hosted language model.
#[derive(Parser, Debug)]
#[command(name = "chef", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Persona mode (general, fitness, vegan).
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Provider override (gemini, groq).
    #[arg(long)]
    pub provider: Option<String>,

    /// Remote handle policy override (persistent, fresh-per-call).
    #[arg(long)]
    pub policy: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Ask for a single recipe and exit.
    Ask {
        /// What to cook.
        prompt: String,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct PreferenceArgs {
    /// Allergens to avoid.
    #[arg(long)]
    pub allergies: Option<String>,

    /// Ingredients to use.
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Diet to follow.
    #[arg(long)]
    pub diet: Option<String>,

    /// Preferred cuisine.
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Cooking skill level.
    #[arg(long)]
    pub skill_level: Option<String>,
}

impl From<PreferenceArgs> for RecipePreferences {
    fn from(args: PreferenceArgs) -> Self {
        Self {
            allergies: args.allergies.unwrap_or_default(),
            ingredients: args.ingredients.unwrap_or_default(),
            diet: args.diet.unwrap_or_default(),
            cuisine: args.cuisine.unwrap_or_default(),
            skill_level: args.skill_level.unwrap_or_default(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
