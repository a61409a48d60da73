//! The fixed filter vocabulary for the search screen.
//!
//! The app ships with four filter categories (difficulty, meal, diet,
//! cuisine), each with a predefined list of option labels. The vocabulary
//! is static: it is defined here once and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Category names shown as section headers on the search screen, in
/// display order.
const SEARCH_HEADERS: &[&str] = &["Difficulty", "Meal", "Diet", "Cuisine"];

/// Section headers for the browse screen, in display order.
const BROWSE_HEADERS: &[&str] = &[
    "Meal Of The Day",
    "Breakfast",
    "Drinks",
    "American cuisine",
    "Chinese cuisine",
    "Middle Eastern cuisine",
    "Under 30 minutes",
    "You may like",
];

const DIFFICULTY_OPTIONS: &[&str] = &[
    "Under 60 Minutes",
    "Under 30 Minutes",
    "Under 15 Minutes",
    "Under 45 Minutes",
];

const MEAL_OPTIONS: &[&str] = &[
    "Dessert",
    "Appetizer",
    "Breakfast",
    "Drink",
    "Main course",
    "Salad",
];

const DIET_OPTIONS: &[&str] = &[
    "Gluten Free",
    "Ketogenic",
    "Vegetarian",
    "Vegan",
    "Pescetarian",
    "Lacto-Vegetarian",
    "Ovo-Vegetarian",
    "Paleo",
    "Primal",
    "Low FODMAP",
    "Whole30",
];

const CUISINE_OPTIONS: &[&str] = &[
    "African",
    "American",
    "British",
    "Cajun",
    "Caribbean",
    "Chinese",
    "Eastern European",
    "European",
    "French",
    "German",
    "Greek",
    "Indian",
    "Irish",
    "Italian",
    "Japanese",
    "Jewish",
    "Korean",
    "Latin American",
    "Mediterranean",
    "Mexican",
    "Middle Eastern",
    "Nordic",
    "Southern",
    "Spanish",
    "Thai",
    "Vietnamese",
];

/// A named filter category and its ordered option labels.
///
/// Option order matters: the chip packer processes labels in this order,
/// so reordering options changes the packed layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    /// Display name, also used as the selection-state key
    pub name: String,
    /// Option labels in display order
    pub options: Vec<String>,
}

impl FilterCategory {
    fn new(name: &str, options: &[&str]) -> Self {
        FilterCategory {
            name: name.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Returns the four standard filter categories in display order.
///
/// # Examples
///
/// ```
/// let categories = recipe_filters::standard_categories();
/// assert_eq!(categories.len(), 4);
/// assert_eq!(categories[0].name, "Difficulty");
/// ```
pub fn standard_categories() -> Vec<FilterCategory> {
    vec![
        FilterCategory::new("Difficulty", DIFFICULTY_OPTIONS),
        FilterCategory::new("Meal", MEAL_OPTIONS),
        FilterCategory::new("Diet", DIET_OPTIONS),
        FilterCategory::new("Cuisine", CUISINE_OPTIONS),
    ]
}

/// Returns the search-screen section headers (the category names).
pub fn search_headers() -> Vec<String> {
    SEARCH_HEADERS.iter().map(|s| s.to_string()).collect()
}

/// Returns the browse-screen section headers.
pub fn browse_headers() -> Vec<String> {
    BROWSE_HEADERS.iter().map(|s| s.to_string()).collect()
}
