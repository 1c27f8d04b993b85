//! Centralized pricing defaults and console text for the dining engine.
//!
//! The default menu, discount tiers and every user-facing message live here
//! so the interactive flow and its tests agree on the exact wording.

// Pricing defaults ---------------------------------------------------------
pub(crate) const BASE_COST: f64 = 5.0;
pub(crate) const TIER_SMALL_THRESHOLD: u32 = 5;
pub(crate) const TIER_SMALL_RATE: f64 = 0.10;
pub(crate) const TIER_LARGE_THRESHOLD: u32 = 10;
pub(crate) const TIER_LARGE_RATE: f64 = 0.20;
pub(crate) const FLAT_HIGH_THRESHOLD: f64 = 100.0;
pub(crate) const FLAT_HIGH_AMOUNT: f64 = 25.0;
pub(crate) const FLAT_LOW_THRESHOLD: f64 = 50.0;
pub(crate) const FLAT_LOW_AMOUNT: f64 = 10.0;

// Quantity bounds ----------------------------------------------------------
pub(crate) const MIN_QUANTITY: u32 = 1;
pub(crate) const MAX_QUANTITY: u32 = 100;

// Default menu -------------------------------------------------------------
pub(crate) const DEFAULT_MENU: [(&str, f64); 3] =
    [("meal1", 10.0), ("meal2", 15.0), ("meal3", 20.0)];

// Session commands ---------------------------------------------------------
pub const DONE_COMMAND: &str = "done";

// Console text -------------------------------------------------------------
pub const WELCOME_BANNER: &str = "Welcome to Dining Experience Manager!";
pub const MENU_HEADER: &str = "Menu:";
pub const SELECTED_MEALS_HEADER: &str = "Selected Meals:";
pub const CANCELED_MESSAGE: &str = "Order canceled or invalid input. Returning -1.";
pub(crate) const MEAL_PROMPT: &str = "Enter a meal from the menu (or 'done' to confirm): ";
pub(crate) const INVALID_MEAL_MESSAGE: &str =
    "Invalid meal selection. Please select a meal from the menu.";
pub(crate) const NOT_POSITIVE_MESSAGE: &str = "Please enter a positive integer greater than zero.";
pub(crate) const NOT_A_NUMBER_MESSAGE: &str =
    "Invalid input. Please enter a positive integer greater than zero.";
