//! Interactive ordering session.
//!
//! The session alternates between a meal prompt and a quantity prompt until
//! the diner types `done` or the input runs dry. Accepted lines overwrite the
//! meal's quantity in the order and add their cost to the running total.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{DiningConfig, QuantityLimits};
use crate::constants::{DONE_COMMAND, INVALID_MEAL_MESSAGE, MEAL_PROMPT};
use crate::menu::{MenuCatalog, normalize_meal_name};
use crate::numbers::quantity_to_f64;
use crate::order::{Order, OrderError};
use crate::quantity::{read_input_line, read_quantity};

/// How a session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEnd {
    /// The diner entered the `done` command
    Done,
    /// The input stream closed
    EndOfInput,
}

/// The finished order handed to pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub order: Order,
    pub running_total: f64,
    pub ended_by: SessionEnd,
}

/// Order state for one diner.
#[derive(Debug, Clone)]
pub struct OrderSession<'a> {
    catalog: &'a MenuCatalog,
    limits: QuantityLimits,
    order: Order,
    running_total: f64,
}

impl<'a> OrderSession<'a> {
    /// Start an empty order whose running total begins at `base_cost`.
    #[must_use]
    pub fn new(catalog: &'a MenuCatalog, base_cost: f64, limits: QuantityLimits) -> Self {
        Self {
            catalog,
            limits,
            order: Order::new(),
            running_total: base_cost,
        }
    }

    #[must_use]
    pub fn from_config(config: &'a DiningConfig) -> Self {
        Self::new(&config.menu, config.pricing.base_cost, config.limits)
    }

    #[must_use]
    pub const fn order(&self) -> &Order {
        &self.order
    }

    #[must_use]
    pub const fn running_total(&self) -> f64 {
        self.running_total
    }

    /// Record a meal and quantity. Returns the cost added to the running total.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnknownMeal`] when the meal is not on the menu and
    /// [`OrderError::QuantityOutOfRange`] when the quantity is outside the
    /// limits. Neither case changes the order or the running total.
    pub fn accept_line(&mut self, meal: &str, quantity: i32) -> Result<f64, OrderError> {
        let meal = normalize_meal_name(meal);
        let price = self
            .catalog
            .lookup(&meal)
            .ok_or_else(|| OrderError::UnknownMeal { meal: meal.clone() })?;
        let accepted = u32::try_from(quantity)
            .ok()
            .filter(|_| self.limits.accepts(quantity))
            .ok_or(OrderError::QuantityOutOfRange {
                quantity,
                min: self.limits.min,
                max: self.limits.max,
            })?;

        let line_cost = price * quantity_to_f64(accepted);
        if let Some(previous) = self.order.set_quantity(&meal, accepted) {
            debug!("{meal}: quantity {previous} replaced by {accepted}");
        }
        self.running_total += line_cost;
        debug!(
            "accepted {meal} x{accepted} (+{line_cost:.2}, running total {:.2})",
            self.running_total
        );
        Ok(line_cost)
    }

    /// Drive the prompt loop until `done` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing to the output fails.
    pub fn run<R, W>(mut self, input: &mut R, output: &mut W) -> io::Result<SessionOutcome>
    where
        R: BufRead,
        W: Write,
    {
        let ended_by = self.prompt_loop(input, output)?;
        if ended_by == SessionEnd::EndOfInput {
            writeln!(output)?;
        }
        output.flush()?;
        Ok(self.finish(ended_by))
    }

    fn prompt_loop<R, W>(&mut self, input: &mut R, output: &mut W) -> io::Result<SessionEnd>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();
        loop {
            write!(output, "{MEAL_PROMPT}")?;
            output.flush()?;

            let Some(line) = read_input_line(input, &mut buf)? else {
                return Ok(SessionEnd::EndOfInput);
            };
            let meal = normalize_meal_name(&line);
            if meal == DONE_COMMAND {
                return Ok(SessionEnd::Done);
            }
            if !self.catalog.contains(&meal) {
                debug!("unknown meal selection {meal:?}");
                writeln!(output, "{INVALID_MEAL_MESSAGE}")?;
                continue;
            }

            write!(output, "Enter the quantity for {meal}: ")?;
            output.flush()?;
            let Some(quantity) = read_quantity(input, output)? else {
                return Ok(SessionEnd::EndOfInput);
            };

            if let Err(err) = self.accept_line(&meal, quantity) {
                debug!("discarded order line: {err}");
                writeln!(
                    output,
                    "Invalid quantity. Please enter a positive integer between {} and {}.",
                    self.limits.min, self.limits.max
                )?;
            }
        }
    }

    /// Close the session and hand the order over for pricing.
    #[must_use]
    pub fn finish(self, ended_by: SessionEnd) -> SessionOutcome {
        info!(
            "session ended ({ended_by:?}) with {} order lines, running total {:.2}",
            self.order.len(),
            self.running_total
        );
        SessionOutcome {
            order: self.order,
            running_total: self.running_total,
            ended_by,
        }
    }
}
