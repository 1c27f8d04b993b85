//! Final order summary shown once the session closes.
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::constants::{CANCELED_MESSAGE, SELECTED_MEALS_HEADER};
use crate::numbers::truncate_f64_to_i64;
use crate::order::{Order, OrderLine};
use crate::pricing::{PriceBreakdown, PricingRules};
use crate::session::{SessionEnd, SessionOutcome};
use crate::transcript::{PlainStyle, TranscriptStyle};

/// Whether the order priced to a payable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Payable,
    /// Only reachable with a negative final cost, which well-formed rules never produce
    Canceled,
}

/// Everything printed after the session, plus the pricing trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<OrderLine>,
    pub breakdown: PriceBreakdown,
    /// Final cost truncated toward zero for display
    pub total_display: i64,
    pub status: ReceiptStatus,
    pub ended_by: SessionEnd,
}

impl Receipt {
    /// Price a finished session.
    #[must_use]
    pub fn from_outcome(outcome: &SessionOutcome, rules: &PricingRules) -> Self {
        let breakdown = rules.quote(&outcome.order, outcome.running_total);
        Self::from_breakdown(&outcome.order, breakdown, outcome.ended_by)
    }

    #[must_use]
    pub fn from_breakdown(order: &Order, breakdown: PriceBreakdown, ended_by: SessionEnd) -> Self {
        let status = if breakdown.final_cost >= 0.0 {
            ReceiptStatus::Payable
        } else {
            ReceiptStatus::Canceled
        };
        Self {
            lines: order.lines.clone(),
            total_display: truncate_f64_to_i64(breakdown.final_cost),
            breakdown,
            status,
            ended_by,
        }
    }

    #[must_use]
    pub const fn final_cost(&self) -> f64 {
        self.breakdown.final_cost
    }

    /// `name xQuantity` per order line.
    #[must_use]
    pub fn selected_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{} x{}", line.meal, line.quantity))
            .collect()
    }

    /// The closing line: the truncated total, or the cancellation notice.
    #[must_use]
    pub fn total_line(&self) -> String {
        match self.status {
            ReceiptStatus::Payable => format!("Total cost: ${}", self.total_display),
            ReceiptStatus::Canceled => CANCELED_MESSAGE.to_string(),
        }
    }

    /// Write the plain-text receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_styled(out, &PlainStyle)
    }

    /// Write the receipt with decorated header and total lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_styled<W, S>(&self, out: &mut W, style: &S) -> io::Result<()>
    where
        W: Write,
        S: TranscriptStyle + ?Sized,
    {
        writeln!(out, "{}", style.selected_header(SELECTED_MEALS_HEADER))?;
        for line in self.selected_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", style.total(&self.total_line(), self.status))
    }
}
