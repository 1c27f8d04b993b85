//! Dining Experience Manager
//!
//! Core ordering and pricing logic: a menu catalog, an interactive order
//! session, tiered discounts and the final receipt. This crate has no
//! terminal or process concerns; callers supply the input and output streams.

pub mod config;
pub mod constants;
pub mod menu;
pub mod numbers;
pub mod order;
pub mod pricing;
pub mod quantity;
pub mod receipt;
pub mod session;
pub mod transcript;

use std::io::{self, BufRead, Write};

use thiserror::Error;

// Re-export commonly used types
pub use config::{ConfigError, DiningConfig, QuantityLimits};
pub use constants::{
    CANCELED_MESSAGE, DONE_COMMAND, MENU_HEADER, SELECTED_MEALS_HEADER, WELCOME_BANNER,
};
pub use menu::{MenuCatalog, MenuItem, normalize_meal_name};
pub use order::{Order, OrderError, OrderLine};
pub use pricing::{FlatDiscount, PriceBreakdown, PricingRules, QuantityTier, apply_discounts};
pub use quantity::{QuantityError, parse_quantity, read_quantity};
pub use receipt::{Receipt, ReceiptStatus};
pub use session::{OrderSession, SessionEnd, SessionOutcome};
pub use transcript::{PlainStyle, TranscriptStyle};

/// Trait for abstracting where configuration comes from
/// Front ends provide file, embedded or in-memory implementations
pub trait ConfigSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the configuration for a run
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_config(&self) -> Result<DiningConfig, Self::Error>;
}

/// Configuration source that always yields the built-in menu and rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConfig;

impl ConfigSource for BuiltinConfig {
    type Error = std::convert::Infallible;

    fn load_config(&self) -> Result<DiningConfig, Self::Error> {
        Ok(DiningConfig::default())
    }
}

/// Errors raised while preparing an engine.
#[derive(Debug, Error)]
pub enum EngineError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[error("failed to load configuration")]
    Load(#[source] E),
    #[error("invalid configuration")]
    Invalid(#[from] ConfigError),
}

/// Validated configuration plus the operations a front end needs.
#[derive(Debug, Clone, Default)]
pub struct DiningEngine {
    config: DiningConfig,
}

impl DiningEngine {
    /// Wrap a configuration after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration violates an invariant.
    pub fn new(config: DiningConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load and validate configuration from a source.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the loaded configuration is invalid.
    pub fn from_source<S: ConfigSource>(source: &S) -> Result<Self, EngineError<S::Error>> {
        let config = source.load_config().map_err(EngineError::Load)?;
        Ok(Self::new(config)?)
    }

    #[must_use]
    pub const fn config(&self) -> &DiningConfig {
        &self.config
    }

    #[must_use]
    pub const fn menu(&self) -> &MenuCatalog {
        &self.config.menu
    }

    /// A fresh session against this engine's menu and limits.
    #[must_use]
    pub fn open_session(&self) -> OrderSession<'_> {
        OrderSession::from_config(&self.config)
    }

    /// Price a finished session.
    #[must_use]
    pub fn checkout(&self, outcome: &SessionOutcome) -> Receipt {
        Receipt::from_outcome(outcome, &self.config.pricing)
    }

    /// Run the whole interaction in plain text: banner, menu, session, receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing to the output fails.
    pub fn run_plain<R, W>(&self, input: &mut R, output: &mut W) -> io::Result<Receipt>
    where
        R: BufRead,
        W: Write,
    {
        self.run_styled(input, output, &PlainStyle)
    }

    /// Run the whole interaction, letting `style` decorate the fixed lines.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing to the output fails.
    pub fn run_styled<R, W, S>(
        &self,
        input: &mut R,
        output: &mut W,
        style: &S,
    ) -> io::Result<Receipt>
    where
        R: BufRead,
        W: Write,
        S: TranscriptStyle + ?Sized,
    {
        writeln!(output, "{}", style.banner(WELCOME_BANNER))?;
        self.menu().write_listing_styled(output, style)?;
        let outcome = self.open_session().run(input, output)?;
        let receipt = self.checkout(&outcome);
        receipt.write_styled(output, style)?;
        output.flush()?;
        Ok(receipt)
    }
}
