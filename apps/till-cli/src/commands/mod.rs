//! # Commands Module
//!
//! One module per subcommand.
//!
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (shared Context)
//! ├── breakdown.rs      ◄─── One amount, no history
//! ├── session.rs        ◄─── Successive amounts with differences
//! ├── calculate.rs      ◄─── JSON request/response
//! └── denominations.rs  ◄─── Configured set
//! ```
//!
//! Commands take only what they need: `calculate` carries its own
//! denominations in the request and never sees the [`Context`].

pub mod breakdown;
pub mod calculate;
pub mod denominations;
pub mod session;

use till_core::DenominationSet;

use crate::config::{ConfigResult, CurrencySettings, TillConfig};
use crate::OutputFormat;

/// Validated configuration shared by the commands.
#[derive(Debug, Clone)]
pub struct Context {
    pub currency: CurrencySettings,
    pub denominations: DenominationSet,
    pub format: OutputFormat,
}

impl Context {
    /// Validates `config`; the denomination set is built here and only here.
    pub fn new(config: TillConfig, format: OutputFormat) -> ConfigResult<Self> {
        let denominations = config.validate()?;
        Ok(Context {
            currency: config.currency,
            denominations,
            format,
        })
    }

    #[cfg(test)]
    pub(crate) fn euro(format: OutputFormat) -> Self {
        Context {
            currency: CurrencySettings::default(),
            denominations: DenominationSet::euro(),
            format,
        }
    }
}
