//! Pairwise exchange quotes

use crate::currency::Currency;
use crate::error::{Result, RouterError};
use crate::rounding::round_hop;
use crate::types::Rate;
use serde::{Deserialize, Serialize};

/// One known exchange relation between two currencies.
///
/// A quote is directed — "1 unit of `from` = `rate` units of `to`" — but
/// answers lookups in either direction: the reverse rate is `1/rate` rounded
/// to four decimal places. Only the derived inverse is rounded; the stored
/// direction is returned unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from: Currency,
    pub to: Currency,
    pub rate: Rate,
}

impl ExchangeRate {
    /// Create a quote. The rate must be positive and finite.
    pub fn new(
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: Rate,
    ) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RouterError::InvalidRate(format!(
                "rate must be positive and finite, got {}",
                rate
            )));
        }
        Ok(Self {
            from: from.into(),
            to: to.into(),
            rate,
        })
    }

    /// True iff `{a, b}` equals `{from, to}` as an unordered pair
    pub fn matches(&self, a: &Currency, b: &Currency) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }

    /// Rate from `from` to `to` if this quote connects them, in either direction
    pub fn rate_for(&self, from: &Currency, to: &Currency) -> Option<Rate> {
        if self.from == *from && self.to == *to {
            Some(self.rate)
        } else if self.from == *to && self.to == *from {
            Some(round_hop(1.0 / self.rate))
        } else {
            None
        }
    }
}
