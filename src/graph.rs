//! Exchange graph - the currencies and the quotes connecting them

use crate::currency::Currency;
use crate::error::{Result, RouterError};
use crate::rate::ExchangeRate;
use crate::types::Rate;
use hashbrown::HashMap;

/// The full set of currencies and exchange quotes for a conversion run.
///
/// Currencies keep their first-seen ingestion order; their positions are the
/// index space of the path search. Quotes keep insertion order, which decides
/// the winner when several quotes connect the same pair: lookups always take
/// the first applicable quote, and later duplicates are never consulted.
///
/// The graph is read-only after construction.
#[derive(Debug, Clone)]
pub struct ExchangeGraph {
    currencies: Vec<Currency>,
    exchanges: Vec<ExchangeRate>,
    index: HashMap<String, usize>,
}

impl ExchangeGraph {
    /// Build a graph from an explicit currency list and quote list.
    ///
    /// Every currency referenced by a quote must appear in `currencies`, and
    /// the list must not contain duplicates.
    pub fn new(currencies: Vec<Currency>, exchanges: Vec<ExchangeRate>) -> Result<Self> {
        let mut index = HashMap::with_capacity(currencies.len());
        for (position, currency) in currencies.iter().enumerate() {
            if index.insert(currency.as_str().to_string(), position).is_some() {
                return Err(RouterError::MalformedGraph(format!(
                    "duplicate currency {}",
                    currency
                )));
            }
        }

        for exchange in &exchanges {
            for currency in [&exchange.from, &exchange.to] {
                if !index.contains_key(currency.as_str()) {
                    return Err(RouterError::MalformedGraph(format!(
                        "quote {}/{} references unlisted currency {}",
                        exchange.from, exchange.to, currency
                    )));
                }
            }
        }

        Ok(Self {
            currencies,
            exchanges,
            index,
        })
    }

    /// Build a graph from quotes alone, deriving the currency list in
    /// first-seen order (`from` before `to` within each quote).
    pub fn from_exchanges(exchanges: Vec<ExchangeRate>) -> Result<Self> {
        let mut currencies: Vec<Currency> = Vec::new();
        for exchange in &exchanges {
            for currency in [&exchange.from, &exchange.to] {
                if !currencies.contains(currency) {
                    currencies.push(currency.clone());
                }
            }
        }
        Self::new(currencies, exchanges)
    }

    /// Number of distinct currencies
    pub fn num_currencies(&self) -> usize {
        self.currencies.len()
    }

    /// Number of stored quotes
    pub fn num_exchanges(&self) -> usize {
        self.exchanges.len()
    }

    /// Currencies in first-seen order
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Position of a currency in the index space
    pub fn index_of(&self, currency: &Currency) -> Option<usize> {
        self.index.get(currency.as_str()).copied()
    }

    /// True iff any stored quote connects `a` and `b`, in either direction
    pub fn has_direct_rate(&self, a: &Currency, b: &Currency) -> bool {
        self.exchanges.iter().any(|exchange| exchange.matches(a, b))
    }

    /// Rate from `a` to `b` using the first applicable quote in insertion order
    pub fn rate_between(&self, a: &Currency, b: &Currency) -> Option<Rate> {
        self.exchanges
            .iter()
            .find_map(|exchange| exchange.rate_for(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(from: &str, to: &str, rate: f64) -> ExchangeRate {
        ExchangeRate::new(from, to, rate).unwrap()
    }

    #[test]
    fn test_first_seen_order() {
        let graph = ExchangeGraph::from_exchanges(vec![
            quote("AUD", "CHF", 0.9661),
            quote("JPY", "KRW", 13.1151),
            quote("EUR", "CHF", 1.2053),
        ])
        .unwrap();

        let codes: Vec<&str> = graph.currencies().iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["AUD", "CHF", "JPY", "KRW", "EUR"]);
        assert_eq!(graph.index_of(&Currency::from("JPY")), Some(2));
        assert_eq!(graph.index_of(&Currency::from("USD")), None);
    }

    #[test]
    fn test_has_direct_rate_both_directions() {
        let graph = ExchangeGraph::from_exchanges(vec![quote("USD", "EUR", 0.9)]).unwrap();

        let usd = Currency::from("USD");
        let eur = Currency::from("EUR");
        assert!(graph.has_direct_rate(&usd, &eur));
        assert!(graph.has_direct_rate(&eur, &usd));
        assert!(!graph.has_direct_rate(&usd, &Currency::from("GBP")));
    }

    #[test]
    fn test_rate_between_inverts() {
        let graph = ExchangeGraph::from_exchanges(vec![quote("USD", "EUR", 0.9)]).unwrap();

        let usd = Currency::from("USD");
        let eur = Currency::from("EUR");
        assert_eq!(graph.rate_between(&usd, &eur), Some(0.9));
        assert_eq!(graph.rate_between(&eur, &usd), Some(1.1111));
        assert_eq!(graph.rate_between(&usd, &Currency::from("GBP")), None);
    }

    #[test]
    fn test_first_matching_quote_wins() {
        // Two quotes for the same pair: the earlier one is the only one used,
        // in both directions.
        let graph = ExchangeGraph::from_exchanges(vec![
            quote("USD", "EUR", 0.9),
            quote("EUR", "USD", 2.0),
        ])
        .unwrap();

        let usd = Currency::from("USD");
        let eur = Currency::from("EUR");
        assert_eq!(graph.rate_between(&usd, &eur), Some(0.9));
        assert_eq!(graph.rate_between(&eur, &usd), Some(1.1111));
    }

    #[test]
    fn test_empty_graph() {
        let graph = ExchangeGraph::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(graph.num_currencies(), 0);
        assert_eq!(graph.num_exchanges(), 0);
    }

    #[test]
    fn test_listed_currency_without_quotes() {
        let graph = ExchangeGraph::new(
            vec![Currency::from("USD"), Currency::from("CAD")],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(graph.index_of(&Currency::from("CAD")), Some(1));
    }

    #[test]
    fn test_rejects_unlisted_currency() {
        let result = ExchangeGraph::new(
            vec![Currency::from("USD")],
            vec![quote("USD", "EUR", 0.9)],
        );
        assert!(matches!(result, Err(RouterError::MalformedGraph(_))));
    }

    #[test]
    fn test_rejects_duplicate_currency() {
        let result = ExchangeGraph::new(
            vec![Currency::from("USD"), Currency::from("USD")],
            Vec::new(),
        );
        assert!(matches!(result, Err(RouterError::MalformedGraph(_))));
    }
}
