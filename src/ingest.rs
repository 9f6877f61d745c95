//! Input file ingestion
//!
//! Parses the semicolon-delimited conversion format:
//!
//! ```text
//! EUR;550;JPY        <- source currency, amount, target currency
//! 6                  <- number of quote lines
//! AUD;CHF;0.9661     <- one quote per line: from, to, rate
//! ...
//! ```
//!
//! Currency codes are taken as-is (no trimming, no case folding); the
//! currency list is built from the quote lines in first-seen order.

use crate::currency::Currency;
use crate::engine::ConversionRequest;
use crate::error::{Result, RouterError};
use crate::graph::ExchangeGraph;
use crate::rate::ExchangeRate;
use crate::types::{Amount, Rate};
use std::fs;
use std::path::Path;

/// Read and parse a conversion file from disk
pub fn load_file(path: impl AsRef<Path>) -> Result<(ConversionRequest, ExchangeGraph)> {
    let contents = fs::read_to_string(path)?;
    parse_input(&contents)
}

/// Parse conversion input from a string
pub fn parse_input(input: &str) -> Result<(ConversionRequest, ExchangeGraph)> {
    let mut lines = input.lines();

    let first = lines
        .next()
        .ok_or_else(|| parse_err(1, "missing request line"))?;
    let request = parse_request_line(first)?;

    let second = lines
        .next()
        .ok_or_else(|| parse_err(2, "missing quote count line"))?;
    let count: usize = second.trim().parse().map_err(|_| {
        parse_err(2, format!("invalid quote count '{}'", second.trim()))
    })?;

    let mut currencies: Vec<Currency> = Vec::new();
    let mut exchanges = Vec::with_capacity(count);
    for i in 0..count {
        let line_number = 3 + i;
        let line = lines
            .next()
            .ok_or_else(|| parse_err(line_number, "missing quote line"))?;
        let exchange = parse_exchange_line(line, line_number)?;
        for currency in [&exchange.from, &exchange.to] {
            if !currencies.contains(currency) {
                currencies.push(currency.clone());
            }
        }
        exchanges.push(exchange);
    }

    let trailing = lines.filter(|line| !line.trim().is_empty()).count();
    if trailing > 0 {
        log::warn!(
            "ignoring {} trailing line(s) beyond the declared {} quote(s)",
            trailing,
            count
        );
    }

    let graph = ExchangeGraph::new(currencies, exchanges)?;
    Ok((request, graph))
}

/// First line: `FROM;AMOUNT;TO`
fn parse_request_line(line: &str) -> Result<ConversionRequest> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 3 {
        return Err(parse_err(
            1,
            format!("expected FROM;AMOUNT;TO, got '{}'", line),
        ));
    }
    let amount: Amount = fields[1].trim().parse().map_err(|_| {
        parse_err(1, format!("invalid amount '{}'", fields[1]))
    })?;
    Ok(ConversionRequest::new(fields[0], fields[2], amount))
}

/// Quote line: `FROM;TO;RATE`
fn parse_exchange_line(line: &str, line_number: usize) -> Result<ExchangeRate> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 3 {
        return Err(parse_err(
            line_number,
            format!("expected FROM;TO;RATE, got '{}'", line),
        ));
    }
    let rate: Rate = fields[2].trim().parse().map_err(|_| {
        parse_err(line_number, format!("invalid rate '{}'", fields[2]))
    })?;
    ExchangeRate::new(fields[0], fields[1], rate).map_err(|error| match error {
        RouterError::InvalidRate(message) => parse_err(line_number, message),
        other => other,
    })
}

fn parse_err(line: usize, message: impl Into<String>) -> RouterError {
    RouterError::Parse {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "EUR;550;JPY\n6\nAUD;CHF;0.9661\nJPY;KRW;13.1151\nEUR;CHF;1.2053\nAUD;JPY;86.0305\nEUR;USD;1.2989\nJPY;INR;0.6571\n";

    #[test]
    fn test_parse_sample() {
        let (request, graph) = parse_input(SAMPLE).unwrap();

        assert_eq!(request, ConversionRequest::new("EUR", "JPY", 550));
        assert_eq!(graph.num_exchanges(), 6);
        let codes: Vec<&str> = graph.currencies().iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, ["AUD", "CHF", "JPY", "KRW", "EUR", "USD", "INR"]);
    }

    #[test]
    fn test_zero_quotes() {
        let (request, graph) = parse_input("USD;100;EUR\n0\n").unwrap();
        assert_eq!(request.amount, 100);
        assert_eq!(graph.num_currencies(), 0);
        assert_eq!(graph.num_exchanges(), 0);
    }

    #[test]
    fn test_bad_request_line() {
        let result = parse_input("USD;100\n0\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 1, .. })));

        let result = parse_input("USD;ten;EUR\n0\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_bad_count_line() {
        let result = parse_input("USD;100;EUR\nmany\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_missing_quote_lines() {
        let result = parse_input("USD;100;EUR\n2\nUSD;EUR;0.9\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 4, .. })));
    }

    #[test]
    fn test_bad_quote_line() {
        let result = parse_input("USD;100;EUR\n1\nUSD;EUR\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 3, .. })));

        let result = parse_input("USD;100;EUR\n1\nUSD;EUR;fast\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 3, .. })));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        let result = parse_input("USD;100;EUR\n1\nUSD;EUR;0\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 3, .. })));

        let result = parse_input("USD;100;EUR\n1\nUSD;EUR;-2.5\n");
        assert!(matches!(result, Err(RouterError::Parse { line: 3, .. })));
    }

    #[test]
    fn test_codes_are_taken_verbatim() {
        let (request, graph) = parse_input("usd;5;EUR\n1\nusd;EUR;2.0\n").unwrap();
        assert_eq!(request.from, Currency::from("usd"));
        assert!(graph.index_of(&Currency::from("usd")).is_some());
        assert!(graph.index_of(&Currency::from("USD")).is_none());
    }

    #[test]
    fn test_trailing_lines_ignored() {
        let (_, graph) = parse_input("USD;100;EUR\n1\nUSD;EUR;0.9\nEUR;GBP;0.8\n").unwrap();
        assert_eq!(graph.num_exchanges(), 1);
    }
}
