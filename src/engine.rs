//! Conversion engine - chain reconstruction and rate composition

use crate::currency::Currency;
use crate::error::{Result, RouterError};
use crate::graph::ExchangeGraph;
use crate::pathfinder::PathFinder;
use crate::rounding::{round_hop, round_to_amount};
use crate::types::{Amount, Rate};
use serde::{Deserialize, Serialize};

/// One conversion to perform: an amount and the currencies to route between.
///
/// Built once from input and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub from: Currency,
    pub to: Currency,
    pub amount: Amount,
}

impl ConversionRequest {
    /// Create a request
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>, amount: Amount) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Orchestrates path search and rate composition over a borrowed graph.
///
/// Each [`convert`](ConversionEngine::convert) call runs an independent path
/// search; no state is carried between requests sharing a graph.
pub struct ConversionEngine<'a> {
    graph: &'a ExchangeGraph,
}

impl<'a> ConversionEngine<'a> {
    /// Create an engine borrowing the graph read-only
    pub fn new(graph: &'a ExchangeGraph) -> Self {
        Self { graph }
    }

    /// Convert the requested amount along the fewest-hop rate chain.
    ///
    /// Returns [`RouterError::MissingRate`] when no chain of quotes connects
    /// the two currencies. A same-currency request is the identity conversion
    /// and always succeeds.
    pub fn convert(&self, request: &ConversionRequest) -> Result<Amount> {
        let chain = self.rate_chain(request)?;
        log::debug!(
            "converting {} {} -> {} through {} hop(s)",
            request.amount,
            request.from,
            request.to,
            chain.len()
        );
        Ok(apply_chain(request.amount, &chain))
    }

    /// Reconstruct the source-to-target rate chain from the shortest-path
    /// tree, in application order.
    pub fn rate_chain(&self, request: &ConversionRequest) -> Result<Vec<Rate>> {
        // Identity conversion: empty chain, no lookups needed.
        if request.from == request.to {
            return Ok(Vec::new());
        }

        let missing = || RouterError::MissingRate {
            from: request.from.to_string(),
            to: request.to.to_string(),
        };

        let source = self.graph.index_of(&request.from).ok_or_else(missing)?;
        let target = self.graph.index_of(&request.to).ok_or_else(missing)?;

        let paths = PathFinder::new(self.graph).shortest_paths(source);
        let currencies = self.graph.currencies();

        // Walk predecessors from the target back to the source, collecting
        // the rate of each hop. Bounded by the currency count: a longer walk
        // means the tree is broken.
        let mut chain: Vec<Rate> = Vec::new();
        let mut node = target;
        let mut steps = 0;
        while node != source {
            if steps >= self.graph.num_currencies() {
                return Err(missing());
            }
            steps += 1;

            let Some(previous) = paths.predecessor(node) else {
                log::warn!(
                    "no conversion path from {} to {}",
                    request.from,
                    request.to
                );
                return Err(missing());
            };
            let rate = self
                .graph
                .rate_between(&currencies[previous], &currencies[node])
                .ok_or_else(missing)?;
            chain.push(rate);
            node = previous;
        }
        chain.reverse();
        Ok(chain)
    }
}

/// Apply a chain left-to-right, rounding to four decimal places at every hop,
/// then round the result to a whole amount (ties to even).
fn apply_chain(amount: Amount, chain: &[Rate]) -> Amount {
    let mut result = amount as f64;
    for rate in chain {
        result = round_hop(result * rate);
    }
    round_to_amount(result)
}
