//! # fx_router
//!
//! A shortest-path currency conversion engine.
//!
//! Given a flat list of pairwise exchange quotes, fx_router assembles a graph
//! of currencies, finds the route with the fewest conversions between two of
//! them, and folds the rate chain along that route into an amount. Each quote
//! works in both directions (the reverse rate is the inverse rounded to four
//! decimal places), every hop of the chain is rounded to four decimal places,
//! and the final amount is rounded to a whole number.
//!
//! ## Example
//!
//! ```rust
//! use fx_router::prelude::*;
//!
//! # fn main() -> fx_router::error::Result<()> {
//! let graph = ExchangeGraph::from_exchanges(vec![
//!     ExchangeRate::new("USD", "EUR", 0.9)?,
//!     ExchangeRate::new("EUR", "GBP", 0.8)?,
//! ])?;
//!
//! let engine = ConversionEngine::new(&graph);
//! let result = engine.convert(&ConversionRequest::new("USD", "GBP", 1000))?;
//! assert_eq!(result, 720);
//! # Ok(())
//! # }
//! ```

pub mod currency;
pub mod engine;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod pathfinder;
pub mod rate;
pub mod rounding;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::currency::Currency;
    pub use crate::engine::{ConversionEngine, ConversionRequest};
    pub use crate::error::{Result, RouterError};
    pub use crate::graph::ExchangeGraph;
    pub use crate::pathfinder::{PathFinder, ShortestPaths};
    pub use crate::rate::ExchangeRate;
    pub use crate::types::*;
}
