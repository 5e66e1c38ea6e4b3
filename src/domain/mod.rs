pub mod errors;
pub mod logging;
pub mod market_depth;
