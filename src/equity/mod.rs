pub mod equity;
pub mod montecarlo;
pub mod pool;
pub mod preflop;
pub mod tally;

pub use equity::*;
pub use montecarlo::*;
pub use pool::*;
pub use preflop::*;
pub use tally::*;
