//! Exact decimal to fixed-point conversion for listing prices.
//!
//! Prices are entered as decimal strings and sent on chain as integers scaled
//! by `10^18`. Conversion works on the digit string directly so no value is
//! ever routed through a float.

pub mod amount;
pub mod convert;
pub mod error;

pub use amount::MoneyAmount;
pub use convert::{from_fixed_point, from_wei, to_fixed_point, to_wei, ETHER_DECIMALS, MAX_DECIMALS};
pub use error::{UnitError, UnitResult};
pub use primitive_types::U256;
