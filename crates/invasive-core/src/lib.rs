pub mod assessment;
pub mod error;
pub mod factors;
pub mod fuzzy;
pub mod quantifier;
pub mod scale;
pub mod weights;

#[cfg(test)]
mod tests;

pub use assessment::*;
pub use error::*;
pub use factors::*;
pub use fuzzy::*;
pub use quantifier::*;
pub use scale::*;
pub use weights::*;
