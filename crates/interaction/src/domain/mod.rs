pub mod abi;
pub mod eth;
pub mod guidance;
pub mod interaction;
pub mod registry;
