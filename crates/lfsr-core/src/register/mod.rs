pub mod lfsr;
pub mod parity;
pub mod step;

pub use lfsr::Lfsr;
pub use parity::parity;
pub use step::{step16, step8, Register};
