mod error;
mod expense;
mod money;
mod summary;

pub use error::*;
pub use expense::*;
pub use money::*;
pub use summary::*;
