pub mod channels;
pub mod defaults;
pub mod error;
pub mod intensity;
pub mod manifest;
#[cfg(test)]
mod tests;

pub use channels::*;
pub use defaults::*;
pub use error::*;
pub use intensity::*;
pub use manifest::*;
