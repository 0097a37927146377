//! The explicitly-constructed bridge between the platform's input dispatch
//! thread and the application loop.

mod bridge;
mod builder;

pub use bridge::*;
pub use builder::*;
