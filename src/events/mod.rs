pub mod pointer;
pub mod wheel;

pub use pointer::wire_pointer;
pub use wheel::{wire_wheel, WheelWiring};
