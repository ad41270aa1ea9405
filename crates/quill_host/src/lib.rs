pub mod surface;
pub mod value;
pub mod memory;

pub use surface::*;
pub use value::*;
pub use memory::{MemoryHost, UserAction};
