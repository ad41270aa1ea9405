pub mod control;
pub mod properties;
pub mod spec;
pub mod serialization;

pub use control::*;
pub use properties::*;
pub use spec::*;
