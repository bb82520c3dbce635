pub mod alert;
pub mod severity;
pub mod vitals;

pub use alert::*;
pub use severity::*;
pub use vitals::*;
