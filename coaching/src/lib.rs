pub mod assess;
pub mod catalog;
pub mod drill;
pub mod matcher;
pub mod plan;
pub mod progress;
pub mod recommend;

pub use assess::*;
pub use catalog::catalog;
pub use drill::*;
pub use matcher::*;
pub use plan::*;
pub use progress::*;
pub use recommend::*;
