pub mod dataset;
pub mod errors;
pub mod models;
pub mod progress;
pub mod session;
pub mod sources;
pub mod stats;

pub use dataset::*;
pub use errors::*;
pub use models::*;
pub use progress::*;
pub use session::*;
pub use sources::*;
pub use stats::*;
