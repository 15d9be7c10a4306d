mod error;
mod model;
mod registry;
mod service;
mod store;

pub use error::*;
pub use model::*;
pub use registry::*;
pub use service::*;
pub use store::*;
