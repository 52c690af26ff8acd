pub mod catalog;
pub mod dataset;
pub mod envelope;
pub mod instance;
pub mod query;
pub mod resource_kind;

pub use catalog::*;
pub use dataset::*;
pub use envelope::*;
pub use instance::*;
pub use query::*;
pub use resource_kind::*;
