pub mod dispatch;
pub mod envelope;
pub mod paginate;
pub mod params;
pub mod query;
pub mod search;

pub use envelope::*;
pub use paginate::*;
pub use params::*;
pub use query::*;
pub use search::*;
