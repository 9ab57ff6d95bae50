pub mod criteria;
pub mod draw;
pub mod errors;
pub mod filters;
pub mod images;
pub mod models;
pub mod pipeline;
pub mod repo;
pub mod session;
pub mod sets;
pub mod sort;

pub use criteria::*;
pub use draw::*;
pub use errors::*;
pub use filters::*;
pub use models::*;
pub use pipeline::*;
pub use repo::*;
pub use session::*;
pub use sets::*;
pub use sort::*;
