pub mod items;
pub mod lists;
mod router;

pub use router::router;
