pub mod flash;
pub mod items;
pub mod lists;
mod page;
pub mod public;
mod router;

pub use router::router;
