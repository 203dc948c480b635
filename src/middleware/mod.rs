mod json_error;
mod panic;

pub use json_error::envelope_error_middleware;
pub use panic::catch_panic_layer;
