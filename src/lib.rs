pub mod chat;
pub mod derivation;
pub mod error;
pub mod math;
pub mod model;
pub mod optimize;
pub mod presentation;
pub mod scene;
pub mod session;

pub use error::{OptimathError, Result};
