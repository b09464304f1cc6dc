pub mod demo;
pub mod timing;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// Derived IO error, writing the demo output failed
    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),
}
