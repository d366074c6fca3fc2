use std::error::Error;

/// The error type returned by the tools, every library error converts into it
/// through `?`.
pub type FsaError = Box<dyn Error>;
