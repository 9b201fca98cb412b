//! Contract module containing trait definitions for forecast operations

mod parameter_fitter;

pub use parameter_fitter::ParameterFitter;
