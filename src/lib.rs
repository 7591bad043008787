//! Compiles energy system models into the relational databases read by an optimiser.
#![warn(missing_docs)]
pub mod build;
pub mod commodity;
pub mod compiler;
pub mod distribution;
pub mod growth;
pub mod horizon;
pub mod id;
pub mod input;
pub mod log;
pub mod model;
pub mod output;
pub mod region;
pub mod settings;
pub mod technology;
pub mod time_series;
pub mod time_slice;

#[cfg(test)]
mod fixture;
