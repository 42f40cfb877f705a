//! Command implementations, one module per service

pub mod acmpca;
pub mod cloudhsm;
pub mod cloudtrail;
pub mod codestar;
pub mod opsworkscm;
pub mod profile;
pub mod utils;
