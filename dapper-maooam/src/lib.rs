//! # dapper-maooam: MAOOAM initial conditions
//!
//! State layout and reference initial conditions of the 36-variable
//! Modular Arbitrary-Order Ocean-Atmosphere Model (2 × 10 atmospheric and
//! 2 × 8 oceanic spectral modes).

pub mod ic;
pub mod layout;

pub use ic::{stack_members, x0, x1};
pub use layout::{
    component_of, mode, AtmosphericMode, Component, Mode, ModeType, OceanicMode, N_VARIABLES,
};
