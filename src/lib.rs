//! Fuzzy TOPSIS - Multi-criteria decision ranking under uncertainty
//!
//! This crate ranks alternatives against benefit and cost criteria whose
//! ratings and weights are triangular fuzzy numbers, following the fuzzy
//! TOPSIS method: normalize, weight, locate the ideal solutions, measure
//! vertex distances, and order by closeness coefficient.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
