//! nutriscale library
//!
//! Scales a product's label nutrition facts to the amount actually consumed
//! and expresses each nutrient as a share of its daily reference value.

pub mod build_info;
pub mod models;
pub mod nutrition;
pub mod session;
