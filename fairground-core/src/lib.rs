//! Board-agnostic logic for the fairground model firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Switch input debouncing
//! - Motor driver traits
//! - The Top Spin ride choreography and revolution counting
//! - The Halloween LED animation engine

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod led;
pub mod ride;
pub mod traits;
