//! Hardware driver implementations for the fairground model firmware
//!
//! Drivers model hardware state as plain data so they can be tested on the
//! host; the firmware applies the computed pin states to real peripherals.

#![no_std]
#![deny(unsafe_code)]

pub mod motor;
