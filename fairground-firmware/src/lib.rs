//! Shared task and channel definitions for the fairground firmware binaries

#![no_std]

pub mod channels;
pub mod tasks;
