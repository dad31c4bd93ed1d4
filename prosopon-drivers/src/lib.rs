//! Hardware driver implementations for the Prosopon desk companion

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod sensor;
