//! Watch face implementations
//!
//! This crate provides concrete implementations of the face trait defined
//! in remontoire-core for the two panels the prototype was built around:
//!
//! - A 16x2 HD44780 character LCD on a 4-bit parallel bus
//! - A 1.54" bistable e-paper module behind `epd-waveshare`

#![no_std]
#![deny(unsafe_code)]

pub mod faces;
pub mod hd44780;

pub use faces::epaper::EpaperFace;
pub use faces::lcd::LcdFace;
