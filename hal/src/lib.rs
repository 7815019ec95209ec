#![no_std]

pub mod canvas;
pub mod clock;
