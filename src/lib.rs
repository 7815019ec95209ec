#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod config;
pub mod osd;
pub mod types;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;
