#![no_std]

pub mod signals;
