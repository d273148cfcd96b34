#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod cell;
mod cell_set;
mod common;
mod config;
mod fleet;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod render;
mod segment;
mod ship;
mod targeting;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use render::*;
pub use segment::*;
pub use ship::*;
pub use targeting::*;
