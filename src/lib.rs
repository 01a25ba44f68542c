#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod fleet;
mod generator;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use generator::*;
#[cfg(feature = "std")]
pub use logging::{
    format_record, init_logging, init_logging_at, parse_level, DEFAULT_LEVEL, LOG_ENV,
};
pub use placement::*;
pub use render::column_letter;
pub use ship::*;
