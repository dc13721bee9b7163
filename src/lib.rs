#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
#[cfg(feature = "std")]
pub mod protocol;
mod resolver;
#[cfg(feature = "std")]
pub mod service;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::place_fleet;
#[cfg(feature = "std")]
pub use protocol::*;
#[cfg(feature = "std")]
pub use service::{GameService, MemoryStore};
