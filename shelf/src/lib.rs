use std::time::Instant;

use once_cell::sync::Lazy;

pub mod config;
pub mod io;
pub mod probe;
pub mod render;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
