pub mod types;

mod manage;
mod mint;
mod sequence;
mod transfer;
mod views;

pub use types::*;
