//! Record rotation used by the song screen.
//!
//! `Spin` is a two-state machine (paused / playing) plus an accumulated
//! angle. The angle is a pure function of the instant it is sampled at, so
//! the frame clock lives entirely in the runtime loop.

mod spin;

pub use spin::Spin;

#[cfg(test)]
mod tests;
