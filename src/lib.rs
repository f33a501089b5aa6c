//! Device abstraction for pixel-addressable WS2812-class LED strips.
//!
//! The crate is split along the same boundary as the hardware: a pure
//! [symbol encoder](mod@crate::encoder) turns framebuffer bytes into timed
//! pulse symbols, and a [`Ws2812Strip`](led_strip::Ws2812Strip) device owns a
//! channel-ordered framebuffer and pushes it through a
//! [`PulseChannel`](channel::PulseChannel) on demand. The channel is the
//! hardware seam: any peripheral that can transmit one timed symbol sequence
//! at a time (an RMT channel, a PIO state machine, a FlexIO shifter) plugs in
//! behind that trait.
//!
//! Control code should depend on the [`PixelStrip`](led_strip::PixelStrip)
//! capability trait rather than a concrete backend.
//!
//! # Example
//!
//! ```ignore
//! use embassy_time::Duration;
//! use ws2812_strip::led_strip::{PixelStrip, Ws2812Strip, colors};
//!
//! // `channel` is any PulseChannel implementation; one device per channel.
//! let mut strip = Ws2812Strip::<_>::new(8, channel)?;
//!
//! strip.fill(colors::BLUE);
//! strip.set_pixel(0, 255, 255, 255)?;               // staged only
//! strip.refresh(Duration::from_millis(100)).await?; // now on the wire
//!
//! strip.clear(Duration::from_millis(100)).await?;   // all off
//! let channel = strip.release();                    // device gone, channel reusable
//! ```
//!
//! Enable the `host` feature for `HostChannel`, a hardware-free channel
//! used by the integration tests.
#![no_std]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

pub mod channel;
pub mod color_order;
pub mod encoder;
mod error;
#[cfg(feature = "host")]
pub mod host;
pub mod led_strip;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
