//! A device abstraction for NeoPixel-style (WS2812) LED strips.
//!
//! [`Ws2812Strip`] owns a channel-ordered framebuffer of exactly
//! `3 × pixel_count` bytes and a [`PulseChannel`] it binds at construction.
//! Pixel writes are pure in-memory staging; [`refresh`](Ws2812Strip::refresh)
//! hands the whole frame to the channel and waits, bounded by a timeout, for
//! the transmission to finish. The [`PixelStrip`] trait is the capability
//! set callers should program against.
//!
//! # Example
//!
//! ```ignore
//! use embassy_time::Duration;
//! use ws2812_strip::led_strip::{Ws2812Strip, colors};
//!
//! let mut strip = Ws2812Strip::<_>::new(4, channel)?;
//! strip.set_pixel_rgb(0, colors::RED)?;
//! strip.set_pixel(3, 0, 0, 255)?;
//! strip.refresh(Duration::from_millis(100)).await?;
//! ```
//!
//! One device per channel: the encoder binding is channel-scoped, so a
//! second device constructed on the same channel would replace the first
//! one's waveform mapping. A strip plus a separate single-pixel indicator
//! must bind two distinct channels.

use core::marker::PhantomData;

use embassy_time::{Duration, with_timeout};
use heapless::Vec;
/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;
use smart_leds::RGB8;

use crate::channel::PulseChannel;
use crate::color_order::{ColorOrder, Grb};
use crate::encoder;
use crate::{Error, Result};

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// Framebuffer bytes per pixel: one per color component.
pub const BYTES_PER_PIXEL: usize = 3;

/// Default framebuffer capacity in bytes (256 pixels).
pub const DEFAULT_CAP: usize = 256 * BYTES_PER_PIXEL;

/// The capability set shared by pixel-addressable strip backends.
///
/// Control loops should depend on this contract, never on a concrete
/// backend; any backend implementing it can substitute for another.
pub trait PixelStrip {
    /// Number of pixels in the strip.
    fn pixel_count(&self) -> usize;

    /// Stage one pixel's color in the framebuffer. No hardware effect until
    /// the next [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `index` is out of range; the
    /// framebuffer is left unchanged.
    fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) -> Result<()>;

    /// Transmit the staged frame, waiting at most `timeout` for completion.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] when the bound elapses first,
    /// [`Error::TransmissionFailure`] on a peripheral fault.
    async fn refresh(&mut self, timeout: Duration) -> Result<()>;

    /// Turn every pixel off: zero-fill the frame, then refresh.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`refresh`](Self::refresh); none of its own.
    async fn clear(&mut self, timeout: Duration) -> Result<()>;

    /// Tear the device down, freeing its framebuffer.
    ///
    /// # Errors
    ///
    /// Backends with nothing to report always return `Ok(())`; consuming
    /// `self` makes double release a compile error rather than a runtime
    /// fault.
    fn release(self) -> Result<()>
    where
        Self: Sized;
}

/// A WS2812-class LED strip bound to one pulse channel.
///
/// `CAP` is the framebuffer capacity in bytes and must be at least
/// [`BYTES_PER_PIXEL`]` * pixel_count`; the default fits 256 pixels. The
/// byte order `O` is fixed at compile time ([`Grb`] for WS2812).
///
/// `refresh` and `clear` are the only suspension points and take
/// `&mut self`, so a second refresh cannot be issued while one is
/// outstanding on the same device.
pub struct Ws2812Strip<C, O = Grb, const CAP: usize = DEFAULT_CAP> {
    channel: C,
    pixel_count: usize,
    buffer: Vec<u8, CAP>,
    _order: PhantomData<O>,
}

impl<C, O, const CAP: usize> Ws2812Strip<C, O, CAP>
where
    C: PulseChannel,
    O: ColorOrder,
{
    /// Create a strip of `pixel_count` pixels bound to `channel`.
    ///
    /// Allocates the framebuffer zero-filled (all pixels off) and registers
    /// the WS2812 symbol encoder on the channel. On failure no partial
    /// device is constructed and `channel` is dropped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `pixel_count` is zero;
    /// [`Error::AllocationFailure`] when the frame does not fit `CAP`;
    /// any error reported by [`PulseChannel::bind_encoder`].
    pub fn new(pixel_count: usize, mut channel: C) -> Result<Self> {
        if pixel_count == 0 {
            return Err(Error::InvalidArgument);
        }
        let frame_bytes = pixel_count
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(Error::AllocationFailure)?;
        let mut buffer = Vec::new();
        buffer
            .resize(frame_bytes, 0)
            .map_err(|()| Error::AllocationFailure)?;
        channel.bind_encoder(encoder::encode)?;
        Ok(Self {
            channel,
            pixel_count,
            buffer,
            _order: PhantomData,
        })
    }

    /// Number of pixels in the strip.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Stage one pixel's color. In-memory only; repeated writes before a
    /// refresh coalesce, last write per index wins.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `index >= pixel_count()`; the
    /// framebuffer is left unchanged.
    pub fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) -> Result<()> {
        let start = self.cell_offset(index)?;
        let cell = self
            .buffer
            .get_mut(start..start.saturating_add(BYTES_PER_PIXEL))
            .ok_or(Error::InvalidArgument)?;
        cell.copy_from_slice(&O::ordered(red, green, blue));
        Ok(())
    }

    /// [`set_pixel`](Self::set_pixel) taking an [`Rgb`] value.
    ///
    /// # Errors
    ///
    /// Same as [`set_pixel`](Self::set_pixel).
    pub fn set_pixel_rgb(&mut self, index: usize, color: Rgb) -> Result<()> {
        self.set_pixel(index, color.r, color.g, color.b)
    }

    /// Stage `color` on every pixel.
    pub fn fill(&mut self, color: Rgb) {
        for cell in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            cell.copy_from_slice(&O::ordered(color.r, color.g, color.b));
        }
    }

    /// Read back the staged color of one pixel, or `None` when `index` is
    /// out of range. Reflects the framebuffer, not necessarily what the
    /// hardware currently shows.
    #[must_use]
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        let start = self.cell_offset(index).ok()?;
        let cell: [u8; 3] = self
            .buffer
            .get(start..start.saturating_add(BYTES_PER_PIXEL))?
            .try_into()
            .ok()?;
        let [red, green, blue] = O::unordered(cell);
        Some(Rgb::new(red, green, blue))
    }

    /// The staged frame in wire byte order.
    #[must_use]
    pub fn frame_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Transmit the staged frame and wait for the channel to finish,
    /// bounded by `timeout`.
    ///
    /// After a timeout the device stays usable but the frame the hardware
    /// shows is unspecified; issue another refresh to re-establish known
    /// state. Neither failure mode is retried here.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] when `timeout` elapses before the channel goes
    /// idle; [`Error::TransmissionFailure`] on a peripheral fault.
    pub async fn refresh(&mut self, timeout: Duration) -> Result<()> {
        self.channel.transmit(&self.buffer)?;
        match with_timeout(timeout, self.channel.wait_idle()).await {
            Ok(result) => result,
            Err(_timeout) => Err(Error::Timeout),
        }
    }

    /// Zero-fill the frame, then [`refresh`](Self::refresh).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`refresh`](Self::refresh).
    pub async fn clear(&mut self, timeout: Duration) -> Result<()> {
        self.buffer.fill(0);
        self.refresh(timeout).await
    }

    /// Detach the device, dropping the framebuffer and returning the
    /// channel for reuse. Consuming `self` makes any later operation on the
    /// released device a compile error.
    #[must_use]
    pub fn release(self) -> C {
        self.channel
    }

    /// Mutable access to the bound channel, e.g. to reconfigure a
    /// `HostChannel` between refreshes in tests.
    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    fn cell_offset(&self, index: usize) -> Result<usize> {
        if index >= self.pixel_count {
            return Err(Error::InvalidArgument);
        }
        index
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(Error::InvalidArgument)
    }
}

impl<C, O, const CAP: usize> PixelStrip for Ws2812Strip<C, O, CAP>
where
    C: PulseChannel,
    O: ColorOrder,
{
    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    fn set_pixel(&mut self, index: usize, red: u8, green: u8, blue: u8) -> Result<()> {
        Self::set_pixel(self, index, red, green, blue)
    }

    async fn refresh(&mut self, timeout: Duration) -> Result<()> {
        Self::refresh(self, timeout).await
    }

    async fn clear(&mut self, timeout: Duration) -> Result<()> {
        Self::clear(self, timeout).await
    }

    fn release(self) -> Result<()> {
        let _channel = Self::release(self);
        Ok(())
    }
}
