//! The boundary between strip devices and the transmission peripheral.
//!
//! Implement [`PulseChannel`] for whatever peripheral pushes timed symbols
//! onto the wire. The crate ships `HostChannel` (feature `host`) for
//! hardware-free testing.

use crate::Result;
use crate::encoder::{EncodeResult, Symbol};

/// Expands raw bytes into pulse symbols.
///
/// Registered per channel via [`PulseChannel::bind_encoder`]; the channel
/// invokes it while transmitting to turn framebuffer bytes into the
/// waveform.
pub type ByteEncoder = fn(&[u8], &mut [Symbol]) -> EncodeResult;

/// A peripheral resource that transmits one timed symbol sequence at a time.
///
/// The encoder binding is channel-scoped, not device-scoped: rebinding
/// replaces whatever was bound before, so two devices sharing one channel
/// would silently corrupt each other's waveform mapping. Callers must keep
/// one device per channel.
pub trait PulseChannel {
    /// Register the encoder used to expand bytes pushed by
    /// [`transmit`](Self::transmit). Called once at device construction.
    ///
    /// # Errors
    ///
    /// [`Error::TransmissionFailure`](crate::Error::TransmissionFailure) if
    /// the channel cannot accept a translator (e.g. misconfigured
    /// peripheral).
    fn bind_encoder(&mut self, encoder: ByteEncoder) -> Result<()>;

    /// Start transmitting `bytes` through the bound encoder.
    ///
    /// Returns once the transfer is started; completion is observed via
    /// [`wait_idle`](Self::wait_idle).
    ///
    /// # Errors
    ///
    /// [`Error::TransmissionFailure`](crate::Error::TransmissionFailure) if
    /// the transfer cannot be started.
    fn transmit(&mut self, bytes: &[u8]) -> Result<()>;

    /// Wait until the in-flight transmission completes.
    ///
    /// Resolves immediately when the channel is already idle. This is the
    /// only suspension point the strip device relies on; the refresh timeout
    /// is applied around it by the device, not by the channel.
    ///
    /// # Errors
    ///
    /// [`Error::TransmissionFailure`](crate::Error::TransmissionFailure) on
    /// a peripheral-reported fault.
    async fn wait_idle(&mut self) -> Result<()>;
}
