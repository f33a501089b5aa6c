//! Crate-wide error taxonomy.
//!
//! Every failure is surfaced to the immediate caller as a typed result;
//! nothing in this crate retries internally.

use derive_more::{Display, Error};

/// Errors reported by strip devices and pulse channels.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An argument was rejected before any hardware access: a pixel index at
    /// or past the end of the strip, or a zero pixel count at construction.
    /// The framebuffer is left unchanged.
    #[display("invalid argument")]
    InvalidArgument,

    /// The transmission did not finish within the caller's bound. The device
    /// stays usable, but the frame shown by the hardware is unspecified until
    /// the next successful refresh.
    #[display("transmission timed out")]
    Timeout,

    /// The pulse channel reported a fault distinct from a timeout. Retrying
    /// without fixing the channel configuration will not help.
    #[display("transmission failure")]
    TransmissionFailure,

    /// The framebuffer for the requested pixel count does not fit the
    /// device's capacity. No partial device is constructed.
    #[display("allocation failure")]
    AllocationFailure,
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
