//! Hardware-free pulse channel for host-side testing.
//!
//! [`HostChannel`] stands in for a transmission peripheral: it records every
//! byte frame pushed at it, runs the bound encoder so tests can inspect the
//! exact symbol sequence that would reach the wire, and resolves
//! `wait_idle` according to a configurable [`Completion`] policy.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use heapless::Vec;

use crate::channel::{ByteEncoder, PulseChannel};
use crate::encoder::{Symbol, ZERO};
use crate::{Error, Result};

/// Largest byte frame a [`HostChannel`] can capture (256 pixels).
pub const FRAME_CAP: usize = 768;

/// Symbol capacity matching [`FRAME_CAP`] (eight symbols per byte).
pub const SYMBOL_CAP: usize = FRAME_CAP * 8;

/// Signal type used by [`Completion::OnSignal`].
pub type CompletionSignal = Signal<CriticalSectionRawMutex, ()>;

/// How a [`HostChannel`] resolves [`PulseChannel::wait_idle`].
#[derive(Clone, Copy)]
pub enum Completion {
    /// Finish as soon as it is awaited.
    Immediate,
    /// Finish once the signal fires (a latched signal finishes at once).
    OnSignal(&'static CompletionSignal),
    /// Never finish; the device's refresh timeout is the only way out.
    Never,
    /// Report a peripheral fault.
    Fault,
}

/// A recording [`PulseChannel`] with scriptable completion behavior.
pub struct HostChannel {
    completion: Completion,
    encoder: Option<ByteEncoder>,
    in_flight: bool,
    transmit_count: usize,
    last_frame: Vec<u8, FRAME_CAP>,
    last_symbols: Vec<Symbol, SYMBOL_CAP>,
}

impl HostChannel {
    /// Create a channel resolving `wait_idle` per `completion`.
    #[must_use]
    pub const fn new(completion: Completion) -> Self {
        Self {
            completion,
            encoder: None,
            in_flight: false,
            transmit_count: 0,
            last_frame: Vec::new(),
            last_symbols: Vec::new(),
        }
    }

    /// Change the completion policy for subsequent transmissions.
    pub fn set_completion(&mut self, completion: Completion) {
        self.completion = completion;
    }

    /// How many transmissions were started on this channel.
    #[must_use]
    pub const fn transmit_count(&self) -> usize {
        self.transmit_count
    }

    /// The raw bytes of the most recently transmitted frame.
    #[must_use]
    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    /// The symbol expansion of the most recent frame, as produced by the
    /// bound encoder.
    #[must_use]
    pub fn last_symbols(&self) -> &[Symbol] {
        &self.last_symbols
    }
}

impl PulseChannel for HostChannel {
    fn bind_encoder(&mut self, encoder: ByteEncoder) -> Result<()> {
        self.encoder = Some(encoder);
        Ok(())
    }

    fn transmit(&mut self, bytes: &[u8]) -> Result<()> {
        let encoder = self.encoder.ok_or(Error::TransmissionFailure)?;

        self.last_frame.clear();
        self.last_frame
            .extend_from_slice(bytes)
            .map_err(|()| Error::TransmissionFailure)?;

        let wanted = bytes.len().saturating_mul(8).min(SYMBOL_CAP);
        self.last_symbols.clear();
        self.last_symbols
            .resize(wanted, ZERO)
            .map_err(|()| Error::TransmissionFailure)?;
        let counts = encoder(bytes, &mut self.last_symbols);
        self.last_symbols.truncate(counts.symbols_emitted);

        self.transmit_count = self.transmit_count.saturating_add(1);
        self.in_flight = true;
        Ok(())
    }

    async fn wait_idle(&mut self) -> Result<()> {
        if !self.in_flight {
            return Ok(());
        }
        match self.completion {
            Completion::Immediate => {
                self.in_flight = false;
                Ok(())
            }
            Completion::OnSignal(signal) => {
                signal.wait().await;
                self.in_flight = false;
                Ok(())
            }
            Completion::Never => {
                core::future::pending::<()>().await;
                Ok(())
            }
            Completion::Fault => {
                self.in_flight = false;
                Err(Error::TransmissionFailure)
            }
        }
    }
}
