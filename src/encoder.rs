//! Expansion of framebuffer bytes into the WS2812 one-wire pulse train.
//!
//! A WS2812 controller distinguishes a 0 bit from a 1 bit purely by the
//! ratio of high to low pulse widths, so the [`ZERO`] and [`ONE`] templates
//! below must match the datasheet timings exactly. [`encode`] is the only
//! function here: a pure, deterministic mapping from bytes to symbols with
//! no state of its own.

// WS2812 pulse timings (nanoseconds).
const T0H_NS: u32 = 350;
const T0L_NS: u32 = 900;
const T1H_NS: u32 = 900;
const T1L_NS: u32 = 350;

/// Duration of one pulse-channel tick in nanoseconds: 1 / (80 MHz / 2).
pub const TICK_NS: u32 = 25;

/// One timed high-then-low pulse pair representing a single protocol bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Symbol {
    /// Ticks the line is driven high.
    pub high_ticks: u16,
    /// Ticks the line is driven low.
    pub low_ticks: u16,
}

impl Symbol {
    #[expect(clippy::cast_possible_truncation, reason = "tick counts fit u16")]
    const fn from_ns(high_ns: u32, low_ns: u32) -> Self {
        Self {
            high_ticks: (high_ns / TICK_NS) as u16,
            low_ticks: (low_ns / TICK_NS) as u16,
        }
    }
}

/// Symbol transmitted for a logical 0 bit.
pub const ZERO: Symbol = Symbol::from_ns(T0H_NS, T0L_NS);

/// Symbol transmitted for a logical 1 bit.
pub const ONE: Symbol = Symbol::from_ns(T1H_NS, T1L_NS);

/// How much input [`encode`] consumed and output it produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodeResult {
    /// Source bytes fully expanded into symbols.
    pub bytes_translated: usize,
    /// Symbols written to the destination.
    pub symbols_emitted: usize,
}

/// Expand `src` into pulse symbols, most-significant bit first.
///
/// Writes `min(8 * src.len(), dest.len())` symbols: bit value 1 becomes
/// [`ONE`], bit value 0 becomes [`ZERO`]. `bytes_translated` counts only
/// bytes whose eight symbols all fit in `dest`.
///
/// An empty source or destination is a valid no-op, not an error; it is used
/// by channel initialization probing.
pub fn encode(src: &[u8], dest: &mut [Symbol]) -> EncodeResult {
    let mut emitted = 0_usize;
    'bytes: for &byte in src {
        for bit in 0..8_u8 {
            let Some(slot) = dest.get_mut(emitted) else {
                break 'bytes;
            };
            *slot = if byte & (1 << (7 - bit)) == 0 { ZERO } else { ONE };
            emitted = emitted.saturating_add(1);
        }
    }
    EncodeResult {
        bytes_translated: emitted / 8,
        symbols_emitted: emitted,
    }
}
