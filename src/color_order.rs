//! Per-pixel channel byte ordering.
//!
//! A protocol variant fixes the order in which color components travel on
//! the wire; WS2812 wants green first. The ordering is a type parameter of
//! the strip, chosen at construction time, never per call.

/// Maps an RGB triple to and from the wire byte order of one protocol
/// variant.
pub trait ColorOrder {
    /// Arrange `(red, green, blue)` into wire order.
    fn ordered(red: u8, green: u8, blue: u8) -> [u8; 3];

    /// Recover `[red, green, blue]` from wire-ordered bytes.
    fn unordered(wire: [u8; 3]) -> [u8; 3];
}

/// Green-red-blue ordering used by WS2812 strips.
#[derive(Clone, Copy, Debug)]
pub struct Grb;

impl ColorOrder for Grb {
    #[inline]
    fn ordered(red: u8, green: u8, blue: u8) -> [u8; 3] {
        [green, red, blue]
    }

    #[inline]
    fn unordered(wire: [u8; 3]) -> [u8; 3] {
        let [green, red, blue] = wire;
        [red, green, blue]
    }
}

/// Straight red-green-blue ordering used by some SK6812-class variants.
#[derive(Clone, Copy, Debug)]
pub struct Rgb;

impl ColorOrder for Rgb {
    #[inline]
    fn ordered(red: u8, green: u8, blue: u8) -> [u8; 3] {
        [red, green, blue]
    }

    #[inline]
    fn unordered(wire: [u8; 3]) -> [u8; 3] {
        wire
    }
}
