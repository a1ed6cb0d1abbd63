//! The transport boundary.

/// Byte-level transport the driver runs over, typically a UART.
///
/// The driver owns exactly one transport instance and is the only writer to
/// it. Reception is single-byte and not continuous: the transport delivers
/// one byte per arming, and the driver re-arms from inside every byte
/// callback and from the link watchdog. The host owns the asynchronous
/// plumbing (DMA, interrupts, an async runtime) behind both methods and
/// calls [`Wt61::on_byte`](crate::Wt61::on_byte) when the armed byte lands.
pub trait Transport {
    /// Transmit a frame, fire-and-forget.
    fn send(&mut self, frame: &[u8]);

    /// Arm reception of the next single byte.
    fn arm_receive(&mut self);
}
