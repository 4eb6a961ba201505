//! Callbacks invoked by the control stream parser.
//!
//! The [`Parser`](crate::Parser) walks a byte stream and breaks
//! it into the structural events of the ECMA-48 grammar. Those events
//! are handed to a [`Context`] implementation that owns all policy:
//! updating a terminal model, filtering, replaying bytes downstream, or
//! simply logging. Implementations receive one event per decoded code
//! point (two for the documented abort cases) in exact stream order and
//! should not attempt any further sequence parsing of their own.

/// Consumer-facing capability set for events recognized in the stream.
///
/// Sequence arguments are borrowed slices of code points owned by the
/// parser; they are valid only for the duration of the call and their
/// backing storage is reused between events. Final bytes and the
/// control string prefix are plain bytes, guaranteed ASCII by the
/// completion ranges of the grammar.
///
/// Every capability can refuse an event by returning `Err`; the error
/// aborts the current [`parse`](crate::Parser::parse) call and
/// surfaces to the caller, with parser state preserved at the failing
/// code point. Contexts that cannot fail use
/// [`std::convert::Infallible`] as their error type.
pub trait Context {
    /// Error type surfaced through `parse` when a dispatch refuses.
    type Error;

    /// A character outside any escape sequence. This covers printables,
    /// C0 controls in ground, DEL, and the control characters that are
    /// let through while a sequence is pending.
    fn dispatch_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// An ill-formed sequence. `seq` reproduces the rejected code
    /// points verbatim, starting with the ESC that opened the sequence,
    /// so the context can log or replay them.
    fn dispatch_invalid(&mut self, seq: &[char]) -> Result<(), Self::Error>;

    /// A completed escape sequence: ESC, zero or more intermediates,
    /// and a final byte in `0x30..=0x7e`.
    fn dispatch_esc(
        &mut self,
        intermediates: &[char],
        byte: u8,
    ) -> Result<(), Self::Error>;

    /// A completed control sequence: CSI, parameter bytes, intermediate
    /// bytes, and a final byte in `0x40..=0x7e`. Parameters arrive as
    /// raw code points in `0x30..=0x3f`; splitting and numeric
    /// interpretation are left to the context.
    fn dispatch_csi(
        &mut self,
        params: &[char],
        intermediates: &[char],
        byte: u8,
    ) -> Result<(), Self::Error>;

    /// A completed OSC/DCS/SOS/PM/APC string. `prefix` is the byte that
    /// introduced it (`]`, `P`, `X`, `^` or `_`) and `payload` is every
    /// code point collected up to, and not including, the terminator.
    fn dispatch_control_string(
        &mut self,
        prefix: u8,
        payload: &[char],
    ) -> Result<(), Self::Error>;

    /// Single Shift 2: the next character selects from G2. `byte` is
    /// the shifted final in `0x20..=0x7e`.
    fn dispatch_ss2(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Single Shift 3: the next character selects from G3.
    fn dispatch_ss3(&mut self, byte: u8) -> Result<(), Self::Error>;
}
