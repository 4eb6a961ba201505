/// Parser positions within the escape sequence grammar.
///
/// Every state is resumable: a chunk boundary can fall between any two
/// code points and the next chunk picks up exactly where this one
/// stopped. There are no terminal states.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Baseline; printable and control characters flow through.
    #[default]
    Ground,
    /// Just saw ESC, waiting for the byte that names the family.
    Escape,
    /// Collecting intermediates of an ESC sequence.
    EscapeIntermediate,
    /// After ESC `[`, collecting parameter bytes.
    CsiParameter,
    /// After CSI parameters, collecting intermediates.
    CsiIntermediate,
    /// After ESC `N`, one final byte pending.
    Ss2,
    /// After ESC `O`, one final byte pending.
    Ss3,
    /// Inside an OSC payload; BEL or ST terminates.
    OscString,
    /// Inside OSC, just saw ESC, expecting `\` to complete ST.
    OscEscape,
    /// Inside a DCS/SOS/PM/APC payload; only ST terminates.
    ControlString,
    /// Inside a control string, just saw ESC, expecting `\`.
    ControlStringEscape,
}
