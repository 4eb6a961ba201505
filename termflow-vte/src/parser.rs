//! The resumable ECMA-48 state machine.
//!
//! [`Parser::parse`] pulls scalars out of a [`Scanner`] bound to the
//! incoming chunk and walks them through the escape sequence grammar,
//! reporting every recognized structure to a [`Context`]. All state
//! lives in the parser itself, so a sequence split across two chunks
//! parses exactly like the concatenated input.

use crate::codes;
use crate::context::Context;
use crate::enums::State;
use crate::scanner::{Carry, Scanner};
use log::debug;
use std::mem;

/// Initial capacity of the parameter and intermediate accumulators.
/// Real sequences fit well within this; the buffers grow if one does
/// not.
const BUF_CAPACITY: usize = 256;

/// Streaming recognizer for escape sequences embedded in a UTF-8 byte
/// stream.
///
/// The parser owns its continuation: the grammar state, the parameter
/// and intermediate accumulators, and any partially decoded scalar. It
/// holds no reference to the context; one is borrowed per
/// [`parse`](Self::parse) call.
pub struct Parser {
    state: State,
    pbytes: Vec<char>,
    ibytes: Vec<char>,
    scratch: Vec<char>,
    carry: Carry,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::default(),
            pbytes: Vec::with_capacity(BUF_CAPACITY),
            ibytes: Vec::with_capacity(BUF_CAPACITY),
            scratch: Vec::with_capacity(BUF_CAPACITY),
            carry: Carry::default(),
        }
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive one chunk of bytes through the state machine.
    ///
    /// Events are dispatched to `context` in stream order as they are
    /// recognized. An `Err` from any dispatch aborts the call and is
    /// returned as-is; state is preserved at the failing code point and
    /// the next `parse` call continues from there. The unread remainder
    /// of the failing chunk is not replayed.
    pub fn parse<C: Context>(
        &mut self,
        data: &[u8],
        context: &mut C,
    ) -> Result<(), C::Error> {
        let mut scanner = Scanner::new();
        scanner.assign(data, "utf-8");
        scanner.set_carry(mem::take(&mut self.carry));

        let mut result = Ok(());
        while let Some(c) = scanner.next() {
            if let Err(err) = self.advance(c, context) {
                result = Err(err);
                break;
            }
        }

        self.carry = scanner.take_carry();
        result
    }

    /// Force the state machine back to ground, discarding any pending
    /// sequence and partially decoded scalar.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.carry = Carry::default();
    }

    /// Whether the machine stopped directly after an ESC. Flow control
    /// layers use this to decide if injected input would corrupt a
    /// sequence in flight.
    #[must_use]
    pub fn state_is_esc(&self) -> bool {
        self.state == State::Escape
    }

    fn advance<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match self.state {
            State::Ground => self.ground(c, context),
            State::Escape => self.escape(c, context),
            State::EscapeIntermediate => self.escape_intermediate(c, context),
            State::CsiParameter => self.csi_parameter(c, context),
            State::CsiIntermediate => self.csi_intermediate(c, context),
            State::Ss2 | State::Ss3 => self.single_shift(c, context),
            State::OscString => self.osc_string(c, context),
            State::ControlString => self.control_string(c, context),
            State::OscEscape | State::ControlStringEscape => {
                self.string_escape(c, context)
            },
        }
    }

    fn ground<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        if u32::from(c) == 0x1b {
            self.ibytes.clear();
            self.state = State::Escape;
        } else {
            context.dispatch_char(c)?;
        }
        Ok(())
    }

    /// Second byte of a sequence: either a family lead or the final of
    /// an independent ESC F sequence.
    fn escape<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            // [
            0x5b => {
                self.pbytes.clear();
                self.state = State::CsiParameter;
            },
            // ]
            0x5d => {
                self.pbytes.clear();
                self.pbytes.push(c);
                self.state = State::OscString;
            },
            // N
            0x4e => self.state = State::Ss2,
            // O
            0x4f => self.state = State::Ss3,
            // P (DCS), X (SOS), ^ (PM), _ (APC)
            0x50 | 0x58 | 0x5e | 0x5f => {
                self.pbytes.clear();
                self.pbytes.push(c);
                self.state = State::ControlString;
            },
            0x1b => {
                self.reject_sequence(context, &[])?;
                self.ibytes.clear();
            },
            0x18 | 0x1a => {
                self.reject_sequence(context, &[])?;
                context.dispatch_char(c)?;
                self.state = State::Ground;
            },
            0x00..=0x1f => context.dispatch_char(c)?,
            0x20..=0x2f => {
                self.ibytes.push(c);
                self.state = State::EscapeIntermediate;
            },
            0x30..=0x7e => {
                context.dispatch_esc(&self.ibytes, c as u8)?;
                self.state = State::Ground;
            },
            0x7f => context.dispatch_char(c)?,
            _ => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
        }
        Ok(())
    }

    fn escape_intermediate<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            0x7f => context.dispatch_char(c)?,
            0x30..=0x7e => {
                context.dispatch_esc(&self.ibytes, c as u8)?;
                self.state = State::Ground;
            },
            0x20..=0x2f => self.ibytes.push(c),
            0x1b => {
                self.reject_sequence(context, &[])?;
                self.ibytes.clear();
                self.state = State::Escape;
            },
            0x18 | 0x1a => {
                self.reject_sequence(context, &[])?;
                context.dispatch_char(c)?;
                self.state = State::Ground;
            },
            0x00..=0x1f => context.dispatch_char(c)?,
            _ => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
        }
        Ok(())
    }

    /// CSI P ... P I ... I F, positioned in the parameter run.
    fn csi_parameter<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            0x7f => context.dispatch_char(c)?,
            0x40..=0x7e => {
                context.dispatch_csi(&self.pbytes, &[], c as u8)?;
                self.state = State::Ground;
            },
            0x30..=0x3f => self.pbytes.push(c),
            0x20..=0x2f => {
                self.ibytes.push(c);
                self.state = State::CsiIntermediate;
            },
            0x1b => {
                self.reject_sequence(context, &[])?;
                self.ibytes.clear();
                self.state = State::Escape;
            },
            0x18 | 0x1a => {
                self.reject_sequence(context, &[])?;
                context.dispatch_char(c)?;
                self.state = State::Ground;
            },
            0x00..=0x1f => context.dispatch_char(c)?,
            _ => {
                self.reject_sequence(context, &[])?;
                self.state = State::Ground;
            },
        }
        Ok(())
    }

    /// CSI P ... P I ... I F, positioned in the intermediate run. A
    /// parameter byte is illegal from here on.
    fn csi_intermediate<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            0x7f => context.dispatch_char(c)?,
            0x40..=0x7e => {
                context.dispatch_csi(&self.pbytes, &self.ibytes, c as u8)?;
                self.state = State::Ground;
            },
            0x30..=0x3f => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
            0x20..=0x2f => self.ibytes.push(c),
            0x1b => {
                self.reject_sequence(context, &[])?;
                self.ibytes.clear();
                self.state = State::Escape;
            },
            0x18 | 0x1a => {
                self.reject_sequence(context, &[])?;
                context.dispatch_char(c)?;
                self.state = State::Ground;
            },
            0x00..=0x1f => context.dispatch_char(c)?,
            _ => {
                self.reject_sequence(context, &[])?;
                self.state = State::Ground;
            },
        }
        Ok(())
    }

    fn single_shift<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            0x1b => {
                self.reject_sequence(context, &[])?;
                self.ibytes.clear();
                self.state = State::Escape;
            },
            0x18 | 0x1a => {
                self.reject_sequence(context, &[])?;
                context.dispatch_char(c)?;
                self.state = State::Ground;
            },
            0x00..=0x1f => context.dispatch_char(c)?,
            0x20..=0x7e => {
                if self.state == State::Ss2 {
                    context.dispatch_ss2(c as u8)?;
                } else {
                    context.dispatch_ss3(c as u8)?;
                }
                self.state = State::Ground;
            },
            // DEL and high bytes cannot be shifted finals; the shift
            // stays pending.
            _ => {
                self.reject_sequence(context, &[])?;
                context.dispatch_char(c)?;
            },
        }
        Ok(())
    }

    /// OSC payload; BEL or ST terminates, a stray C0 aborts.
    fn osc_string<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            0x07 => {
                self.finish_control_string(context)?;
                self.state = State::Ground;
            },
            0x00..=0x06 => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
            // BS..CR may appear inside the payload.
            0x08..=0x0d => self.ibytes.push(c),
            0x1b => self.state = State::OscEscape,
            0x0e..=0x1f => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
            _ => self.ibytes.push(c),
        }
        Ok(())
    }

    /// DCS/SOS/PM/APC payload; only ST terminates. BEL is below 0x08
    /// here and aborts like any other stray control.
    fn control_string<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        match u32::from(c) {
            0x00..=0x07 => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
            0x08..=0x0d => self.ibytes.push(c),
            0x1b => self.state = State::ControlStringEscape,
            0x0e..=0x1f => {
                self.reject_sequence(context, &[c])?;
                self.state = State::Ground;
            },
            _ => self.ibytes.push(c),
        }
        Ok(())
    }

    /// Saw ESC inside a string payload; only `\` (completing ST) keeps
    /// the sequence valid.
    fn string_escape<C: Context>(
        &mut self,
        c: char,
        context: &mut C,
    ) -> Result<(), C::Error> {
        if u32::from(c) == u32::from(codes::ST_FINAL) {
            self.finish_control_string(context)?;
        } else {
            self.reject_sequence(context, &[char::from(codes::ESC), c])?;
        }
        self.state = State::Ground;
        Ok(())
    }

    fn finish_control_string<C: Context>(
        &mut self,
        context: &mut C,
    ) -> Result<(), C::Error> {
        // pbytes holds exactly the prefix, seeded on string entry.
        let prefix = self.pbytes[0] as u8;
        context.dispatch_control_string(prefix, &self.ibytes)
    }

    /// Reassemble the pending sequence fragment, append any terminating
    /// code points, and hand the whole rejected run to the context.
    fn reject_sequence<C: Context>(
        &mut self,
        context: &mut C,
        trailing: &[char],
    ) -> Result<(), C::Error> {
        self.scratch.clear();
        self.scratch.push(char::from(codes::ESC));
        match self.state {
            State::Ground | State::Escape => {},
            State::EscapeIntermediate => {
                self.scratch.extend_from_slice(&self.ibytes);
            },
            State::CsiParameter => {
                self.scratch.push(char::from(codes::CSI_LEAD));
                self.scratch.extend_from_slice(&self.pbytes);
            },
            State::CsiIntermediate => {
                self.scratch.push(char::from(codes::CSI_LEAD));
                self.scratch.extend_from_slice(&self.pbytes);
                self.scratch.extend_from_slice(&self.ibytes);
            },
            State::Ss2 => self.scratch.push(char::from(codes::SS2_LEAD)),
            State::Ss3 => self.scratch.push(char::from(codes::SS3_LEAD)),
            State::OscString
            | State::OscEscape
            | State::ControlString
            | State::ControlStringEscape => {
                self.scratch.extend_from_slice(&self.pbytes);
                self.scratch.extend_from_slice(&self.ibytes);
            },
        }
        self.scratch.extend_from_slice(trailing);

        debug!("[invalid sequence] {:?}", self.scratch);
        context.dispatch_invalid(&self.scratch)
    }
}
