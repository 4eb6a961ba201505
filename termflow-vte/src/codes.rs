//! Wire-level byte values of the ECMA-48 sequence families.

/// Escape introducer.
pub const ESC: u8 = 0x1b;

/// Control Sequence Introducer lead, `[`.
pub const CSI_LEAD: u8 = 0x5b;

/// Operating System Command lead, `]`.
pub const OSC_LEAD: u8 = 0x5d;

/// Single Shift 2 lead, `N`.
pub const SS2_LEAD: u8 = 0x4e;

/// Single Shift 3 lead, `O`.
pub const SS3_LEAD: u8 = 0x4f;

/// Device Control String lead, `P`.
pub const DCS_LEAD: u8 = 0x50;

/// Start Of String lead, `X`.
pub const SOS_LEAD: u8 = 0x58;

/// Privacy Message lead, `^`.
pub const PM_LEAD: u8 = 0x5e;

/// Application Program Command lead, `_`.
pub const APC_LEAD: u8 = 0x5f;

/// Bell; terminates an OSC string.
pub const BEL: u8 = 0x07;

/// Cancel; aborts a pending sequence.
pub const CAN: u8 = 0x18;

/// Substitute; aborts a pending sequence.
pub const SUB: u8 = 0x1a;

/// Delete.
pub const DEL: u8 = 0x7f;

/// Final byte of the two-byte String Terminator, ESC `\`.
pub const ST_FINAL: u8 = 0x5c;
