//! Abort parsing from inside a [`Context`] and pick the stream back up.
//!
//! The context refuses further events once its output budget is spent.
//! The refusal surfaces as an `Err` from [`Parser::parse`]; the parser
//! keeps its state, so after the caller refills the budget the next
//! chunk continues exactly where the stream stopped, even in the middle
//! of a control sequence.
use termflow_vte::{Context, Parser};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("event budget exhausted")]
struct BudgetExhausted;

struct BudgetedSink {
    budget: usize,
}

impl BudgetedSink {
    fn emit(&mut self, line: String) -> Result<(), BudgetExhausted> {
        if self.budget == 0 {
            return Err(BudgetExhausted);
        }
        self.budget -= 1;
        println!("{line}");
        Ok(())
    }
}

impl Context for BudgetedSink {
    type Error = BudgetExhausted;

    fn dispatch_char(&mut self, c: char) -> Result<(), BudgetExhausted> {
        self.emit(format!("char {c:?}"))
    }

    fn dispatch_invalid(
        &mut self,
        seq: &[char],
    ) -> Result<(), BudgetExhausted> {
        self.emit(format!("invalid {seq:?}"))
    }

    fn dispatch_esc(
        &mut self,
        intermediates: &[char],
        byte: u8,
    ) -> Result<(), BudgetExhausted> {
        self.emit(format!("esc {intermediates:?} {:?}", byte as char))
    }

    fn dispatch_csi(
        &mut self,
        params: &[char],
        intermediates: &[char],
        byte: u8,
    ) -> Result<(), BudgetExhausted> {
        self.emit(format!(
            "csi {params:?} {intermediates:?} {:?}",
            byte as char
        ))
    }

    fn dispatch_control_string(
        &mut self,
        prefix: u8,
        payload: &[char],
    ) -> Result<(), BudgetExhausted> {
        self.emit(format!("control string {:?} {payload:?}", prefix as char))
    }

    fn dispatch_ss2(&mut self, byte: u8) -> Result<(), BudgetExhausted> {
        self.emit(format!("ss2 {:?}", byte as char))
    }

    fn dispatch_ss3(&mut self, byte: u8) -> Result<(), BudgetExhausted> {
        self.emit(format!("ss3 {:?}", byte as char))
    }
}

fn main() {
    let mut parser = Parser::new();
    let mut sink = BudgetedSink { budget: 3 };

    let mut pending: &[u8] = b"abc\x1b[31mdef\x1b]0;title\x07";
    loop {
        match parser.parse(pending, &mut sink) {
            Ok(()) => break,
            Err(BudgetExhausted) => {
                // The refused event is dropped along with the rest of
                // its chunk; this demo just moves on to fresh input.
                println!("-- budget exhausted, refilling --");
                if parser.state_is_esc() {
                    println!("-- stopped right after ESC --");
                }
                sink.budget = 10;
                pending = b"\x1b]8;;\x07rest";
            },
        }
    }
}
