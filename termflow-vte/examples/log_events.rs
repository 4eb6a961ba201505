//! Print every event the parser recognizes in a sample byte stream.
//!
//! Run with `RUST_LOG=debug` to also see the parser's own trace for
//! rejected sequences.
use std::convert::Infallible;
use termflow_vte::{Context, Parser};

#[derive(Default)]
struct LoggingContext {
    seq: usize,
}

impl LoggingContext {
    fn emit(&mut self, line: String) {
        self.seq += 1;
        println!("{:02}: {line}", self.seq);
    }
}

impl Context for LoggingContext {
    type Error = Infallible;

    fn dispatch_char(&mut self, c: char) -> Result<(), Infallible> {
        self.emit(format!("char {c:?}"));
        Ok(())
    }

    fn dispatch_invalid(&mut self, seq: &[char]) -> Result<(), Infallible> {
        self.emit(format!("invalid {seq:?}"));
        Ok(())
    }

    fn dispatch_esc(
        &mut self,
        intermediates: &[char],
        byte: u8,
    ) -> Result<(), Infallible> {
        self.emit(format!(
            "esc intermediates={intermediates:?} final={:?}",
            byte as char
        ));
        Ok(())
    }

    fn dispatch_csi(
        &mut self,
        params: &[char],
        intermediates: &[char],
        byte: u8,
    ) -> Result<(), Infallible> {
        self.emit(format!(
            "csi params={params:?} intermediates={intermediates:?} final={:?}",
            byte as char
        ));
        Ok(())
    }

    fn dispatch_control_string(
        &mut self,
        prefix: u8,
        payload: &[char],
    ) -> Result<(), Infallible> {
        self.emit(format!(
            "control string prefix={:?} payload={:?}",
            prefix as char,
            payload.iter().collect::<String>()
        ));
        Ok(())
    }

    fn dispatch_ss2(&mut self, byte: u8) -> Result<(), Infallible> {
        self.emit(format!("ss2 {:?}", byte as char));
        Ok(())
    }

    fn dispatch_ss3(&mut self, byte: u8) -> Result<(), Infallible> {
        self.emit(format!("ss3 {:?}", byte as char));
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let mut parser = Parser::new();
    let mut context = LoggingContext::default();

    let bytes: &[u8] = b"Hello \x1b[1;31mworld\x1b[0m\n\
        \x1b]0;window title\x07\
        \x1bPq#0;2;0;0;0\x1b\\\
        \x1b(B\x1bNA\
        \x1b[12;\x18recovered";

    // Feed in small chunks to show that sequences survive boundaries.
    for chunk in bytes.chunks(7) {
        parser.parse(chunk, &mut context).unwrap();
    }
}
