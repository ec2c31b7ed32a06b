//! `TerminalSink`: presentation-layer implementation of `OutputSink`.
//!
//! Every remote line is printed to stdout as `"<host>\t| <line>"`, stdout and
//! stderr alike. Host-tagged output is never suppressed by `--quiet`.

use owo_colors::OwoColorize as _;

use crate::application::ports::OutputSink;
use crate::domain::{Host, OutputStream};
use crate::output::OutputContext;

pub struct TerminalSink<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalSink<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Format one tagged output line.
    #[must_use]
    pub fn format_line(&self, host: &Host, line: &str) -> String {
        format!("{}\t| {line}", host.name.style(self.ctx.styles.host))
    }
}

impl OutputSink for TerminalSink<'_> {
    fn running(&self, host: &Host, invocation: &str) {
        println!("{}", self.format_line(host, &format!("Running: {invocation}")));
    }

    fn line(&self, host: &Host, _stream: OutputStream, line: &str) {
        println!("{}", self.format_line(host, line));
    }
}
