//! Shared handles on the output streams.
//!
//! During `play` the renderer and the human player both write to stdout and
//! stderr while the engine owns them, so they hold clones of one
//! [`Terminal`]. Write failures are kept and surfaced after the game.

use crate::ui;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

#[derive(Clone)]
pub struct Terminal<'a> {
    out: Rc<RefCell<&'a mut dyn Write>>,
    err: Rc<RefCell<&'a mut dyn Write>>,
    failure: Rc<RefCell<Option<io::Error>>>,
}

impl<'a> Terminal<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
            err: Rc::new(RefCell::new(err)),
            failure: Rc::new(RefCell::new(None)),
        }
    }

    pub fn line(&self, text: &str) {
        let result = writeln!(self.out.borrow_mut(), "{}", text);
        self.record(result);
    }

    /// Writes without a newline and flushes, for input prompts.
    pub fn prompt(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let result = write!(out, "{}", text).and_then(|_| out.flush());
        drop(out);
        self.record(result);
    }

    pub fn error(&self, text: &str) {
        let result = ui::write_error(&mut **self.err.borrow_mut(), text);
        self.record(result);
    }

    fn record(&self, result: io::Result<()>) {
        if let Err(e) = result {
            let mut failure = self.failure.borrow_mut();
            if failure.is_none() {
                *failure = Some(e);
            }
        }
    }

    /// First write error seen so far, if any.
    pub fn take_failure(&self) -> Option<io::Error> {
        self.failure.borrow_mut().take()
    }
}
