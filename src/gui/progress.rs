// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    last: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, last: String::new() }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Fetching…");
    }
    fn log(&mut self, msg: &str) {
        self.last = s!(msg);
        self.set_status(msg);
    }
    fn stage_done(&mut self, stage: &str) {
        self.done += 1;
        logd!("GUI: stage {} ({}/{})", stage, self.done, self.total);
    }
    fn finish(&mut self) {
        // An incomplete run keeps the error line that `log` left behind.
        if self.done == self.total {
            self.set_status(join!("Ready. ", &self.last));
        }
    }
}
