use crate::error::{Error, Result};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};

/// Number of visited nodes between two polls of the abort flag and deadline.
pub(crate) const CHECK_INTERVAL: usize = 4096;

pub(crate) struct Interrupt<'a> {
    abort_flag: Option<&'a AtomicBool>,
    deadline: Option<Instant>,
    ticks: usize,
}

impl<'a> Interrupt<'a> {
    pub(crate) fn new(abort_flag: Option<&'a AtomicBool>, deadline: Option<Instant>) -> Self {
        Self {
            abort_flag,
            deadline,
            ticks: 0,
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        let aborted = self
            .abort_flag
            .map_or(false, |flag| flag.load(Ordering::Relaxed));
        let expired = self
            .deadline
            .map_or(false, |deadline| Instant::now() >= deadline);
        if aborted || expired {
            Err(Error::Aborted)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub(crate) fn tick(&mut self) -> Result<()> {
        self.ticks += 1;
        if self.ticks % CHECK_INTERVAL == 0 {
            self.check()
        } else {
            Ok(())
        }
    }
}
