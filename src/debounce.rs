//! Trailing-edge Debounce
//!
//! Each trigger advances a generation counter and sleeps; only the call whose
//! generation is still current when the timer fires gets to run.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

/// Monotonic ticket counter; the most recently issued ticket is current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Issue a new ticket, superseding every earlier one
    pub fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[derive(Clone, Copy)]
pub struct Debounce {
    generation: StoredValue<Generation>,
    delay_ms: u32,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: StoredValue::new(Generation::default()),
            delay_ms,
        }
    }

    /// Schedule `f`; supersedes any call still waiting
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let generation = self.generation;
        let mut ticket = 0;
        generation.update_value(|g| ticket = g.advance());
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.with_value(|g| g.is_current(ticket)) {
                f();
            }
        });
    }
}
