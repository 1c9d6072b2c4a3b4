//! Click dispatch.
//!
//! Handlers are keyed by `(ButtonId, Signal)` and kept in registration order.
//! Firing calls every handler for the key synchronously with the button as
//! argument. The first handler error stops the dispatch and is returned to
//! the caller; nothing is swallowed here.

use std::collections::HashMap;
use std::fmt;

use anyhow::Context;

use crate::buttons::{ButtonId, SidebarButton};

pub type Handler = Box<dyn FnMut(&SidebarButton) -> anyhow::Result<()>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Click,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Click => write!(f, "click"),
        }
    }
}

#[derive(Default)]
pub struct SignalRouter {
    handlers: HashMap<(ButtonId, Signal), Vec<Handler>>,
}

impl SignalRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` for `(button, signal)`. Returns the number of
    /// handlers now registered under that key.
    ///
    /// Registering the same closure twice makes it fire twice.
    pub fn connect<F>(&mut self, button: ButtonId, signal: Signal, handler: F) -> usize
    where
        F: FnMut(&SidebarButton) -> anyhow::Result<()> + 'static,
    {
        let handlers = self.handlers.entry((button, signal)).or_default();
        handlers.push(Box::new(handler));
        tracing::trace!(%button, %signal, count = handlers.len(), "handler connected");
        handlers.len()
    }

    /// Invoke every handler registered for `(button.id(), signal)` in order.
    pub fn fire(&mut self, button: &SidebarButton, signal: Signal) -> anyhow::Result<()> {
        let id = button.id();
        let Some(handlers) = self.handlers.get_mut(&(id, signal)) else {
            tracing::debug!(%id, %signal, "no handlers registered");
            return Ok(());
        };

        tracing::debug!(
            %id,
            %signal,
            kind = button.kind(),
            caption = button.caption(),
            handlers = handlers.len(),
            "firing"
        );

        for (index, handler) in handlers.iter_mut().enumerate() {
            handler(button).with_context(|| {
                format!(
                    "{} handler #{} failed for {} button {:?}",
                    signal,
                    index,
                    button.kind(),
                    button.caption()
                )
            })?;
        }
        Ok(())
    }

    pub fn connection_count(&self, button: ButtonId, signal: Signal) -> usize {
        self.handlers.get(&(button, signal)).map_or(0, Vec::len)
    }

    /// Drop every handler registered for `button`. Returns how many were removed.
    pub fn disconnect_all(&mut self, button: ButtonId) -> usize {
        let mut removed = 0;
        self.handlers.retain(|(id, _), handlers| {
            if *id == button {
                removed += handlers.len();
                false
            } else {
                true
            }
        });
        if removed > 0 {
            tracing::trace!(%button, removed, "handlers disconnected");
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for SignalRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalRouter")
            .field("keys", &self.handlers.len())
            .field(
                "handlers",
                &self.handlers.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}
