//! What the demo controller and compose box remember between clicks.

use std::collections::BTreeSet;
use std::fmt;

use crate::buttons::{StreamButton, UserButton};
use crate::controller::{Controller, WriteBox};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Narrow {
    #[default]
    AllMessages,
    AllPrivate,
    Stream { stream_id: u64, name: String },
    User { user_id: u64, name: String },
}

impl fmt::Display for Narrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narrow::AllMessages => write!(f, "All messages"),
            Narrow::AllPrivate => write!(f, "All private messages"),
            Narrow::Stream { name, .. } => write!(f, "Stream #{}", name),
            Narrow::User { name, .. } => write!(f, "PMs with {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComposeTarget {
    #[default]
    Closed,
    Stream { name: String },
    Private { email: String, recipients: BTreeSet<u64> },
}

impl fmt::Display for ComposeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeTarget::Closed => write!(f, "compose closed"),
            ComposeTarget::Stream { name } => write!(f, "compose to #{}", name),
            ComposeTarget::Private { email, .. } => write!(f, "compose to {}", email),
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub narrow: Narrow,
    pub compose: ComposeTarget,
}

impl AppState {
    pub fn status_line(&self) -> String {
        format!("{} | {}", self.narrow, self.compose)
    }
}

impl Controller for AppState {
    fn show_all_messages(&mut self) -> anyhow::Result<()> {
        self.narrow = Narrow::AllMessages;
        tracing::info!(narrow = %self.narrow, "narrowed");
        Ok(())
    }

    fn show_all_private_messages(&mut self) -> anyhow::Result<()> {
        self.narrow = Narrow::AllPrivate;
        tracing::info!(narrow = %self.narrow, "narrowed");
        Ok(())
    }

    fn narrow_to_stream(&mut self, button: &StreamButton) -> anyhow::Result<()> {
        self.narrow = Narrow::Stream {
            stream_id: button.stream_id(),
            name: button.caption().to_string(),
        };
        tracing::info!(narrow = %self.narrow, "narrowed");
        Ok(())
    }

    fn narrow_to_user(&mut self, button: &UserButton) -> anyhow::Result<()> {
        self.narrow = Narrow::User {
            user_id: button.user_id(),
            name: button.caption().to_string(),
        };
        tracing::info!(narrow = %self.narrow, "narrowed");
        Ok(())
    }
}

impl WriteBox for AppState {
    fn stream_box_view(&mut self, button: &StreamButton) -> anyhow::Result<()> {
        self.compose = ComposeTarget::Stream {
            name: button.caption().to_string(),
        };
        tracing::debug!(compose = %self.compose, "compose box switched");
        Ok(())
    }

    fn private_box_view(&mut self, button: &UserButton) -> anyhow::Result<()> {
        self.compose = ComposeTarget::Private {
            email: button.email().to_string(),
            recipients: button.recipients().clone(),
        };
        tracing::debug!(compose = %self.compose, "compose box switched");
        Ok(())
    }
}
