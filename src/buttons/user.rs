use std::collections::BTreeSet;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{ButtonId, ButtonModel};
use crate::controller::Wiring;
use crate::error::{Result, SidebarError};
use crate::signal::{Signal, SignalRouter};

const USER_GLYPH: &str = "  \u{2022}  ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub full_name: String,
    pub email: String,
    pub user_id: u64,
}

impl UserRecord {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, user_id: u64) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            user_id,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(SidebarError::MissingField {
                record: "user",
                field: "full_name",
            });
        }
        if self.email.trim().is_empty() {
            return Err(SidebarError::MissingField {
                record: "user",
                field: "email",
            });
        }
        if !self.email.contains('@') {
            return Err(SidebarError::InvalidField {
                record: "user",
                field: "email",
                reason: format!("{:?} has no '@'", self.email),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UserButton {
    id: ButtonId,
    pub(super) model: ButtonModel,
    user_id: u64,
    email: String,
    recipients: BTreeSet<u64>,
}

impl UserButton {
    /// `own_user_id` is the viewer; together with the peer it forms the
    /// fixed recipient set of the private conversation. `color` names a
    /// palette attribute for the whole line.
    pub fn new(
        user: &UserRecord,
        own_user_id: u64,
        color: Option<String>,
        count: i64,
        router: &mut SignalRouter,
        wiring: &Wiring,
    ) -> Result<Self> {
        user.validate()?;
        if color.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(SidebarError::InvalidField {
                record: "user",
                field: "color",
                reason: "empty attribute name".to_string(),
            });
        }

        let recipients = BTreeSet::from([user.user_id, own_user_id]);

        let id = ButtonId::new();
        let target = wiring.clone();
        router.connect(id, Signal::Click, move |button| {
            let user = button.as_user().context("click payload is not a user button")?;
            target.with_controller(|controller| controller.narrow_to_user(user))
        });
        let target = wiring.clone();
        router.connect(id, Signal::Click, move |button| {
            let user = button.as_user().context("click payload is not a user button")?;
            target.with_write_box(|write_box| write_box.private_box_view(user))
        });

        tracing::debug!(
            %id,
            user_id = user.user_id,
            email = %user.email,
            color = ?color,
            count,
            "user button created"
        );

        Ok(Self {
            id,
            model: ButtonModel::new(user.full_name.clone(), USER_GLYPH, count)
                .with_line_attr(color),
            user_id: user.user_id,
            email: user.email.clone(),
            recipients,
        })
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn model(&self) -> &ButtonModel {
        &self.model
    }

    pub fn caption(&self) -> &str {
        self.model.caption()
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Peer and viewer ids. A single id when talking to yourself.
    pub fn recipients(&self) -> &BTreeSet<u64> {
        &self.recipients
    }
}
