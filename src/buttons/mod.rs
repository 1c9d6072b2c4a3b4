//! Sidebar buttons
//!
//! Four kinds of button make up the navigation list: the home button, the
//! private messages button, one button per stream and one per user. Each is
//! a [`ButtonModel`] (caption, badge count, color) plus the identity fields
//! of its kind. Click behaviour lives entirely in handlers registered on a
//! [`SignalRouter`](crate::signal::SignalRouter) at construction.

mod home;
mod model;
mod stream;
mod user;

pub use home::{HomeButton, PmButton, HOME_CAPTION, PM_CAPTION};
pub use model::{ButtonModel, RenderSpec, Segment};
pub use stream::{derive_color_key, StreamButton, StreamRecord};
pub use user::{UserButton, UserRecord};

use std::fmt;

use uuid::Uuid;

/// Key used by the signal router to find a button's handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(Uuid);

impl ButtonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ButtonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a button points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity<'a> {
    None,
    Stream { stream_id: u64 },
    User { user_id: u64, email: &'a str },
}

#[derive(Debug, Clone)]
pub enum SidebarButton {
    Home(HomeButton),
    PrivateMessages(PmButton),
    Stream(StreamButton),
    User(UserButton),
}

impl SidebarButton {
    pub fn id(&self) -> ButtonId {
        match self {
            SidebarButton::Home(b) => b.id(),
            SidebarButton::PrivateMessages(b) => b.id(),
            SidebarButton::Stream(b) => b.id(),
            SidebarButton::User(b) => b.id(),
        }
    }

    pub fn model(&self) -> &ButtonModel {
        match self {
            SidebarButton::Home(b) => b.model(),
            SidebarButton::PrivateMessages(b) => b.model(),
            SidebarButton::Stream(b) => b.model(),
            SidebarButton::User(b) => b.model(),
        }
    }

    fn model_mut(&mut self) -> &mut ButtonModel {
        match self {
            SidebarButton::Home(b) => &mut b.model,
            SidebarButton::PrivateMessages(b) => &mut b.model,
            SidebarButton::Stream(b) => &mut b.model,
            SidebarButton::User(b) => &mut b.model,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SidebarButton::Home(_) => "home",
            SidebarButton::PrivateMessages(_) => "private",
            SidebarButton::Stream(_) => "stream",
            SidebarButton::User(_) => "user",
        }
    }

    pub fn identity(&self) -> Identity<'_> {
        match self {
            SidebarButton::Home(_) | SidebarButton::PrivateMessages(_) => Identity::None,
            SidebarButton::Stream(b) => Identity::Stream {
                stream_id: b.stream_id(),
            },
            SidebarButton::User(b) => Identity::User {
                user_id: b.user_id(),
                email: b.email(),
            },
        }
    }

    pub fn caption(&self) -> &str {
        self.model().caption()
    }

    pub fn count(&self) -> i64 {
        self.model().count()
    }

    pub fn render(&self) -> RenderSpec {
        self.model().render()
    }

    pub fn update_count(&mut self, count: i64) {
        tracing::trace!(kind = self.kind(), caption = self.caption(), count, "count updated");
        self.model_mut().update_count(count);
    }

    pub fn as_stream(&self) -> Option<&StreamButton> {
        match self {
            SidebarButton::Stream(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&UserButton> {
        match self {
            SidebarButton::User(b) => Some(b),
            _ => None,
        }
    }
}

impl From<HomeButton> for SidebarButton {
    fn from(button: HomeButton) -> Self {
        SidebarButton::Home(button)
    }
}

impl From<PmButton> for SidebarButton {
    fn from(button: PmButton) -> Self {
        SidebarButton::PrivateMessages(button)
    }
}

impl From<StreamButton> for SidebarButton {
    fn from(button: StreamButton) -> Self {
        SidebarButton::Stream(button)
    }
}

impl From<UserButton> for SidebarButton {
    fn from(button: UserButton) -> Self {
        SidebarButton::User(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteStore;
    use crate::signal::SignalRouter;
    use crate::testing::recording_wiring;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_per_variant() {
        let mut router = SignalRouter::new();
        let mut palette = PaletteStore::default();
        let (wiring, _recorder) = recording_wiring();

        let home: SidebarButton = HomeButton::new(0, &mut router, &wiring).into();
        let stream: SidebarButton = StreamButton::new(
            &StreamRecord::new("general", 7, "#1a2b3c"),
            0,
            &mut palette,
            &mut router,
            &wiring,
        )
        .unwrap()
        .into();
        let user: SidebarButton = UserButton::new(
            &UserRecord::new("Ada Lovelace", "ada@example.com", 11),
            1,
            None,
            0,
            &mut router,
            &wiring,
        )
        .unwrap()
        .into();

        assert_eq!(home.identity(), Identity::None);
        assert_eq!(stream.identity(), Identity::Stream { stream_id: 7 });
        assert_eq!(
            user.identity(),
            Identity::User {
                user_id: 11,
                email: "ada@example.com"
            }
        );
        assert_eq!(stream.kind(), "stream");
        assert!(stream.as_user().is_none());
        assert!(user.as_user().is_some());
    }

    #[test]
    fn test_update_count_through_enum() {
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();
        let mut pm: SidebarButton = PmButton::new(2, &mut router, &wiring).into();

        assert_eq!(pm.render().badge().text, " 2");
        pm.update_count(0);
        assert_eq!(pm.count(), 0);
        assert_eq!(pm.render().badge().text, "");
    }

    #[test]
    fn test_button_ids_are_unique() {
        assert_ne!(ButtonId::new(), ButtonId::new());
    }
}
