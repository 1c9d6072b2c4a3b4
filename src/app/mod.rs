// App module
// - mod.rs: App struct, list (re)building, click and count dispatch
// - state.rs: controller / compose box implementation
// - fixture.rs: TOML sidebar data
// - rendering.rs: drawing the list

mod fixture;
mod rendering;
mod state;

pub use fixture::{SidebarFixture, StreamUnread, UnreadCounts, UserEntry, UserUnread};
pub use state::{AppState, ComposeTarget, Narrow};

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use anyhow::{bail, Context};

use crate::buttons::{HomeButton, PmButton, SidebarButton, StreamButton, UserButton};
use crate::config::Theme;
use crate::controller::Wiring;
use crate::error::Result;
use crate::palette::PaletteStore;
use crate::signal::{Signal, SignalRouter};

/// Demo host: owns the button list, the palette and the click targets.
pub struct App {
    theme: Theme,
    palette: PaletteStore,
    router: SignalRouter,
    buttons: Vec<SidebarButton>,
    state: Rc<RefCell<AppState>>,
    selected: Option<usize>,
}

impl App {
    pub fn new(theme: &Theme) -> Self {
        Self {
            theme: theme.clone(),
            palette: PaletteStore::init(theme),
            router: SignalRouter::new(),
            buttons: Vec::new(),
            state: Rc::new(RefCell::new(AppState::default())),
            selected: None,
        }
    }

    /// Rebuild the button list from `fixture`.
    ///
    /// Handlers of the previous list are released. Palette entries from the
    /// fixture and from stream colors are staged and only committed once every
    /// record is accepted; a rejected fixture leaves the list and palette as
    /// they were.
    pub fn load(&mut self, fixture: &SidebarFixture) -> Result<()> {
        let mut palette = self.palette.clone();
        for entry in &fixture.palette {
            palette.append(entry.clone());
        }

        let wiring = Wiring::new(&self.state, &self.state);
        let mut buttons = Vec::with_capacity(2 + fixture.streams.len() + fixture.users.len());
        if let Err(e) = self.build_buttons(fixture, &wiring, &mut palette, &mut buttons) {
            for button in &buttons {
                self.router.disconnect_all(button.id());
            }
            tracing::warn!("Sidebar rebuild rejected: {}", e);
            return Err(e);
        }

        for old in self.buttons.drain(..) {
            self.router.disconnect_all(old.id());
        }
        self.palette = palette;
        self.buttons = buttons;
        self.selected = self
            .selected
            .filter(|&i| i < self.buttons.len());
        tracing::info!(buttons = self.buttons.len(), "sidebar built");
        Ok(())
    }

    fn build_buttons(
        &mut self,
        fixture: &SidebarFixture,
        wiring: &Wiring,
        palette: &mut PaletteStore,
        buttons: &mut Vec<SidebarButton>,
    ) -> Result<()> {
        let unread = &fixture.unread;
        buttons.push(HomeButton::new(unread.all, &mut self.router, wiring).into());
        buttons.push(PmButton::new(unread.private, &mut self.router, wiring).into());

        for stream in &fixture.streams {
            let count = unread.stream(stream.stream_id);
            let button = StreamButton::new(stream, count, palette, &mut self.router, wiring)?;
            buttons.push(button.into());
        }

        for entry in &fixture.users {
            let count = unread.user(entry.user.user_id);
            let button = UserButton::new(
                &entry.user,
                fixture.own_user_id,
                entry.color.clone(),
                count,
                &mut self.router,
                wiring,
            )?;
            buttons.push(button.into());
        }
        Ok(())
    }

    pub fn buttons(&self) -> &[SidebarButton] {
        &self.buttons
    }

    pub fn palette(&self) -> &PaletteStore {
        &self.palette
    }

    pub fn router(&self) -> &SignalRouter {
        &self.router
    }

    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Mark `index` as the focused entry. Out-of-range indices clear it.
    pub fn select(&mut self, index: usize) -> bool {
        self.selected = (index < self.buttons.len()).then_some(index);
        self.selected.is_some()
    }

    pub fn position(&self, caption: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.caption() == caption)
    }

    pub fn click(&mut self, caption: &str) -> anyhow::Result<()> {
        let Some(index) = self.position(caption) else {
            bail!("no sidebar button captioned {:?}", caption);
        };
        self.click_index(index)
    }

    pub fn click_index(&mut self, index: usize) -> anyhow::Result<()> {
        let button = self
            .buttons
            .get(index)
            .with_context(|| format!("no sidebar button at index {}", index))?;
        self.router.fire(button, Signal::Click)
    }

    /// Push a fresh unread snapshot into the existing buttons.
    pub fn apply_unread(&mut self, unread: &UnreadCounts) {
        for button in &mut self.buttons {
            let count = match button {
                SidebarButton::Home(_) => unread.all,
                SidebarButton::PrivateMessages(_) => unread.private,
                SidebarButton::Stream(b) => unread.stream(b.stream_id()),
                SidebarButton::User(b) => unread.user(b.user_id()),
            };
            if count != button.count() {
                button.update_count(count);
            }
        }
    }
}
