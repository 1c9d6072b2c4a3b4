//! Palette store
//!
//! Maps attribute names (`default`, `idle`, `selected`, stream color keys...)
//! to terminal styles. The store is created once at startup with
//! [`PaletteStore::init`] and handed by `&mut` to whatever needs to register
//! entries. Entries are append-only and live for the whole process.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::config::{HexColor, Theme};

/// Attribute for a button line with no explicit color.
pub const DEFAULT_ATTR: &str = "default";
/// Attribute carried by every badge segment.
pub const IDLE_ATTR: &str = "idle";
/// Attribute the host applies to the focused button.
pub const SELECTED_ATTR: &str = "selected";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub foreground: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub bold: bool,
}

impl PaletteEntry {
    pub fn new(
        name: impl Into<String>,
        foreground: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            foreground: foreground.into(),
            background: background.into(),
            bold: false,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Empty colors are left unset so the surrounding line style shows through.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if !self.foreground.trim().is_empty() {
            style = style.fg(parse_color(&self.foreground));
        }
        if !self.background.trim().is_empty() {
            style = style.bg(parse_color(&self.background));
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaletteStore {
    entries: Vec<PaletteEntry>,
}

impl PaletteStore {
    /// Seed the store with the base button attributes from the theme.
    pub fn init(theme: &Theme) -> Self {
        let sidebar = &theme.sidebar;
        let mut store = Self::default();
        store.append(PaletteEntry::new(
            DEFAULT_ATTR,
            sidebar.item_fg.as_str(),
            sidebar.item_bg.as_str(),
        ));
        store.append(PaletteEntry::new(
            IDLE_ATTR,
            sidebar.badge_fg.as_str(),
            sidebar.badge_bg.as_str(),
        ));
        store.append(
            PaletteEntry::new(
                SELECTED_ATTR,
                sidebar.selected_fg.as_str(),
                sidebar.selected_bg.as_str(),
            )
            .bold(sidebar.use_bold_selected),
        );
        tracing::debug!(theme = %theme.name, "palette initialized");
        store
    }

    pub fn append(&mut self, entry: PaletteEntry) {
        tracing::trace!(
            name = %entry.name,
            fg = %entry.foreground,
            bg = %entry.background,
            "palette entry appended"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest entry registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().rev().find(|entry| entry.name == name)
    }

    /// Style for `name`, or the unstyled default when nothing is registered.
    pub fn style(&self, name: &str) -> Style {
        self.lookup(name).map(PaletteEntry::style).unwrap_or_default()
    }
}

/// Resolve a palette color: `#rrggbb`, `#rgb`, or any name ratatui knows
/// (`black`, `lightblue`, `42`). Empty or unknown values mean "no color".
pub fn parse_color(value: &str) -> Color {
    let value = value.trim();
    if value.is_empty() {
        return Color::Reset;
    }
    if value.starts_with('#') {
        return HexColor::new(value).to_color();
    }
    Color::from_str(value).unwrap_or(Color::Reset)
}
