use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{ButtonId, ButtonModel};
use crate::controller::Wiring;
use crate::error::{Result, SidebarError};
use crate::palette::{PaletteEntry, PaletteStore};
use crate::signal::{Signal, SignalRouter};

const STREAM_GLYPH: &str = "  # ";
const STREAM_BACKGROUND: &str = "black";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub name: String,
    pub stream_id: u64,
    /// Server color, `#rrggbb`
    pub color: String,
}

impl StreamRecord {
    pub fn new(name: impl Into<String>, stream_id: u64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stream_id,
            color: color.into(),
        }
    }
}

/// Reduce a `#rrggbb` server color to the `#rgb` palette key (high nibble of
/// each channel). `#rgb` input is already a key and is returned unchanged.
pub fn derive_color_key(raw: &str) -> Result<String> {
    let malformed = || SidebarError::MalformedColor {
        raw: raw.to_string(),
    };
    let hex = raw.strip_prefix('#').ok_or_else(malformed)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    match hex.len() {
        6 => Ok(format!("#{}{}{}", &hex[0..1], &hex[2..3], &hex[4..5])),
        3 => Ok(raw.to_string()),
        _ => Err(malformed()),
    }
}

#[derive(Debug, Clone)]
pub struct StreamButton {
    id: ButtonId,
    pub(super) model: ButtonModel,
    stream_id: u64,
    color: String,
}

impl StreamButton {
    /// Build the button, register its color in `palette` and connect the
    /// narrow and compose-box handlers, in that order.
    ///
    /// Validation happens before any registration, so a rejected record
    /// leaves `palette` and `router` untouched.
    pub fn new(
        stream: &StreamRecord,
        count: i64,
        palette: &mut PaletteStore,
        router: &mut SignalRouter,
        wiring: &Wiring,
    ) -> Result<Self> {
        if stream.name.trim().is_empty() {
            return Err(SidebarError::MissingField {
                record: "stream",
                field: "name",
            });
        }
        let color = derive_color_key(&stream.color)?;

        palette.append(PaletteEntry::new(&color, &color, STREAM_BACKGROUND));

        let id = ButtonId::new();
        let target = wiring.clone();
        router.connect(id, Signal::Click, move |button| {
            let stream = button.as_stream().context("click payload is not a stream button")?;
            target.with_controller(|controller| controller.narrow_to_stream(stream))
        });
        let target = wiring.clone();
        router.connect(id, Signal::Click, move |button| {
            let stream = button.as_stream().context("click payload is not a stream button")?;
            target.with_write_box(|write_box| write_box.stream_box_view(stream))
        });

        tracing::debug!(
            %id,
            name = %stream.name,
            stream_id = stream.stream_id,
            %color,
            count,
            "stream button created"
        );

        Ok(Self {
            id,
            model: ButtonModel::new(stream.name.clone(), STREAM_GLYPH, count)
                .with_glyph_attr(&color),
            stream_id: stream.stream_id,
            color,
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

    pub fn stream_id(&self) -> u64 {
        self.stream_id
    }

    /// Palette key registered for this stream.
    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::SidebarButton;
    use crate::testing::recording_wiring;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn general(
        count: i64,
        palette: &mut PaletteStore,
        router: &mut SignalRouter,
        wiring: &Wiring,
    ) -> StreamButton {
        StreamButton::new(
            &StreamRecord::new("general", 7, "#1a2b3c"),
            count,
            palette,
            router,
            wiring,
        )
        .unwrap()
    }

    #[rstest]
    #[case("#1a2b3c", "#123")]
    #[case("#FFEEDD", "#FED")]
    #[case("#000000", "#000")]
    #[case("#abc", "#abc")]
    fn test_derive_color_key(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(derive_color_key(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("1a2b3c")]
    #[case("#1a2b3")]
    #[case("#1a2b3c4")]
    #[case("#zz2b3c")]
    #[case("#1a2ü")]
    fn test_derive_color_key_rejects(#[case] raw: &str) {
        assert!(matches!(
            derive_color_key(raw),
            Err(SidebarError::MalformedColor { .. })
        ));
    }

    #[test]
    fn test_derive_color_key_is_deterministic() {
        assert_eq!(
            derive_color_key("#1a2b3c").unwrap(),
            derive_color_key("#1a2b3c").unwrap()
        );
    }

    #[test]
    fn test_construction_appends_one_palette_entry() {
        let mut palette = PaletteStore::default();
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();

        let button = general(0, &mut palette, &mut router, &wiring);
        assert_eq!(palette.len(), 1);
        assert_eq!(
            palette.entries()[0],
            PaletteEntry::new("#123", "#123", "black")
        );
        assert_eq!(button.color(), "#123");

        // Same color again: a second, harmless duplicate
        general(0, &mut palette, &mut router, &wiring);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_badge_scenario() {
        let mut palette = PaletteStore::default();
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();
        let mut button = SidebarButton::from(general(0, &mut palette, &mut router, &wiring));

        button.update_count(5);
        assert_eq!(button.render().badge().text, " 5");
        button.update_count(0);
        assert_eq!(button.render().badge().text, "");
    }

    #[test]
    fn test_render_layout() {
        let mut palette = PaletteStore::default();
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();
        let button = general(2, &mut palette, &mut router, &wiring);

        let spec = button.model().render();
        assert_eq!(spec.glyph().text, "  # ");
        assert_eq!(spec.glyph().attr.as_deref(), Some("#123"));
        assert_eq!(spec.cursor, "general".len() + 4);
        assert_eq!(spec.text(), "  # general 2");
    }

    #[test]
    fn test_click_narrows_then_switches_compose_box() {
        let mut palette = PaletteStore::default();
        let mut router = SignalRouter::new();
        let (wiring, recorder) = recording_wiring();
        let button = SidebarButton::from(general(0, &mut palette, &mut router, &wiring));

        assert_eq!(router.connection_count(button.id(), Signal::Click), 2);
        router.fire(&button, Signal::Click).unwrap();
        assert_eq!(
            recorder.calls(),
            vec![
                "narrow_to_stream(7)".to_string(),
                "stream_box_view(7)".to_string()
            ]
        );
    }

    #[test]
    fn test_rejected_record_registers_nothing() {
        let mut palette = PaletteStore::default();
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();

        let err = StreamButton::new(
            &StreamRecord::new("general", 7, "blue"),
            0,
            &mut palette,
            &mut router,
            &wiring,
        )
        .unwrap_err();
        assert!(matches!(err, SidebarError::MalformedColor { .. }));

        let err = StreamButton::new(
            &StreamRecord::new("  ", 7, "#1a2b3c"),
            0,
            &mut palette,
            &mut router,
            &wiring,
        )
        .unwrap_err();
        assert!(matches!(err, SidebarError::MissingField { field: "name", .. }));

        assert!(palette.is_empty());
        assert!(router.is_empty());
    }
}
