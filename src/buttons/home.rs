use super::{ButtonId, ButtonModel};
use crate::controller::Wiring;
use crate::signal::{Signal, SignalRouter};

pub const HOME_CAPTION: &str = "All messages";
pub const PM_CAPTION: &str = "Private messages";

const HOME_GLYPH: &str = "  \u{26FA}  ";
const PM_GLYPH: &str = "  \u{260F}  ";

/// "All messages": clicking shows the unfiltered message list.
#[derive(Debug, Clone)]
pub struct HomeButton {
    id: ButtonId,
    pub(super) model: ButtonModel,
}

impl HomeButton {
    pub fn new(count: i64, router: &mut SignalRouter, wiring: &Wiring) -> Self {
        let id = ButtonId::new();
        let target = wiring.clone();
        router.connect(id, Signal::Click, move |_| {
            target.with_controller(|controller| controller.show_all_messages())
        });

        tracing::debug!(%id, count, "home button created");
        Self {
            id,
            model: ButtonModel::new(HOME_CAPTION, HOME_GLYPH, count),
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn model(&self) -> &ButtonModel {
        &self.model
    }
}

/// "Private messages": clicking shows every private conversation.
#[derive(Debug, Clone)]
pub struct PmButton {
    id: ButtonId,
    pub(super) model: ButtonModel,
}

impl PmButton {
    pub fn new(count: i64, router: &mut SignalRouter, wiring: &Wiring) -> Self {
        let id = ButtonId::new();
        let target = wiring.clone();
        router.connect(id, Signal::Click, move |_| {
            target.with_controller(|controller| controller.show_all_private_messages())
        });

        tracing::debug!(%id, count, "private messages button created");
        Self {
            id,
            model: ButtonModel::new(PM_CAPTION, PM_GLYPH, count),
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn model(&self) -> &ButtonModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::SidebarButton;
    use crate::testing::recording_wiring;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_home_button_render() {
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();
        let button = HomeButton::new(3, &mut router, &wiring);

        let spec = button.model().render();
        assert_eq!(spec.text(), "  \u{26FA}  All messages 3");
        assert_eq!(spec.cursor, HOME_CAPTION.len() + 5);
        assert_eq!(router.connection_count(button.id(), Signal::Click), 1);
    }

    #[test]
    fn test_pm_button_render() {
        let mut router = SignalRouter::new();
        let (wiring, _recorder) = recording_wiring();
        let button = PmButton::new(0, &mut router, &wiring);

        let spec = button.model().render();
        assert_eq!(spec.text(), "  \u{260F}  Private messages");
        assert_eq!(spec.cursor, PM_CAPTION.len() + 5);
    }

    #[test]
    fn test_click_reaches_controller() {
        let mut router = SignalRouter::new();
        let (wiring, recorder) = recording_wiring();
        let home = SidebarButton::from(HomeButton::new(0, &mut router, &wiring));
        let pm = SidebarButton::from(PmButton::new(0, &mut router, &wiring));

        router.fire(&home, Signal::Click).unwrap();
        router.fire(&pm, Signal::Click).unwrap();
        assert_eq!(
            recorder.calls(),
            vec![
                "show_all_messages".to_string(),
                "show_all_private_messages".to_string()
            ]
        );
    }

    #[test]
    fn test_click_after_controller_dropped_errors() {
        let mut router = SignalRouter::new();
        let (wiring, recorder) = recording_wiring();
        let home = SidebarButton::from(HomeButton::new(0, &mut router, &wiring));
        drop(recorder);

        let err = router.fire(&home, Signal::Click).unwrap_err();
        assert!(format!("{:#}", err).contains("controller has been dropped"));
    }
}
