//! Test doubles for the click targets.

use std::cell::RefCell;
use std::rc::Rc;

use crate::buttons::{StreamButton, UserButton};
use crate::controller::{Controller, WriteBox, Wiring};

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    calls: Vec<String>,
}

impl Controller for RecordingHost {
    fn show_all_messages(&mut self) -> anyhow::Result<()> {
        self.calls.push("show_all_messages".to_string());
        Ok(())
    }

    fn show_all_private_messages(&mut self) -> anyhow::Result<()> {
        self.calls.push("show_all_private_messages".to_string());
        Ok(())
    }

    fn narrow_to_stream(&mut self, button: &StreamButton) -> anyhow::Result<()> {
        self.calls.push(format!("narrow_to_stream({})", button.stream_id()));
        Ok(())
    }

    fn narrow_to_user(&mut self, button: &UserButton) -> anyhow::Result<()> {
        self.calls.push(format!("narrow_to_user({})", button.user_id()));
        Ok(())
    }
}

impl WriteBox for RecordingHost {
    fn stream_box_view(&mut self, button: &StreamButton) -> anyhow::Result<()> {
        self.calls.push(format!("stream_box_view({})", button.stream_id()));
        Ok(())
    }

    fn private_box_view(&mut self, button: &UserButton) -> anyhow::Result<()> {
        self.calls.push(format!("private_box_view({})", button.email()));
        Ok(())
    }
}

/// Keeps the recording host alive; dropping it orphans the wiring.
pub(crate) struct Recorder(Rc<RefCell<RecordingHost>>);

impl Recorder {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.0.borrow().calls.clone()
    }
}

pub(crate) fn recording_wiring() -> (Wiring, Recorder) {
    let host = Rc::new(RefCell::new(RecordingHost::default()));
    let wiring = Wiring::new(&host, &host);
    (wiring, Recorder(host))
}
