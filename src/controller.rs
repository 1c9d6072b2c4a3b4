//! Interfaces the buttons deliver clicks to.
//!
//! The controller and the compose ("write") box are owned by the host view.
//! Buttons only ever see them through [`Wiring`], which keeps `Weak`
//! references so a button never extends their lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::{anyhow, Context};

use crate::buttons::{StreamButton, UserButton};

pub trait Controller {
    fn show_all_messages(&mut self) -> anyhow::Result<()>;

    fn show_all_private_messages(&mut self) -> anyhow::Result<()>;

    fn narrow_to_stream(&mut self, button: &StreamButton) -> anyhow::Result<()>;

    fn narrow_to_user(&mut self, button: &UserButton) -> anyhow::Result<()>;
}

/// The compose box, switched to a new recipient when a stream or user is clicked.
pub trait WriteBox {
    fn stream_box_view(&mut self, button: &StreamButton) -> anyhow::Result<()>;

    fn private_box_view(&mut self, button: &UserButton) -> anyhow::Result<()>;
}

/// Non-owning handles to the click targets, captured by button handlers.
#[derive(Clone)]
pub struct Wiring {
    controller: Weak<RefCell<dyn Controller>>,
    write_box: Weak<RefCell<dyn WriteBox>>,
}

impl Wiring {
    pub fn new<C, W>(controller: &Rc<RefCell<C>>, write_box: &Rc<RefCell<W>>) -> Self
    where
        C: Controller + 'static,
        W: WriteBox + 'static,
    {
        let controller: Rc<RefCell<dyn Controller>> = controller.clone();
        let write_box: Rc<RefCell<dyn WriteBox>> = write_box.clone();
        Self {
            controller: Rc::downgrade(&controller),
            write_box: Rc::downgrade(&write_box),
        }
    }

    pub(crate) fn with_controller<R>(
        &self,
        f: impl FnOnce(&mut dyn Controller) -> anyhow::Result<R>,
    ) -> anyhow::Result<R> {
        let controller = self
            .controller
            .upgrade()
            .context("controller has been dropped")?;
        let mut controller = controller
            .try_borrow_mut()
            .map_err(|_| anyhow!("controller is already borrowed"))?;
        f(&mut *controller)
    }

    pub(crate) fn with_write_box<R>(
        &self,
        f: impl FnOnce(&mut dyn WriteBox) -> anyhow::Result<R>,
    ) -> anyhow::Result<R> {
        let write_box = self
            .write_box
            .upgrade()
            .context("write box has been dropped")?;
        let mut write_box = write_box
            .try_borrow_mut()
            .map_err(|_| anyhow!("write box is already borrowed"))?;
        f(&mut *write_box)
    }
}

impl std::fmt::Debug for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wiring")
            .field("controller_alive", &(self.controller.strong_count() > 0))
            .field("write_box_alive", &(self.write_box.strong_count() > 0))
            .finish()
    }
}
