use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type ConfirmCallback = Box<dyn Fn()>;

/// Visual flavour of the global dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Info,
    Warning,
    Error,
}

#[derive(Clone)]
pub struct DialogContext {
    pub is_open: Signal<bool>,
    kind: Rc<RefCell<DialogKind>>,
    title: Rc<RefCell<String>>,
    message: Rc<RefCell<String>>,
    confirm_label: Rc<RefCell<String>>,
    cancel_label: Rc<RefCell<Option<String>>>,
    on_confirm: Rc<RefCell<Option<Rc<ConfirmCallback>>>>,
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogContext {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
            kind: Rc::new(RefCell::new(DialogKind::Info)),
            title: Rc::new(RefCell::new(String::new())),
            message: Rc::new(RefCell::new(String::new())),
            confirm_label: Rc::new(RefCell::new("OK".to_string())),
            cancel_label: Rc::new(RefCell::new(None)),
            on_confirm: Rc::new(RefCell::new(None)),
        }
    }

    pub fn kind(&self) -> DialogKind {
        *self.kind.borrow()
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    pub fn confirm_label(&self) -> String {
        self.confirm_label.borrow().clone()
    }

    /// None for message dialogs that only have an OK button
    pub fn cancel_label(&self) -> Option<String> {
        self.cancel_label.borrow().clone()
    }

    pub fn on_confirm(&self) -> Option<Rc<ConfirmCallback>> {
        self.on_confirm.borrow().clone()
    }

    /// Ask the user to confirm; `on_confirm` runs only on the confirm button
    pub fn show_with_callback(
        &self,
        title: String,
        message: String,
        confirm_label: String,
        cancel_label: String,
        on_confirm: impl Fn() + 'static,
    ) {
        *self.kind.borrow_mut() = DialogKind::Confirm;
        *self.title.borrow_mut() = title;
        *self.message.borrow_mut() = message;
        *self.confirm_label.borrow_mut() = confirm_label;
        *self.cancel_label.borrow_mut() = Some(cancel_label);
        *self.on_confirm.borrow_mut() = Some(Rc::new(Box::new(on_confirm)));
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    /// Show a result or error message with a single OK button
    pub fn show_message(&self, kind: DialogKind, title: String, message: String) {
        *self.kind.borrow_mut() = kind;
        *self.title.borrow_mut() = title;
        *self.message.borrow_mut() = message;
        *self.confirm_label.borrow_mut() = "OK".to_string();
        *self.cancel_label.borrow_mut() = None;
        *self.on_confirm.borrow_mut() = None;
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn hide(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
        *self.on_confirm.borrow_mut() = None;
    }
}
