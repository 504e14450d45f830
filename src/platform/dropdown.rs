//! DOM side of the author dropdown

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::dropdown::{AuthorDropdown, AuthorEntry, DropdownView, MenuEvent, PoemEntry};
use crate::settings::Settings;

pub type WebDropdown = AuthorDropdown<WebDropdownView>;

type Listener = Closure<dyn FnMut(Event)>;

/// Renders into the page's author and poem `<ul>`s
pub struct WebDropdownView {
    dropdown: Element,
    author_list: Element,
    poem_list: Element,
    open_class: String,
    handle: Weak<RefCell<WebDropdown>>,
    // Listeners of the rows currently on the page; dropped with the rows
    author_listeners: Vec<Listener>,
    poem_listeners: Vec<Listener>,
}

impl WebDropdownView {
    fn item(&self, class: &str, text: &str) -> Option<Element> {
        let document = self.dropdown.owner_document()?;
        let li = document.create_element("li").ok()?;
        li.set_class_name(class);
        li.set_text_content(Some(text));
        Some(li)
    }

    /// Attach a listener that forwards `event` to the controller
    fn listen(&self, target: &Element, kind: &str, event: MenuEvent, stop: bool) -> Option<Listener> {
        let handle = self.handle.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |e: Event| {
            if stop {
                e.stop_propagation();
            }
            dispatch(&handle, event);
        });
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }
}

impl DropdownView for WebDropdownView {
    fn replace_authors(&mut self, entries: &[AuthorEntry]) {
        self.author_list.set_inner_html("");
        self.author_listeners.clear();

        for entry in entries {
            let Some(li) = self.item("author-item", &entry.name) else {
                continue;
            };
            let _ = li.set_attribute("tabindex", "0");

            let listeners = [
                self.listen(&li, "mouseenter", MenuEvent::AuthorEnter(entry.index), false),
                self.listen(&li, "focus", MenuEvent::AuthorFocus(entry.index), false),
                self.listen(&li, "click", MenuEvent::AuthorClick(entry.index), false),
            ];
            self.author_listeners.extend(listeners.into_iter().flatten());
            let _ = self.author_list.append_child(&li);
        }
    }

    fn replace_poems(&mut self, entries: &[PoemEntry]) {
        self.poem_list.set_inner_html("");
        self.poem_listeners.clear();

        for entry in entries {
            match entry {
                PoemEntry::Poem { index, title, .. } => {
                    let Some(li) = self.item("poem-item", title) else {
                        continue;
                    };
                    if let Some(listener) = self.listen(&li, "click", MenuEvent::PoemClick(*index), true) {
                        self.poem_listeners.push(listener);
                    }
                    let _ = self.poem_list.append_child(&li);
                }
                PoemEntry::Placeholder(text) => {
                    if let Some(li) = self.item("muted", text) {
                        let _ = self.poem_list.append_child(&li);
                    }
                }
            }
        }
    }

    fn set_open(&mut self, open: bool) {
        set_open_class(&self.dropdown, &self.open_class, open);
    }

    fn navigate(&mut self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::debug!("Navigation to {} failed: {:?}", href, e);
        }
    }
}

fn set_open_class(dropdown: &Element, class: &str, open: bool) {
    let classes = dropdown.class_list();
    let _ = if open {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Forward an event to the controller if it is still alive and idle
fn dispatch(handle: &Weak<RefCell<WebDropdown>>, event: MenuEvent) {
    let Some(dropdown) = handle.upgrade() else {
        return;
    };
    match dropdown.try_borrow_mut() {
        Ok(mut d) => d.dispatch(event),
        Err(_) => log::debug!("Dropdown busy, dropped {:?}", event),
    };
}

/// Build the controller if the dropdown and both of its lists exist
pub fn install_dropdown(document: &Document, settings: &Settings) -> Option<Rc<RefCell<WebDropdown>>> {
    let dropdown = document.get_element_by_id(&settings.dropdown_id)?;
    let author_list = dropdown.query_selector(&settings.author_list_selector).ok().flatten()?;
    let poem_list = dropdown.query_selector(&settings.poem_list_selector).ok().flatten()?;

    Some(Rc::new_cyclic(|handle| {
        let view = WebDropdownView {
            dropdown,
            author_list,
            poem_list,
            open_class: settings.open_class.clone(),
            handle: handle.clone(),
            author_listeners: Vec::new(),
            poem_listeners: Vec::new(),
        };
        RefCell::new(AuthorDropdown::new(view, settings.clone()))
    }))
}

/// Toggle the dropdown's open class while the wrapper is hovered
///
/// Needs the wrapper and the dropdown container. Goes through the controller
/// when there is one, otherwise toggles the class directly.
pub fn install_hover(document: &Document, settings: &Settings, controller: Option<&Rc<RefCell<WebDropdown>>>) {
    let Some(wrapper) = document.query_selector(&settings.wrapper_selector).ok().flatten() else {
        return;
    };
    let Some(dropdown) = document.get_element_by_id(&settings.dropdown_id) else {
        return;
    };
    let handle = controller.map(Rc::downgrade);

    for (kind, event, open) in [
        ("mouseenter", MenuEvent::WrapperEnter, true),
        ("mouseleave", MenuEvent::WrapperLeave, false),
    ] {
        let handle = handle.clone();
        let dropdown = dropdown.clone();
        let class = settings.open_class.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| match &handle {
            Some(handle) => dispatch(handle, event),
            None => set_open_class(&dropdown, &class, open),
        });
        let _ = wrapper.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
