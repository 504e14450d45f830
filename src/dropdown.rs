//! Author dropdown controller
//!
//! Owns the author list for the page's lifetime. The list starts empty, is
//! replaced once when the authors payload arrives and is only re-ordered after
//! that. UI events are fed in through [`AuthorDropdown::dispatch`]; all DOM
//! work goes through a [`DropdownView`].

use crate::collation::AuthorCollator;
use crate::error::LoadError;
use crate::model::{Author, newest_poems};
use crate::settings::Settings;
use crate::{author_href, poem_href};

/// One author row in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    /// Position in the controller's author list
    pub index: usize,
    pub name: String,
    pub href: String,
}

/// One row in the poem list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemEntry {
    Poem {
        /// Position in the rendered poem list
        index: usize,
        title: String,
        href: String,
    },
    /// Shown when the author has no works
    Placeholder(String),
}

/// UI events the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer entered an author row
    AuthorEnter(usize),
    /// Author row received keyboard focus
    AuthorFocus(usize),
    AuthorClick(usize),
    /// Click on a rendered poem row. Never reaches the author row underneath.
    PoemClick(usize),
    /// Pointer entered the hover wrapper
    WrapperEnter,
    WrapperLeave,
}

/// Where the controller draws
///
/// Each `replace_*` call discards the previous rows entirely.
pub trait DropdownView {
    fn replace_authors(&mut self, entries: &[AuthorEntry]);
    fn replace_poems(&mut self, entries: &[PoemEntry]);
    fn set_open(&mut self, open: bool);
    /// Full page navigation
    fn navigate(&mut self, href: &str);
}

pub struct AuthorDropdown<V: DropdownView> {
    view: V,
    settings: Settings,
    collator: AuthorCollator,
    authors: Vec<Author>,
    /// Targets of the rows currently in the poem list
    poem_links: Vec<String>,
}

impl<V: DropdownView> AuthorDropdown<V> {
    pub fn new(view: V, settings: Settings) -> Self {
        let collator = AuthorCollator::new(&settings.locale);
        Self {
            view,
            settings,
            collator,
            authors: Vec::new(),
            poem_links: Vec::new(),
        }
    }

    /// Authors in their current (possibly sorted) order
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Apply the outcome of the authors fetch
    ///
    /// Success replaces the list wholesale and re-renders. Failure is
    /// swallowed and leaves the list as it was.
    pub fn load(&mut self, result: Result<Vec<Author>, LoadError>) {
        match result {
            Ok(authors) => {
                log::debug!("Loaded {} authors", authors.len());
                self.authors = authors;
                self.render_authors();
            }
            Err(e) => log::debug!("Author list unavailable: {}", e),
        }
    }

    /// Sort the stored authors by name and rebuild the menu
    ///
    /// The sort is applied to the stored list itself, so later indices refer
    /// to the sorted order.
    pub fn render_authors(&mut self) {
        self.collator.sort_authors(&mut self.authors);

        let route = &self.settings.author_route;
        let entries: Vec<AuthorEntry> = self
            .authors
            .iter()
            .enumerate()
            .map(|(index, author)| AuthorEntry {
                index,
                name: author.name.clone(),
                href: author_href(route, &author.slug),
            })
            .collect();

        self.view.replace_authors(&entries);
    }

    /// Show the newest works of the author at `index`
    ///
    /// An index outside the list is ignored.
    pub fn show_newest_poems(&mut self, index: usize) {
        let Some(author) = self.authors.get(index) else {
            return;
        };

        let route = &self.settings.author_route;
        let newest = newest_poems(&author.poems, self.settings.newest_limit);
        let links: Vec<String> = newest
            .iter()
            .map(|p| poem_href(route, &author.slug, &p.slug))
            .collect();

        let entries: Vec<PoemEntry> = if newest.is_empty() {
            vec![PoemEntry::Placeholder(self.settings.empty_placeholder.clone())]
        } else {
            newest
                .iter()
                .zip(&links)
                .enumerate()
                .map(|(index, (poem, href))| PoemEntry::Poem {
                    index,
                    title: poem.title.clone(),
                    href: href.clone(),
                })
                .collect()
        };

        self.poem_links = links;
        self.view.replace_poems(&entries);
    }

    /// Event → action table
    pub fn dispatch(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::AuthorEnter(index) | MenuEvent::AuthorFocus(index) => {
                self.show_newest_poems(index);
            }
            MenuEvent::AuthorClick(index) => {
                if let Some(author) = self.authors.get(index) {
                    let href = author_href(&self.settings.author_route, &author.slug);
                    self.view.navigate(&href);
                }
            }
            MenuEvent::PoemClick(index) => {
                if let Some(href) = self.poem_links.get(index) {
                    self.view.navigate(href);
                }
            }
            MenuEvent::WrapperEnter => self.view.set_open(true),
            MenuEvent::WrapperLeave => self.view.set_open(false),
        }
    }
}
