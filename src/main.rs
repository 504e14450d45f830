//! Poem Nav entry point
//!
//! On wasm32 this wires the page. Natively it previews the author menu for a
//! saved `/api/authors` payload.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    poem_nav::platform::start();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use poem_nav::dropdown::{AuthorEntry, PoemEntry};
    use poem_nav::model::decode_authors;
    use poem_nav::{AuthorDropdown, DropdownView, MenuEvent, Settings};

    /// Print the author dropdown for a saved authors payload
    #[derive(Parser, Debug)]
    #[command(name = "poem-nav", version)]
    pub struct Args {
        /// JSON file with the `/api/authors` response
        pub path: PathBuf,
        /// Only show poems for this author slug
        #[arg(long)]
        pub author: Option<String>,
        /// Collation locale for author names
        #[arg(long, default_value = poem_nav::consts::COLLATION_LOCALE)]
        pub locale: String,
    }

    /// Writes what the page would show to stdout
    struct PrintView;

    impl DropdownView for PrintView {
        fn replace_authors(&mut self, entries: &[AuthorEntry]) {
            println!("Authors ({}):", entries.len());
            for entry in entries {
                println!("  {:>2}. {}  {}", entry.index + 1, entry.name, entry.href);
            }
        }

        fn replace_poems(&mut self, entries: &[PoemEntry]) {
            for entry in entries {
                match entry {
                    PoemEntry::Poem { title, href, .. } => println!("      - {}  {}", title, href),
                    PoemEntry::Placeholder(text) => println!("      ({})", text),
                }
            }
        }

        fn set_open(&mut self, _open: bool) {}

        fn navigate(&mut self, href: &str) {
            println!("-> {}", href);
        }
    }

    pub fn run(args: Args) -> Result<()> {
        let body = std::fs::read_to_string(&args.path)
            .with_context(|| format!("reading {}", args.path.display()))?;
        let authors = decode_authors(&body).context("decoding authors payload")?;

        let settings = Settings {
            locale: args.locale,
            ..Settings::load()
        };
        let mut dropdown = AuthorDropdown::new(PrintView, settings);
        dropdown.load(Ok(authors));

        let picked: Vec<usize> = match &args.author {
            Some(slug) => {
                let index = dropdown
                    .authors()
                    .iter()
                    .position(|a| &a.slug == slug)
                    .with_context(|| format!("no author with slug {slug:?}"))?;
                vec![index]
            }
            None => (0..dropdown.authors().len()).collect(),
        };

        println!();
        for index in picked {
            let author = &dropdown.authors()[index];
            println!("{}", author.name);
            if let Some(bio) = author.bio.as_deref().filter(|b| !b.trim().is_empty()) {
                println!("    {}", bio.trim());
            }
            dropdown.dispatch(MenuEvent::AuthorEnter(index));
        }

        log::info!("Previewed {} authors", dropdown.authors().len());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Poem Nav (native) preview");
    log::info!("The page build runs in the browser - use `trunk build` for the web version");

    preview::run(preview::Args::parse())
}
