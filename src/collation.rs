//! Locale-aware ordering of author names
//!
//! Vietnamese treats ă, â, đ, ê, ô, ơ and ư as letters of their own (Đ sorts
//! after every D name), so plain code-point order is wrong for the menu.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::model::Author;

/// Compares author names under one locale's collation rules
pub struct AuthorCollator {
    collator: Option<Collator>,
}

impl AuthorCollator {
    /// Build a collator for `locale` (BCP 47, e.g. `"vi"`)
    ///
    /// An unparseable tag falls back to root collation. If no collation data
    /// can be loaded at all, names compare by code point.
    pub fn new(locale: &str) -> Self {
        let locale = locale.parse::<Locale>().unwrap_or_else(|_| {
            log::warn!("Invalid collation locale {locale:?}, using root");
            Locale::UND
        });

        let collator = match Collator::try_new(&(&locale).into(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                log::warn!("No collation data for {locale}: {e:?}");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }

    /// Stable in-place sort by author name, ascending
    pub fn sort_authors(&self, authors: &mut [Author]) {
        authors.sort_by(|a, b| self.compare(&a.name, &b.name));
    }
}

impl Default for AuthorCollator {
    fn default() -> Self {
        Self::new(crate::consts::COLLATION_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str) -> Author {
        Author {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            poems: Vec::new(),
            bio: None,
            image_url: None,
        }
    }

    fn sorted_names(names: &[&str]) -> Vec<String> {
        let mut authors: Vec<Author> = names.iter().map(|n| author(n)).collect();
        AuthorCollator::default().sort_authors(&mut authors);
        authors.into_iter().map(|a| a.name).collect()
    }

    #[test]
    fn test_vietnamese_order_not_byte_order() {
        let names = [
            "Nguyễn Du",
            "Đoàn Thị Điểm",
            "Hồ Xuân Hương",
            "Dương Khuê",
            "Bà Huyện Thanh Quan",
        ];
        assert_eq!(
            sorted_names(&names),
            [
                "Bà Huyện Thanh Quan",
                "Dương Khuê",
                "Đoàn Thị Điểm",
                "Hồ Xuân Hương",
                "Nguyễn Du",
            ]
        );

        // Byte order would push Đ after N
        let mut bytes = names.to_vec();
        bytes.sort();
        assert_eq!(bytes.last(), Some(&"Đoàn Thị Điểm"));
    }

    #[test]
    fn test_accented_initial_sorts_with_base_letter() {
        assert_eq!(sorted_names(&["Bùi Giáng", "Ánh Nguyệt"]), ["Ánh Nguyệt", "Bùi Giáng"]);
    }

    #[test]
    fn test_circumflex_is_a_separate_letter() {
        // Â follows every plain A in Vietnamese
        assert_eq!(sorted_names(&["Ấn", "Au"]), ["Au", "Ấn"]);
    }

    #[test]
    fn test_equal_names_keep_order() {
        let mut authors = vec![author("Tố Hữu"), author("Tố Hữu")];
        authors[0].slug = "first".into();
        authors[1].slug = "second".into();
        AuthorCollator::default().sort_authors(&mut authors);
        assert_eq!(authors[0].slug, "first");
    }

    #[test]
    fn test_invalid_locale_still_sorts() {
        let collator = AuthorCollator::new("not a locale!!");
        assert_eq!(collator.compare("a", "b"), Ordering::Less);
    }
}
