// Pattern 2: Flyweight
// Fonts are shared through `Rc` handles keyed by their "family:size"
// descriptor, so each distinct descriptor is allocated once per factory.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Result, SnippetError};

#[derive(Debug, PartialEq, Eq)]
pub struct Font {
    descriptor: String,
    family: String,
    size: Option<u16>,
}

impl Font {
    /// Lenient construction: a missing or malformed size leaves `size` empty.
    pub fn from_descriptor(descriptor: &str) -> Self {
        let (family, size) = match descriptor.split_once(':') {
            Some((family, size)) => (family, size.trim().parse().ok()),
            None => (descriptor, None),
        };
        Self {
            descriptor: descriptor.to_string(),
            family: family.trim().to_string(),
            size,
        }
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> Option<u16> {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    pub family: String,
    pub size: u16,
}

impl FontDescriptor {
    pub fn parse(descriptor: &str) -> Result<Self> {
        let (family, size) = descriptor
            .split_once(':')
            .ok_or_else(|| SnippetError::invalid_descriptor(descriptor, "missing ':' separator"))?;

        let family = family.trim();
        if family.is_empty() {
            return Err(SnippetError::invalid_descriptor(descriptor, "empty family"));
        }

        let size = size.trim().parse::<u16>().map_err(|err| {
            SnippetError::invalid_descriptor(descriptor, format!("bad size: {err}"))
        })?;

        Ok(Self {
            family: family.to_string(),
            size,
        })
    }
}

/// Per-character state; the font is shared with every other character that
/// uses the same descriptor.
#[derive(Debug, Clone)]
pub struct Character {
    value: char,
    color: String,
    font: Rc<Font>,
}

impl Character {
    pub fn new(value: char, color: impl Into<String>, font: Rc<Font>) -> Self {
        Self {
            value,
            color: color.into(),
            font,
        }
    }

    pub fn value(&self) -> char {
        self.value
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn font(&self) -> &Rc<Font> {
        &self.font
    }
}

#[derive(Debug, Default)]
pub struct FontFactory {
    cache: FxHashMap<String, Rc<Font>>,
}

impl FontFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared font for `descriptor`, creating it on first use.
    pub fn get_or_create(&mut self, descriptor: &str) -> Rc<Font> {
        if let Some(font) = self.cache.get(descriptor) {
            debug!(descriptor, "font cache hit");
            return Rc::clone(font);
        }

        debug!(descriptor, "font cache miss");
        let font = Rc::new(Font::from_descriptor(descriptor));
        self.cache.insert(descriptor.to_string(), Rc::clone(&font));
        font
    }

    /// Validates and caches each descriptor. Invalid entries are skipped and
    /// returned so the caller can report them.
    pub fn preload<I, S>(&mut self, descriptors: I) -> Vec<SnippetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = Vec::new();
        for descriptor in descriptors {
            let descriptor = descriptor.as_ref();
            match FontDescriptor::parse(descriptor) {
                Ok(_) => {
                    self.get_or_create(descriptor);
                }
                Err(err) => skipped.push(err),
            }
        }
        skipped
    }

    pub fn contains(&self, descriptor: &str) -> bool {
        self.cache.contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_descriptor_shares_instance() {
        let mut factory = FontFactory::new();
        let a = factory.get_or_create("nanum:12");
        let b = factory.get_or_create("nanum:12");

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 1);
        // factory + two handles
        assert_eq!(Rc::strong_count(&a), 3);
    }

    #[test]
    fn test_different_descriptor_is_distinct() {
        let mut factory = FontFactory::new();
        let twelve = factory.get_or_create("nanum:12");
        let fourteen = factory.get_or_create("nanum:14");

        assert!(!Rc::ptr_eq(&twelve, &fourteen));
        assert_eq!(fourteen.family(), "nanum");
        assert_eq!(fourteen.size(), Some(14));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_separate_factories_do_not_share() {
        let a = FontFactory::new().get_or_create("nanum:12");
        let b = FontFactory::new().get_or_create("nanum:12");

        assert_eq!(a, b);
        assert!(!Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_lenient_font_fields() {
        let font = Font::from_descriptor("serif");
        assert_eq!(font.family(), "serif");
        assert_eq!(font.size(), None);
        assert_eq!(font.descriptor(), "serif");

        assert_eq!(Font::from_descriptor("serif:big").size(), None);
    }

    #[test]
    fn test_descriptor_parse() {
        assert_eq!(
            FontDescriptor::parse("nanum:12").unwrap(),
            FontDescriptor { family: "nanum".into(), size: 12 }
        );
        assert!(FontDescriptor::parse("nanum").is_err());
        assert!(FontDescriptor::parse(":12").is_err());
        assert!(FontDescriptor::parse("nanum:x").is_err());
    }

    #[test]
    fn test_preload_skips_invalid() {
        let mut factory = FontFactory::new();
        let skipped = factory.preload(["nanum:12", "broken", "nanum:14"]);

        assert_eq!(skipped.len(), 1);
        assert!(matches!(
            &skipped[0],
            SnippetError::InvalidDescriptor { descriptor, .. } if descriptor == "broken"
        ));
        assert!(factory.contains("nanum:12"));
        assert!(factory.contains("nanum:14"));
        assert!(!factory.contains("broken"));
    }

    #[test]
    fn test_characters_share_one_font() {
        let mut factory = FontFactory::new();
        let chars: Vec<Character> = ['a', 'b', 'c']
            .into_iter()
            .map(|c| Character::new(c, "bigfanoftim", factory.get_or_create("nanum:12")))
            .collect();

        assert_eq!(factory.len(), 1);
        assert!(Rc::ptr_eq(chars[0].font(), chars[1].font()));
        assert!(Rc::ptr_eq(chars[1].font(), chars[2].font()));
        assert_eq!(chars[2].value(), 'c');
        assert_eq!(chars[0].color(), "bigfanoftim");
    }

    #[test]
    fn test_preloaded_font_is_reused() {
        let mut factory = FontFactory::new();
        assert!(factory.preload(vec!["nanum:12".to_string()]).is_empty());
        let before = factory.len();

        factory.get_or_create("nanum:12");
        assert_eq!(factory.len(), before);
        assert!(!factory.is_empty());
    }
}
