//! # Phone Number Layout

use strum::IntoEnumIterator;

use crate::format::{ExtensionFormat, NumberFormat, PrefixFormat};

/// The raw digit components of a phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhoneNumberParts {
    /// Country extension digits, e.g. ``1``.
    pub extension: String,

    /// Area prefix digits, e.g. ``212``.
    pub prefix: String,

    /// Line number digit groups, e.g. ``["555", "0100"]``.
    pub groups: Vec<String>,
}

impl PhoneNumberParts {
    /// Build from the three components.
    pub fn new<E, P, G, S>(
        extension: E,
        prefix: P,
        groups: G,
    ) -> Self
    where
        E: Into<String>,
        P: Into<String>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extension: extension.into(),
            prefix: prefix.into(),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// All digits, with no punctuation.
    pub fn digits(&self) -> String {
        let mut digits = self.extension.clone();
        digits.push_str(&self.prefix);
        for group in &self.groups {
            digits.push_str(group);
        }
        digits
    }
}

/// A full punctuation layout: extension, then prefix, then line number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhoneNumberLayout {
    /// Extension template.
    pub extension: ExtensionFormat,

    /// Prefix template.
    pub prefix: PrefixFormat,

    /// Line number template.
    pub number: NumberFormat,
}

impl PhoneNumberLayout {
    /// Build a layout from the three integer selectors.
    ///
    /// Out-of-range selectors fall back to the last case of each template.
    pub fn from_selectors(
        extension: usize,
        prefix: usize,
        number: usize,
    ) -> Self {
        Self {
            extension: ExtensionFormat::from_selector(extension),
            prefix: PrefixFormat::from_selector(prefix),
            number: NumberFormat::from_selector(number),
        }
    }

    /// Every distinct layout.
    pub fn all() -> impl Iterator<Item = Self> {
        ExtensionFormat::iter().flat_map(|extension| {
            PrefixFormat::iter().flat_map(move |prefix| {
                NumberFormat::iter().map(move |number| Self {
                    extension,
                    prefix,
                    number,
                })
            })
        })
    }

    /// Render `parts` under this layout.
    pub fn render(
        &self,
        parts: &PhoneNumberParts,
    ) -> String {
        let mut result = self.extension.apply(&parts.extension);
        result.push_str(&self.prefix.apply(&parts.prefix));
        result.push_str(&self.number.apply(parts.groups.as_slice()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet::Alphabet, types::PCHashMap};

    fn nyc() -> PhoneNumberParts {
        PhoneNumberParts::new("1", "212", ["555", "0100"])
    }

    #[test]
    fn test_render() {
        let layout = PhoneNumberLayout::from_selectors(5, 5, 1);
        assert_eq!(layout.render(&nyc()), "+1 (212) 555-0100");

        let layout = PhoneNumberLayout::default();
        assert_eq!(layout.render(&nyc()), "12125550100");
        assert_eq!(nyc().digits(), "12125550100");

        let layout = PhoneNumberLayout::from_selectors(3, 3, 2);
        assert_eq!(layout.render(&nyc()), "+1-(212)-555 0100");
    }

    #[test]
    fn test_all_layouts() {
        let layouts: Vec<PhoneNumberLayout> = PhoneNumberLayout::all().collect();
        assert_eq!(layouts.len(), 6 * 6 * 3);

        let mut seen: PCHashMap<String, PhoneNumberLayout> = PCHashMap::default();
        let letters = Alphabet::letters();
        for layout in layouts {
            let rendered = layout.render(&nyc());
            assert!(rendered.chars().all(|c| letters.contains(c)));
            assert!(seen.insert(rendered, layout).is_none());
        }
    }
}
