//! # Phone Number Punctuation Templates
//!
//! Each template enum maps from an integer selector; selectors past
//! the last case fall back to the last case.

/// Punctuation around a country extension.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ExtensionFormat {
    /// ``1``
    #[default]
    Bare,

    /// ``+1``
    Plus,

    /// ``1-``
    Dash,

    /// ``+1-``
    PlusDash,

    /// ``1 ``
    Space,

    /// ``+1 ``
    PlusSpace,
}

impl ExtensionFormat {
    /// Select a format; selectors ``>= 5`` select [`PlusSpace`](Self::PlusSpace).
    pub fn from_selector(selector: usize) -> Self {
        match selector {
            0 => Self::Bare,
            1 => Self::Plus,
            2 => Self::Dash,
            3 => Self::PlusDash,
            4 => Self::Space,
            _ => Self::PlusSpace,
        }
    }

    /// The canonical selector of this format.
    pub fn selector(self) -> usize {
        self as usize
    }

    /// Apply the template to `ext`.
    pub fn apply(
        self,
        ext: &str,
    ) -> String {
        match self {
            Self::Bare => ext.to_string(),
            Self::Plus => format!("+{ext}"),
            Self::Dash => format!("{ext}-"),
            Self::PlusDash => format!("+{ext}-"),
            Self::Space => format!("{ext} "),
            Self::PlusSpace => format!("+{ext} "),
        }
    }
}

/// Punctuation around an area prefix.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PrefixFormat {
    /// ``212``
    #[default]
    Bare,

    /// ``(212)``
    Parens,

    /// ``212-``
    Dash,

    /// ``(212)-``
    ParensDash,

    /// ``212 ``
    Space,

    /// ``(212) ``
    ParensSpace,
}

impl PrefixFormat {
    /// Select a format; selectors ``>= 5`` select [`ParensSpace`](Self::ParensSpace).
    pub fn from_selector(selector: usize) -> Self {
        match selector {
            0 => Self::Bare,
            1 => Self::Parens,
            2 => Self::Dash,
            3 => Self::ParensDash,
            4 => Self::Space,
            _ => Self::ParensSpace,
        }
    }

    /// The canonical selector of this format.
    pub fn selector(self) -> usize {
        self as usize
    }

    /// Apply the template to `prefix`.
    pub fn apply(
        self,
        prefix: &str,
    ) -> String {
        match self {
            Self::Bare => prefix.to_string(),
            Self::Parens => format!("({prefix})"),
            Self::Dash => format!("{prefix}-"),
            Self::ParensDash => format!("({prefix})-"),
            Self::Space => format!("{prefix} "),
            Self::ParensSpace => format!("({prefix}) "),
        }
    }
}

/// Separator between the digit groups of the line number.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NumberFormat {
    /// ``5551234``
    #[default]
    Joined,

    /// ``555-1234``
    Dashed,

    /// ``555 1234``
    Spaced,
}

impl NumberFormat {
    /// Select a format; selectors ``>= 2`` select [`Spaced`](Self::Spaced).
    pub fn from_selector(selector: usize) -> Self {
        match selector {
            0 => Self::Joined,
            1 => Self::Dashed,
            _ => Self::Spaced,
        }
    }

    /// The canonical selector of this format.
    pub fn selector(self) -> usize {
        self as usize
    }

    /// The group separator.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Joined => "",
            Self::Dashed => "-",
            Self::Spaced => " ",
        }
    }

    /// Join `groups` with the separator.
    pub fn apply<S: AsRef<str>>(
        self,
        groups: &[S],
    ) -> String {
        let mut result = String::new();
        for (idx, group) in groups.iter().enumerate() {
            if idx > 0 {
                result.push_str(self.separator());
            }
            result.push_str(group.as_ref());
        }
        result
    }
}

/// Format a country extension; see [`ExtensionFormat::from_selector`].
pub fn format_extension(
    ext: &str,
    selector: usize,
) -> String {
    ExtensionFormat::from_selector(selector).apply(ext)
}

/// Format an area prefix; see [`PrefixFormat::from_selector`].
pub fn format_prefix(
    prefix: &str,
    selector: usize,
) -> String {
    PrefixFormat::from_selector(selector).apply(prefix)
}

/// Join line-number groups; see [`NumberFormat::from_selector`].
pub fn format_number_groups<S: AsRef<str>>(
    groups: &[S],
    selector: usize,
) -> String {
    NumberFormat::from_selector(selector).apply(groups)
}
