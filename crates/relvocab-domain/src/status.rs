//! Tri-state status chips
//!
//! A boolean flag on an entity is displayed as a small chip. `None` is not
//! falsy here: it means the flag does not apply and gets its own color and
//! a translated "Not applicable" label.

use serde::Serialize;

use crate::traits::Translator;

/// Message key translated for the not-applicable chip
pub const NOT_APPLICABLE_KEY: &str = "Not applicable";

/// Three-valued display state of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanDisplayStatus {
    /// The flag is set
    Confirmed,

    /// The flag is not set
    Denied,

    /// The flag has no meaning for this entity
    NotApplicable,
}

impl BooleanDisplayStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanDisplayStatus::Confirmed => "true",
            BooleanDisplayStatus::Denied => "false",
            BooleanDisplayStatus::NotApplicable => "null",
        }
    }

    /// Parse `true`, `false` or `null` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "true" => Some(BooleanDisplayStatus::Confirmed),
            "false" => Some(BooleanDisplayStatus::Denied),
            "null" => Some(BooleanDisplayStatus::NotApplicable),
            _ => None,
        }
    }
}

impl From<Option<bool>> for BooleanDisplayStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => BooleanDisplayStatus::Confirmed,
            Some(false) => BooleanDisplayStatus::Denied,
            None => BooleanDisplayStatus::NotApplicable,
        }
    }
}

impl From<bool> for BooleanDisplayStatus {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl std::str::FromStr for BooleanDisplayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

/// Sizing variant of a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChipVariant {
    /// Standalone chip
    #[default]
    Default,

    /// Compact chip inside a list row
    InList,
}

impl ChipVariant {
    /// Parse a variant name; anything but `inList` is the default sizing
    pub fn parse(s: &str) -> Self {
        match s {
            "inList" => ChipVariant::InList,
            _ => ChipVariant::Default,
        }
    }

    /// Get the variant name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChipVariant::Default => "default",
            ChipVariant::InList => "inList",
        }
    }

    /// Box metrics for this variant
    pub fn style(&self) -> ChipStyle {
        match self {
            ChipVariant::Default => ChipStyle {
                font_size: 12,
                line_height: "12px",
                height: 25,
                margin_right: Some(7),
                float_left: false,
                width: 120,
                uppercase: true,
                border_radius: 0,
            },
            ChipVariant::InList => ChipStyle {
                font_size: 12,
                line_height: "12px",
                height: 20,
                margin_right: None,
                float_left: true,
                width: 120,
                uppercase: true,
                border_radius: 0,
            },
        }
    }
}

/// Box metrics of a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipStyle {
    /// Font size in pixels
    pub font_size: u16,
    /// CSS line height
    pub line_height: &'static str,
    /// Height in pixels
    pub height: u16,
    /// Right margin in pixels, if any
    pub margin_right: Option<u16>,
    /// Whether the chip floats left
    pub float_left: bool,
    /// Width in pixels
    pub width: u16,
    /// Whether the text is uppercased
    pub uppercase: bool,
    /// Corner radius in pixels
    pub border_radius: u16,
}

/// Color scheme of a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipColor {
    /// Confirmed
    Green,
    /// Denied
    Red,
    /// Not applicable
    Blue,
}

impl ChipColor {
    /// Get the color name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChipColor::Green => "green",
            ChipColor::Red => "red",
            ChipColor::Blue => "blue",
        }
    }

    /// Foreground (text) color
    pub fn foreground(&self) -> &'static str {
        match self {
            ChipColor::Green => "#4caf50",
            ChipColor::Red => "#f44336",
            ChipColor::Blue => "#5c7bf5",
        }
    }

    /// Translucent background color
    pub fn background(&self) -> &'static str {
        match self {
            ChipColor::Green => "rgba(76, 175, 80, 0.08)",
            ChipColor::Red => "rgba(244, 67, 54, 0.08)",
            ChipColor::Blue => "rgba(92, 123, 245, 0.08)",
        }
    }
}

/// Renderable description of a status chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChip {
    /// Status the chip was rendered from
    pub status: BooleanDisplayStatus,
    /// Color scheme
    pub color: ChipColor,
    /// Sizing variant
    pub variant: ChipVariant,
    /// Box metrics of the variant
    pub style: ChipStyle,
    /// Display text
    pub text: String,
}

/// Render a status into a chip description
///
/// `label` is shown for confirmed and denied flags; a not-applicable flag
/// shows the translated "Not applicable" instead.
pub fn render(
    status: impl Into<BooleanDisplayStatus>,
    label: &str,
    variant: ChipVariant,
    translator: &dyn Translator,
) -> StatusChip {
    let status = status.into();
    let (color, text) = match status {
        BooleanDisplayStatus::Confirmed => (ChipColor::Green, label.to_string()),
        BooleanDisplayStatus::NotApplicable => {
            (ChipColor::Blue, translator.translate(NOT_APPLICABLE_KEY))
        }
        BooleanDisplayStatus::Denied => (ChipColor::Red, label.to_string()),
    };

    StatusChip {
        status,
        color,
        variant,
        style: variant.style(),
        text,
    }
}
