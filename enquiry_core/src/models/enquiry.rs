//! Enquiry data model: the wire payload, the validated enquiry and the fixed
//! vocabularies (topics, incoterms, channels) the contact forms offer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for optional fields the submitter left out.
pub const EMPTY_FIELD: &str = "-";

/// Product categories offered by the contact form topic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topic {
    #[default]
    General,
    IronOre,
    Chromite,
    Tungsten,
    LeadOre,
    ManganeseOre,
    Mica,
    Talc,
    Limestone,
    Kaolin,
    Feldspar,
    Quartz,
}

impl Topic {
    const ALL: [Topic; 12] = [
        Topic::General,
        Topic::IronOre,
        Topic::Chromite,
        Topic::Tungsten,
        Topic::LeadOre,
        Topic::ManganeseOre,
        Topic::Mica,
        Topic::Talc,
        Topic::Limestone,
        Topic::Kaolin,
        Topic::Feldspar,
        Topic::Quartz,
    ];

    pub fn all() -> &'static [Topic] {
        &Self::ALL
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Topic::General => "general",
            Topic::IronOre => "iron-ore",
            Topic::Chromite => "chromite",
            Topic::Tungsten => "tungsten",
            Topic::LeadOre => "lead-ore",
            Topic::ManganeseOre => "manganese-ore",
            Topic::Mica => "mica",
            Topic::Talc => "talc",
            Topic::Limestone => "limestone",
            Topic::Kaolin => "kaolin",
            Topic::Feldspar => "feldspar",
            Topic::Quartz => "quartz",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::General => "General enquiry",
            Topic::IronOre => "Iron Ore (Hematite / Magnetite)",
            Topic::Chromite => "Chromite (High Grade)",
            Topic::Tungsten => "Tungsten Ore (Wolframite / Scheelite)",
            Topic::LeadOre => "Lead Ore",
            Topic::ManganeseOre => "Manganese Ore",
            Topic::Mica => "Mica (Muscovite / Phlogopite)",
            Topic::Talc => "Talc",
            Topic::Limestone => "Calcium Carbonate (Limestone)",
            Topic::Kaolin => "Kaolin",
            Topic::Feldspar => "Feldspar",
            Topic::Quartz => "Quartz / Silica",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Topic> {
        Self::ALL.iter().copied().find(|topic| topic.slug() == slug)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    #[default]
    Fob,
    Cif,
}

impl fmt::Display for Incoterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Incoterm::Fob => f.write_str("FOB"),
            Incoterm::Cif => f.write_str("CIF"),
        }
    }
}

/// How the company replies to the submitter. Email is the only channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Email,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("email")
    }
}

/// A volume or budget figure. Forms send numbers, but the quote form sends an
/// empty string for the budget it does not collect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    /// Returns the display text, or `None` when the figure is blank or zero.
    pub fn display_value(&self) -> Option<String> {
        match self {
            Quantity::Number(n) if *n == 0.0 || !n.is_finite() => None,
            Quantity::Number(n) => Some(n.to_string()),
            Quantity::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Number(value)
    }
}

/// JSON body posted to `/api/contact`.
///
/// Every field is optional on the wire so that a missing required field can
/// be reported as such instead of as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnquiryPayload {
    #[serde(rename = "_honey", default)]
    pub honey: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub topic: Option<String>,
    pub volume: Option<Quantity>,
    pub budget: Option<Quantity>,
    pub message: Option<String>,
    pub incoterm: Option<Incoterm>,
    pub destination: Option<String>,
    pub channel: Option<Channel>,
}

impl EnquiryPayload {
    /// True when the hidden honeypot input was filled in.
    pub fn is_trapped(&self) -> bool {
        self.honey
            .as_deref()
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }
}

/// An enquiry whose required fields have been checked. Optional fields that
/// were blank on the wire are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Enquiry {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub topic: String,
    pub volume: Option<String>,
    pub budget: Option<String>,
    pub message: String,
    pub incoterm: Incoterm,
    pub destination: Option<String>,
    pub channel: Channel,
}

impl Enquiry {
    pub fn company_or_placeholder(&self) -> &str {
        self.company.as_deref().unwrap_or(EMPTY_FIELD)
    }

    pub fn volume_or_placeholder(&self) -> &str {
        self.volume.as_deref().unwrap_or(EMPTY_FIELD)
    }

    pub fn budget_or_placeholder(&self) -> &str {
        self.budget.as_deref().unwrap_or(EMPTY_FIELD)
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
