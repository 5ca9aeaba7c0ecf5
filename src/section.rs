//! Section descriptors for the investor summary
//!
//! A deck is an ordered list of [`Section`] values, one per output page. The
//! JSON shape mirrors what the website's export button builds: a `type` tag
//! plus camelCase fields.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One page worth of content, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    Hero(Hero),
    Pain(Pain),
    Solution(Solution),
    Magic(Magic),
    Market(Market),
    BusinessModel(BusinessModel),
    Raise(Raise),
    Closing(Closing),
}

/// Discriminant of a [`Section`], used for page tagging and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Pain,
    Solution,
    Magic,
    Market,
    BusinessModel,
    Raise,
    Closing,
}

impl SectionKind {
    /// The wire tag used in the `type` field
    pub fn tag(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Pain => "pain",
            Self::Solution => "solution",
            Self::Magic => "magic",
            Self::Market => "market",
            Self::BusinessModel => "businessModel",
            Self::Raise => "raise",
            Self::Closing => "closing",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A `{value, label}` pair shown as a stat card or metric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A titled feature box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// One funding option on the raise page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaiseOption {
    pub amount: String,
    pub label: String,
    pub desc: String,
    #[serde(default)]
    pub recommended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub brand: String,
    pub headline: String,
    pub headline_highlight: String,
    pub taglines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pain {
    pub intro: String,
    pub quote: String,
    pub conclusion: Vec<String>,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub title: String,
    pub problem: String,
    pub response: String,
    pub key_message: String,
    pub features: Vec<Feature>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Magic {
    pub title: String,
    pub subtitle: String,
    pub under_the_hood_title: String,
    pub under_the_hood: Vec<String>,
    pub to_the_user_title: String,
    pub to_the_user: String,
    pub benefits: Vec<String>,
    pub testimonial: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<Stat>,
    pub tam_explanation: String,
    pub exclusions_title: String,
    pub exclusions: Vec<String>,
    pub positioning: Vec<String>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModel {
    pub title: String,
    pub features: Vec<Feature>,
    pub metrics: Vec<Stat>,
    pub tagline: String,
    pub referral: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Raise {
    pub title: String,
    pub subtitle: Vec<String>,
    pub options: Vec<RaiseOption>,
    pub recommendation: String,
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Closing {
    pub title: String,
    pub philosophy: String,
    pub pitch: String,
    pub brand: String,
    pub call_to_action: String,
    pub contact_prompt: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct WrappedDeck {
    sections: Vec<Section>,
}

/// Parse a JSON deck, either a bare array or `{ "sections": [...] }`
pub fn parse_deck(json: &str) -> Result<Vec<Section>, serde_json::Error> {
    if json.trim_start().starts_with('{') {
        let deck: WrappedDeck = serde_json::from_str(json)?;
        return Ok(deck.sections);
    }
    serde_json::from_str(json)
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Hero(_) => SectionKind::Hero,
            Self::Pain(_) => SectionKind::Pain,
            Self::Solution(_) => SectionKind::Solution,
            Self::Magic(_) => SectionKind::Magic,
            Self::Market(_) => SectionKind::Market,
            Self::BusinessModel(_) => SectionKind::BusinessModel,
            Self::Raise(_) => SectionKind::Raise,
            Self::Closing(_) => SectionKind::Closing,
        }
    }

    /// Check that every field a renderer reads carries content
    ///
    /// Rendering itself never calls this; it is the opt-in strict pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let check = Checker::new(self.kind().tag());
        match self {
            Self::Hero(s) => {
                check.text("brand", &s.brand)?;
                check.text("headline", &s.headline)?;
                check.text("headlineHighlight", &s.headline_highlight)?;
                check.lines("taglines", &s.taglines)?;
            }
            Self::Pain(s) => {
                check.text("intro", &s.intro)?;
                check.text("quote", &s.quote)?;
                check.lines("conclusion", &s.conclusion)?;
                check.text("callToAction", &s.call_to_action)?;
            }
            Self::Solution(s) => {
                check.text("title", &s.title)?;
                check.text("problem", &s.problem)?;
                check.text("response", &s.response)?;
                check.text("keyMessage", &s.key_message)?;
                check.features(&s.features)?;
                check.text("description", &s.description)?;
            }
            Self::Magic(s) => {
                check.text("title", &s.title)?;
                check.text("subtitle", &s.subtitle)?;
                check.text("underTheHoodTitle", &s.under_the_hood_title)?;
                check.lines("underTheHood", &s.under_the_hood)?;
                check.text("toTheUserTitle", &s.to_the_user_title)?;
                check.text("toTheUser", &s.to_the_user)?;
                check.lines("benefits", &s.benefits)?;
                check.text("testimonial", &s.testimonial)?;
            }
            Self::Market(s) => {
                check.text("title", &s.title)?;
                check.text("subtitle", &s.subtitle)?;
                check.list("stats", &s.stats)?;
                for stat in &s.stats {
                    check.text("stats.value", &stat.value)?;
                    check.text("stats.label", &stat.label)?;
                }
                check.text("tamExplanation", &s.tam_explanation)?;
                check.text("exclusionsTitle", &s.exclusions_title)?;
                check.lines("exclusions", &s.exclusions)?;
                check.lines("positioning", &s.positioning)?;
                check.text("conclusion", &s.conclusion)?;
            }
            Self::BusinessModel(s) => {
                check.text("title", &s.title)?;
                check.features(&s.features)?;
                check.list("metrics", &s.metrics)?;
                for metric in &s.metrics {
                    check.text("metrics.value", &metric.value)?;
                    check.text("metrics.label", &metric.label)?;
                }
                check.text("tagline", &s.tagline)?;
                check.text("referral", &s.referral)?;
            }
            Self::Raise(s) => {
                check.text("title", &s.title)?;
                check.lines("subtitle", &s.subtitle)?;
                check.list("options", &s.options)?;
                for option in &s.options {
                    check.text("options.amount", &option.amount)?;
                    check.text("options.label", &option.label)?;
                    check.text("options.desc", &option.desc)?;
                }
                let recommended = s.options.iter().filter(|o| o.recommended).count();
                if recommended > 1 {
                    return Err(ValidationError::MultipleRecommended { count: recommended });
                }
                check.text("recommendation", &s.recommendation)?;
                check.text("closing", &s.closing)?;
            }
            Self::Closing(s) => {
                check.text("title", &s.title)?;
                check.text("philosophy", &s.philosophy)?;
                check.text("pitch", &s.pitch)?;
                check.text("brand", &s.brand)?;
                check.text("callToAction", &s.call_to_action)?;
                check.text("contactPrompt", &s.contact_prompt)?;
                check.text("email", &s.email)?;
            }
        }
        Ok(())
    }
}

struct Checker {
    section: &'static str,
}

impl Checker {
    fn new(section: &'static str) -> Self {
        Self { section }
    }

    fn text(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::missing(self.section, field));
        }
        Ok(())
    }

    fn list<T>(&self, field: &'static str, items: &[T]) -> Result<(), ValidationError> {
        if items.is_empty() {
            return Err(ValidationError::empty(self.section, field));
        }
        Ok(())
    }

    /// A non-empty list whose every entry is drawn as a line of text
    fn lines(&self, field: &'static str, items: &[String]) -> Result<(), ValidationError> {
        self.list(field, items)?;
        items.iter().try_for_each(|item| self.text(field, item))
    }

    fn features(&self, features: &[Feature]) -> Result<(), ValidationError> {
        self.list("features", features)?;
        for feature in features {
            self.text("features.title", &feature.title)?;
            self.text("features.description", &feature.description)?;
        }
        Ok(())
    }
}
