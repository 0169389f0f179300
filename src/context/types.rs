use serde::{Deserialize, Serialize};

/// The market-analysis bundle a project is generated from.
///
/// Only `trend.title` is required, and that is checked by
/// [`crate::validator::validate_context`] rather than at parse time, so a
/// partially filled bundle from upstream always deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub sources: Sources,
    #[serde(default)]
    pub competition: Competition,
    #[serde(default)]
    pub pitch: Pitch,
    /// Structured product shape attached by an upstream planning step.
    #[serde(default, alias = "productSpec", skip_serializing_if = "Option::is_none")]
    pub product_spec: Option<ProductSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, alias = "whyTrending", skip_serializing_if = "Option::is_none")]
    pub why_trending: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, alias = "mainPain", skip_serializing_if = "Option::is_none")]
    pub main_pain: Option<String>,
    #[serde(default, alias = "keyPainPoints")]
    pub key_pain_points: Vec<Insight>,
    #[serde(default, alias = "targetAudience", skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub opportunities: Vec<Insight>,
    #[serde(default)]
    pub risks: Vec<Insight>,
}

/// A pain point, opportunity or risk.
///
/// Upstream services emit either bare strings or small objects; both shapes
/// are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insight {
    Text(String),
    Detailed {
        #[serde(default, alias = "pain", alias = "text", alias = "name")]
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        severity: Option<String>,
    },
}

impl Insight {
    /// The headline text of the insight, else its description.
    pub fn text(&self) -> &str {
        match self {
            Insight::Text(s) => s,
            Insight::Detailed {
                title,
                description: Some(d),
                ..
            } if title.trim().is_empty() => d,
            Insight::Detailed { title, .. } => title,
        }
    }

    /// Longer description when one was supplied, otherwise the headline.
    pub fn detail(&self) -> &str {
        match self {
            Insight::Detailed {
                description: Some(d),
                ..
            } if !d.trim().is_empty() => d,
            other => other.text(),
        }
    }
}

impl From<&str> for Insight {
    fn from(s: &str) -> Self {
        Insight::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    /// Community handles the trend was observed in, e.g. `r/saas`.
    #[serde(default)]
    pub communities: Vec<String>,
    #[serde(default)]
    pub queries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning: Option<String>,
}

/// A competitor, given either as a bare name or as an object.
///
/// A nameless object is kept with an empty name; the validator warns about it
/// and the README leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompetitorEntry")]
pub struct Competitor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weakness: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompetitorEntry {
    Name(String),
    Detailed {
        #[serde(default, alias = "title")]
        name: String,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        weakness: Option<String>,
    },
}

impl From<CompetitorEntry> for Competitor {
    fn from(entry: CompetitorEntry) -> Self {
        match entry {
            CompetitorEntry::Name(name) => Competitor {
                name,
                url: None,
                weakness: None,
            },
            CompetitorEntry::Detailed {
                name,
                url,
                weakness,
            } => Competitor {
                name,
                url,
                weakness,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    #[serde(default, alias = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, alias = "elevatorPitch", skip_serializing_if = "Option::is_none")]
    pub elevator_pitch: Option<String>,
}

/// Canonical input/output shape for an AI tool, declared upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    #[serde(default, alias = "inputType", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, alias = "outputFormat", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(default, alias = "coreAction", skip_serializing_if = "Option::is_none")]
    pub core_action: Option<String>,
}
