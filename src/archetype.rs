//! # Archetype Registry
//!
//! The four MVP shapes the generator can scaffold, with the keyword lists the
//! classifier scores against. The table is static and ordered; order only
//! matters as the classifier's tie-break (first declared wins).
//!
//! Keywords are lowercase stems, Russian and English, matched as plain
//! substrings of the context text. A stem like `анализ` therefore also hits
//! `анализировать` and `анализа`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the four MVP archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArchetypeId {
    AiTool,
    Calculator,
    Dashboard,
    LandingWaitlist,
}

impl ArchetypeId {
    pub const ALL: [ArchetypeId; 4] = [
        ArchetypeId::AiTool,
        ArchetypeId::Calculator,
        ArchetypeId::Dashboard,
        ArchetypeId::LandingWaitlist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeId::AiTool => "ai-tool",
            ArchetypeId::Calculator => "calculator",
            ArchetypeId::Dashboard => "dashboard",
            ArchetypeId::LandingWaitlist => "landing-waitlist",
        }
    }

    /// The registry entry for this id. Every id has one.
    pub fn definition(&self) -> &'static ArchetypeDefinition {
        match self {
            ArchetypeId::AiTool => &REGISTRY[0],
            ArchetypeId::Calculator => &REGISTRY[1],
            ArchetypeId::Dashboard => &REGISTRY[2],
            ArchetypeId::LandingWaitlist => &REGISTRY[3],
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "ai-tool" | "ai" => Ok(ArchetypeId::AiTool),
            "calculator" | "calc" => Ok(ArchetypeId::Calculator),
            "dashboard" => Ok(ArchetypeId::Dashboard),
            "landing-waitlist" | "landing" | "waitlist" => Ok(ArchetypeId::LandingWaitlist),
            other => anyhow::bail!(
                "unknown archetype '{other}' (expected one of: ai-tool, calculator, dashboard, landing-waitlist)"
            ),
        }
    }
}

impl Serialize for ArchetypeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Rough build effort of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Low => write!(f, "low"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::High => write!(f, "high"),
        }
    }
}

/// Static description of an archetype.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeDefinition {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub description: &'static str,
    /// Lowercase substrings scored by the classifier
    pub keywords: &'static [&'static str],
    pub features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub complexity: Complexity,
    pub generation_time: &'static str,
}

static REGISTRY: [ArchetypeDefinition; 4] = [
    ArchetypeDefinition {
        id: ArchetypeId::AiTool,
        name: "AI Tool",
        description: "Single-purpose AI assistant that turns user input into structured analysis",
        keywords: &[
            "анализ",
            "отзыв",
            "суммариз",
            "генерир",
            "нейросет",
            "автоматиз",
            "распозна",
            "классифиц",
            "review",
            "feedback",
            "analyz",
            "analys",
            "summar",
            "generat",
            "automat",
            "classif",
            "extract",
            "gpt",
            "llm",
            "chatbot",
        ],
        features: &[
            "AI-powered analysis via OpenAI",
            "Input form tailored to the use case",
            "Structured result rendering",
            "Server-side API route keeping the key secret",
            "Copy results to clipboard",
        ],
        tech_stack: &[
            "Next.js 14",
            "TypeScript",
            "Tailwind CSS",
            "OpenAI API",
            "Vercel",
        ],
        complexity: Complexity::Medium,
        generation_time: "2-3 minutes",
    },
    ArchetypeDefinition {
        id: ArchetypeId::Calculator,
        name: "Calculator",
        description: "Interactive calculator that answers a cost, ROI or conversion question",
        keywords: &[
            "рассчит",
            "расчет",
            "расчёт",
            "калькул",
            "стоимост",
            "бюджет",
            "окупаем",
            "прибыл",
            "конверси",
            "тариф",
            "calculat",
            "pricing",
            "price",
            "cost",
            "roi",
            "budget",
            "profit",
            "payback",
            "conversion",
            "estimate",
        ],
        features: &[
            "Live recalculation as inputs change",
            "Preset field schema for the problem type",
            "Formatted currency and percentage results",
            "Formula explanation",
            "Shareable, no backend required",
        ],
        tech_stack: &["Next.js 14", "TypeScript", "Tailwind CSS", "Vercel"],
        complexity: Complexity::Low,
        generation_time: "1-2 minutes",
    },
    ArchetypeDefinition {
        id: ArchetypeId::Dashboard,
        name: "Dashboard",
        description: "Monitoring dashboard that aggregates signals into metrics and trends",
        keywords: &[
            "дашборд",
            "мониторинг",
            "отслеж",
            "метрик",
            "статистик",
            "аналитик",
            "агрегир",
            "отчет",
            "отчёт",
            "dashboard",
            "monitor",
            "track",
            "metric",
            "analytics",
            "statistic",
            "aggregat",
            "report",
            "insight",
        ],
        features: &[
            "Four canonical metric cards",
            "Trend chart",
            "Top items list",
            "Period, search and category filters",
            "Pluggable data sources",
        ],
        tech_stack: &[
            "Next.js 14",
            "TypeScript",
            "Tailwind CSS",
            "Client-side polling",
            "Vercel",
        ],
        complexity: Complexity::High,
        generation_time: "3-4 minutes",
    },
    ArchetypeDefinition {
        id: ArchetypeId::LandingWaitlist,
        name: "Landing + Waitlist",
        description: "Validation landing page that collects waitlist sign-ups before building",
        keywords: &[
            "валидац",
            "лист ожидания",
            "предзаказ",
            "ранний доступ",
            "лендинг",
            "проверить спрос",
            "waitlist",
            "validat",
            "pre-order",
            "early access",
            "landing",
            "sign-up",
            "signup",
        ],
        features: &[
            "Hero section with value proposition",
            "Three benefit bullets",
            "Six feature cards",
            "Waitlist email capture",
            "Responsive layout",
        ],
        tech_stack: &["Next.js 14", "TypeScript", "Tailwind CSS", "Vercel"],
        complexity: Complexity::Low,
        generation_time: "1 minute",
    },
];

/// The whole registry, in declaration order.
pub fn all() -> &'static [ArchetypeDefinition] {
    &REGISTRY
}

/// Find the definition for `id`.
pub fn lookup(id: ArchetypeId) -> Option<&'static ArchetypeDefinition> {
    REGISTRY.iter().find(|def| def.id == id)
}
