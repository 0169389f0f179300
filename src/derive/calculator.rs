//! Calculator config: one of four fixed field schemas, chosen by the keyword
//! family the pain text falls into.
//!
//! A schema is fully static: input fields, result fields, the TypeScript that
//! computes intermediate values from `v` (the current input values) and one
//! expression per result. Nothing user-supplied reaches the expressions.

use crate::context::{mentions_any, AnalysisContext};
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Cost,
    Roi,
    Conversion,
    Generic,
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalculatorKind::Cost => "cost",
            CalculatorKind::Roi => "roi",
            CalculatorKind::Conversion => "conversion",
            CalculatorKind::Generic => "generic",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Number {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    Select {
        options: &'static [(&'static str, &'static str)],
        default: &'static str,
    },
    Toggle {
        default: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Unit shown next to the field, e.g. `$` or `%`
    pub unit: Option<&'static str>,
}

impl InputField {
    /// TypeScript literal for the field's initial value.
    pub fn default_literal(&self) -> String {
        match self.kind {
            FieldKind::Number { default, .. } => format_number(default),
            FieldKind::Select { default, .. } => format!("'{default}'"),
            FieldKind::Toggle { default } => default.to_string(),
        }
    }
}

/// Render a number the way it is written in TypeScript source.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    Currency,
    Percent,
    Number,
    Text,
}

impl DisplayFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayFormat::Currency => "currency",
            DisplayFormat::Percent => "percent",
            DisplayFormat::Number => "number",
            DisplayFormat::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultField {
    pub key: &'static str,
    pub label: &'static str,
    pub format: DisplayFormat,
    /// TypeScript expression over the prelude's locals and `v`
    pub expression: &'static str,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorSchema {
    pub kind: CalculatorKind,
    pub inputs: &'static [InputField],
    pub results: &'static [ResultField],
    /// TypeScript statements run before the result expressions
    pub prelude: &'static str,
    pub formula: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorConfig {
    pub name: String,
    pub description: String,
    pub headline: String,
    pub schema: CalculatorSchema,
}

impl CalculatorConfig {
    pub fn kind(&self) -> CalculatorKind {
        self.schema.kind
    }

    pub fn input_keys(&self) -> Vec<&'static str> {
        self.schema.inputs.iter().map(|f| f.key).collect()
    }

    pub fn result_keys(&self) -> Vec<&'static str> {
        self.schema.results.iter().map(|f| f.key).collect()
    }
}

const COST_KEYWORDS: &[&str] = &[
    "стоимост",
    "цен",
    "тариф",
    "подписк",
    "price",
    "pricing",
    "cost",
    "subscription",
];
const ROI_KEYWORDS: &[&str] = &[
    "roi",
    "окупаем",
    "окупит",
    "инвестиц",
    "payback",
    "investment",
];
const CONVERSION_KEYWORDS: &[&str] = &["конверси", "воронк", "conversion", "funnel"];

const PLAN_OPTIONS: &[(&str, &str)] = &[
    ("basic", "Basic ($10/user)"),
    ("pro", "Pro ($25/user)"),
    ("enterprise", "Enterprise ($50/user)"),
];
const PERIOD_OPTIONS: &[(&str, &str)] = &[("monthly", "Monthly"), ("annual", "Annual (-20%)")];

pub static COST_SCHEMA: CalculatorSchema = CalculatorSchema {
    kind: CalculatorKind::Cost,
    inputs: &[
        InputField {
            key: "users",
            label: "Team members",
            kind: FieldKind::Number {
                min: 1.0,
                max: 10000.0,
                step: 1.0,
                default: 10.0,
            },
            unit: None,
        },
        InputField {
            key: "period",
            label: "Billing period",
            kind: FieldKind::Select {
                options: PERIOD_OPTIONS,
                default: "monthly",
            },
            unit: None,
        },
        InputField {
            key: "plan",
            label: "Plan",
            kind: FieldKind::Select {
                options: PLAN_OPTIONS,
                default: "pro",
            },
            unit: None,
        },
        InputField {
            key: "support",
            label: "Priority support ($99/mo)",
            kind: FieldKind::Toggle { default: false },
            unit: None,
        },
    ],
    results: &[
        ResultField {
            key: "monthlyCost",
            label: "Monthly cost",
            format: DisplayFormat::Currency,
            expression: "monthly",
            highlight: true,
        },
        ResultField {
            key: "annualCost",
            label: "Annual cost",
            format: DisplayFormat::Currency,
            expression: "monthly * 12",
            highlight: false,
        },
        ResultField {
            key: "savings",
            label: "Annual savings",
            format: DisplayFormat::Currency,
            expression: "base * 12 * annualDiscount",
            highlight: false,
        },
        ResultField {
            key: "perUser",
            label: "Cost per member",
            format: DisplayFormat::Currency,
            expression: "Number(v.users) > 0 ? monthly / Number(v.users) : 0",
            highlight: false,
        },
    ],
    prelude: "const planPrice: Record<string, number> = { basic: 10, pro: 25, enterprise: 50 };
  const base = Number(v.users) * (planPrice[String(v.plan)] ?? 0);
  const annualDiscount = v.period === 'annual' ? 0.2 : 0;
  const supportFee = v.support ? 99 : 0;
  const monthly = base * (1 - annualDiscount) + supportFee;",
    formula: "Monthly cost = members × plan price × (1 − annual discount) + support fee",
};

pub static ROI_SCHEMA: CalculatorSchema = CalculatorSchema {
    kind: CalculatorKind::Roi,
    inputs: &[
        InputField {
            key: "investment",
            label: "Upfront investment",
            kind: FieldKind::Number {
                min: 0.0,
                max: 10_000_000.0,
                step: 100.0,
                default: 10000.0,
            },
            unit: Some("$"),
        },
        InputField {
            key: "monthlyRevenue",
            label: "Expected monthly revenue",
            kind: FieldKind::Number {
                min: 0.0,
                max: 1_000_000.0,
                step: 100.0,
                default: 3000.0,
            },
            unit: Some("$"),
        },
        InputField {
            key: "monthlyCosts",
            label: "Monthly running costs",
            kind: FieldKind::Number {
                min: 0.0,
                max: 1_000_000.0,
                step: 100.0,
                default: 1000.0,
            },
            unit: Some("$"),
        },
        InputField {
            key: "months",
            label: "Time horizon (months)",
            kind: FieldKind::Number {
                min: 1.0,
                max: 120.0,
                step: 1.0,
                default: 12.0,
            },
            unit: None,
        },
    ],
    results: &[
        ResultField {
            key: "roi",
            label: "Return on investment",
            format: DisplayFormat::Percent,
            expression: "Number(v.investment) > 0 ? netProfit / Number(v.investment) : 0",
            highlight: true,
        },
        ResultField {
            key: "paybackMonths",
            label: "Payback period (months)",
            format: DisplayFormat::Number,
            expression: "monthlyNet > 0 ? Math.ceil(Number(v.investment) / monthlyNet) : 0",
            highlight: false,
        },
        ResultField {
            key: "netProfit",
            label: "Net profit over horizon",
            format: DisplayFormat::Currency,
            expression: "netProfit",
            highlight: false,
        },
        ResultField {
            key: "verdict",
            label: "Verdict",
            format: DisplayFormat::Text,
            expression: "netProfit > 0 ? 'Pays off within the horizon' : 'Does not pay off yet'",
            highlight: false,
        },
    ],
    prelude: "const monthlyNet = Number(v.monthlyRevenue) - Number(v.monthlyCosts);
  const netProfit = monthlyNet * Number(v.months) - Number(v.investment);",
    formula: "ROI = (monthly net × months − investment) ÷ investment; payback = investment ÷ monthly net",
};

pub static CONVERSION_SCHEMA: CalculatorSchema = CalculatorSchema {
    kind: CalculatorKind::Conversion,
    inputs: &[
        InputField {
            key: "visitors",
            label: "Monthly visitors",
            kind: FieldKind::Number {
                min: 0.0,
                max: 100_000_000.0,
                step: 100.0,
                default: 10000.0,
            },
            unit: None,
        },
        InputField {
            key: "conversionRate",
            label: "Current conversion rate",
            kind: FieldKind::Number {
                min: 0.0,
                max: 100.0,
                step: 0.1,
                default: 2.0,
            },
            unit: Some("%"),
        },
        InputField {
            key: "averageOrder",
            label: "Average order value",
            kind: FieldKind::Number {
                min: 0.0,
                max: 100_000.0,
                step: 1.0,
                default: 50.0,
            },
            unit: Some("$"),
        },
        InputField {
            key: "targetRate",
            label: "Target conversion rate",
            kind: FieldKind::Number {
                min: 0.0,
                max: 100.0,
                step: 0.1,
                default: 3.0,
            },
            unit: Some("%"),
        },
    ],
    results: &[
        ResultField {
            key: "currentRevenue",
            label: "Current monthly revenue",
            format: DisplayFormat::Currency,
            expression: "currentCustomers * Number(v.averageOrder)",
            highlight: false,
        },
        ResultField {
            key: "targetRevenue",
            label: "Revenue at target rate",
            format: DisplayFormat::Currency,
            expression: "targetCustomers * Number(v.averageOrder)",
            highlight: false,
        },
        ResultField {
            key: "upliftRevenue",
            label: "Monthly uplift",
            format: DisplayFormat::Currency,
            expression: "(targetCustomers - currentCustomers) * Number(v.averageOrder)",
            highlight: true,
        },
        ResultField {
            key: "extraCustomers",
            label: "Extra customers per month",
            format: DisplayFormat::Number,
            expression: "Math.round(targetCustomers - currentCustomers)",
            highlight: false,
        },
    ],
    prelude: "const currentCustomers = Number(v.visitors) * Number(v.conversionRate) / 100;
  const targetCustomers = Number(v.visitors) * Number(v.targetRate) / 100;",
    formula: "Revenue = visitors × conversion rate × average order; uplift = revenue at target − current revenue",
};

pub static GENERIC_SCHEMA: CalculatorSchema = CalculatorSchema {
    kind: CalculatorKind::Generic,
    inputs: &[
        InputField {
            key: "quantity",
            label: "Quantity",
            kind: FieldKind::Number {
                min: 0.0,
                max: 1_000_000.0,
                step: 1.0,
                default: 1.0,
            },
            unit: None,
        },
        InputField {
            key: "unitPrice",
            label: "Unit price",
            kind: FieldKind::Number {
                min: 0.0,
                max: 1_000_000.0,
                step: 0.01,
                default: 100.0,
            },
            unit: Some("$"),
        },
        InputField {
            key: "discount",
            label: "Discount",
            kind: FieldKind::Number {
                min: 0.0,
                max: 100.0,
                step: 1.0,
                default: 0.0,
            },
            unit: Some("%"),
        },
        InputField {
            key: "taxRate",
            label: "Tax rate",
            kind: FieldKind::Number {
                min: 0.0,
                max: 100.0,
                step: 0.5,
                default: 20.0,
            },
            unit: Some("%"),
        },
    ],
    results: &[
        ResultField {
            key: "subtotal",
            label: "Subtotal",
            format: DisplayFormat::Currency,
            expression: "subtotal",
            highlight: false,
        },
        ResultField {
            key: "discountAmount",
            label: "Discount",
            format: DisplayFormat::Currency,
            expression: "discountAmount",
            highlight: false,
        },
        ResultField {
            key: "tax",
            label: "Tax",
            format: DisplayFormat::Currency,
            expression: "tax",
            highlight: false,
        },
        ResultField {
            key: "total",
            label: "Total",
            format: DisplayFormat::Currency,
            expression: "subtotal - discountAmount + tax",
            highlight: true,
        },
    ],
    prelude: "const subtotal = Number(v.quantity) * Number(v.unitPrice);
  const discountAmount = subtotal * Number(v.discount) / 100;
  const tax = (subtotal - discountAmount) * Number(v.taxRate) / 100;",
    formula: "Total = quantity × unit price − discount + tax",
};

/// Pick the schema family for already-lowercased `text`.
pub fn detect_kind(text: &str) -> CalculatorKind {
    if mentions_any(text, COST_KEYWORDS) {
        CalculatorKind::Cost
    } else if mentions_any(text, ROI_KEYWORDS) {
        CalculatorKind::Roi
    } else if mentions_any(text, CONVERSION_KEYWORDS) {
        CalculatorKind::Conversion
    } else {
        CalculatorKind::Generic
    }
}

pub fn schema_for(kind: CalculatorKind) -> CalculatorSchema {
    match kind {
        CalculatorKind::Cost => COST_SCHEMA,
        CalculatorKind::Roi => ROI_SCHEMA,
        CalculatorKind::Conversion => CONVERSION_SCHEMA,
        CalculatorKind::Generic => GENERIC_SCHEMA,
    }
}

fn headline_for(kind: CalculatorKind) -> &'static str {
    match kind {
        CalculatorKind::Cost => "Work out what it really costs",
        CalculatorKind::Roi => "See when your investment pays off",
        CalculatorKind::Conversion => "Find the revenue hiding in your funnel",
        CalculatorKind::Generic => "Get the numbers in seconds",
    }
}

/// Derive the calculator config for `ctx`. Never fails.
pub fn derive_config(ctx: &AnalysisContext) -> CalculatorConfig {
    let kind = detect_kind(&ctx.searchable_text());
    debug!(%kind, "selected calculator schema");

    let description = ctx
        .tagline()
        .or_else(|| ctx.main_pain())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Calculator for {}", ctx.title()));

    CalculatorConfig {
        name: ctx.display_name().to_string(),
        description,
        headline: headline_for(kind).to_string(),
        schema: schema_for(kind),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_cost_family_schema() {
        let ctx = AnalysisContext::from_title("Idea")
            .with_main_pain("сложно рассчитать стоимость подписки для команды");
        let cfg = derive_config(&ctx);
        assert_eq!(cfg.kind(), CalculatorKind::Cost);
        assert_eq!(cfg.input_keys(), vec!["users", "period", "plan", "support"]);
        assert_eq!(
            cfg.result_keys(),
            vec!["monthlyCost", "annualCost", "savings", "perUser"]
        );
    }

    #[test]
    fn test_family_order() {
        assert_eq!(detect_kind("roi of our pricing"), CalculatorKind::Cost);
        assert_eq!(detect_kind("когда окупится проект"), CalculatorKind::Roi);
        assert_eq!(detect_kind("низкая конверсия лендинга"), CalculatorKind::Conversion);
        assert_eq!(detect_kind("how many bricks"), CalculatorKind::Generic);
    }

    #[test]
    fn test_every_schema_has_four_inputs_and_results() {
        for kind in [
            CalculatorKind::Cost,
            CalculatorKind::Roi,
            CalculatorKind::Conversion,
            CalculatorKind::Generic,
        ] {
            let schema = schema_for(kind);
            assert_eq!(schema.kind, kind);
            assert_eq!(schema.inputs.len(), 4);
            assert_eq!(schema.results.len(), 4);
            assert_eq!(schema.results.iter().filter(|r| r.highlight).count(), 1);
            assert!(!schema.formula.is_empty());
        }
    }

    #[test]
    fn test_number_bounds_contain_default() {
        for schema in [COST_SCHEMA, ROI_SCHEMA, CONVERSION_SCHEMA, GENERIC_SCHEMA] {
            for field in schema.inputs {
                if let FieldKind::Number { min, max, default, .. } = field.kind {
                    assert!(min <= default && default <= max, "{}", field.key);
                }
            }
        }
    }

    #[test]
    fn test_default_literals() {
        let users = COST_SCHEMA.inputs[0];
        assert_eq!(users.default_literal(), "10");
        assert_eq!(COST_SCHEMA.inputs[1].default_literal(), "'monthly'");
        assert_eq!(COST_SCHEMA.inputs[3].default_literal(), "false");
        assert_eq!(CONVERSION_SCHEMA.inputs[1].default_literal(), "2");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn test_description_padding() {
        let cfg = derive_config(&AnalysisContext::from_title("Bricks"));
        assert_eq!(cfg.kind(), CalculatorKind::Generic);
        assert_eq!(cfg.description, "Calculator for Bricks");
        assert_eq!(cfg.headline, "Get the numbers in seconds");
    }
}
