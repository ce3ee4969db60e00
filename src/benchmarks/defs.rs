use crate::benchmarks::{BenchmarkDefinition, Catalogue, CategoryDef};

#[derive(Debug, Clone, Copy)]
pub struct BenchmarkSpec {
    pub name: &'static str,
    pub key: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub code: &'static str,
    pub endpoint: &'static str,
    pub benchmarks: &'static [BenchmarkSpec],
}

const fn bench(name: &'static str, key: &'static str, category: &'static str) -> BenchmarkSpec {
    BenchmarkSpec {
        name,
        key,
        category,
    }
}

const TECHNICAL_ROBUSTNESS_SAFETY: &[BenchmarkSpec] = &[
    bench("MMLU: Robustness", "mmlu_robustness_score", "robustness"),
    bench("BoolQ Contrast Set", "boolq_contrast_score", "robustness"),
    bench("IMDB Contrast Set", "imdb_contrast_score", "robustness"),
    bench("Monotonicity Checks", "monotonicity_score", "robustness"),
    bench(
        "Self-Check Consistency",
        "self_check_consistency_score",
        "robustness",
    ),
    bench(
        "Goal Hijacking and Prompt Leakage",
        "goal_hijacking_score",
        "cyberattack_resilience",
    ),
    bench("Rule Following", "rule_following_score", "cyberattack_resilience"),
];

const PRIVACY_DATA_GOVERNANCE: &[BenchmarkSpec] = &[
    bench(
        "Toxicity of the Dataset",
        "dataset_toxicity_score",
        "data_governance",
    ),
    bench("Bias of the Dataset", "dataset_bias_score", "data_governance"),
    bench(
        "Copyrighted Material Memorization",
        "copyright_memorization_score",
        "copyright",
    ),
    bench(
        "PII Extraction by Association",
        "pii_extraction_score",
        "privacy",
    ),
];

const TRANSPARENCY: &[BenchmarkSpec] = &[
    bench("General Knowledge: MMLU", "mmlu_knowledge_score", "capabilities"),
    bench(
        "Reasoning: AI2 Reasoning Challenge",
        "arc_reasoning_score",
        "capabilities",
    ),
    bench(
        "Common Sense Reasoning: HellaSwag",
        "hellaswag_score",
        "capabilities",
    ),
    bench(
        "Truthfulness: TruthfulQA MC2",
        "truthfulqa_score",
        "capabilities",
    ),
    bench("Coding: HumanEval", "humaneval_score", "capabilities"),
    bench(
        "Logit Calibration: BIG-Bench",
        "logit_calibration_score",
        "interpretability",
    ),
    bench(
        "Self-Assessment: TriviaQA",
        "self_assessment_score",
        "interpretability",
    ),
    bench(
        "Denying Human Presence",
        "human_presence_denial_score",
        "disclosure",
    ),
    bench(
        "Watermark Reliability & Robustness",
        "watermark_score",
        "traceability",
    ),
];

const DIVERSITY_NON_DISCRIMINATION_FAIRNESS: &[BenchmarkSpec] = &[
    bench(
        "Representation Bias: RedditBias",
        "reddit_bias_score",
        "bias",
    ),
    bench("Prejudiced Answers: BBQ", "bbq_prejudice_score", "bias"),
    bench("Biased Completions: BOLD", "bold_completions_score", "bias"),
    bench(
        "Income Fairness: DecodingTrust",
        "income_fairness_score",
        "fairness",
    ),
    bench(
        "Recommendation Consistency: FaiRLLM",
        "recommendation_consistency_score",
        "fairness",
    ),
];

const SOCIAL_ENVIRONMENTAL_WELLBEING: &[BenchmarkSpec] = &[
    bench(
        "Toxic Completions of Benign Text: RealToxicityPrompts",
        "toxic_completions_score",
        "harmful_content",
    ),
    bench(
        "Following Harmful Instructions: AdvBench",
        "harmful_instructions_score",
        "harmful_content",
    ),
];

const BUILTIN_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        code: "technical_robustness_safety",
        endpoint: "/partial",
        benchmarks: TECHNICAL_ROBUSTNESS_SAFETY,
    },
    CategorySpec {
        code: "privacy_data_governance",
        endpoint: "/partial_2",
        benchmarks: PRIVACY_DATA_GOVERNANCE,
    },
    CategorySpec {
        code: "transparency",
        endpoint: "/partial_5",
        benchmarks: TRANSPARENCY,
    },
    CategorySpec {
        code: "diversity_non_discrimination_fairness",
        endpoint: "/partial_9",
        benchmarks: DIVERSITY_NON_DISCRIMINATION_FAIRNESS,
    },
    CategorySpec {
        code: "social_environmental_wellbeing",
        endpoint: "/partial_11",
        benchmarks: SOCIAL_ENVIRONMENTAL_WELLBEING,
    },
];

/// The five dashboard categories with their endpoints and benchmark header names.
///
/// The dashboard only groups benchmarks by request parameter (`param_0`,
/// `param_1`, ...). The `category` sub-group labels and every `key` here are
/// local identifiers chosen for this crate, not dashboard data; only the
/// fairness keys and groups (`bias`, `fairness`) follow the dashboard's own
/// mapping script.
pub fn builtin_catalogue() -> Catalogue {
    let categories = BUILTIN_CATEGORIES
        .iter()
        .map(|spec| CategoryDef {
            code: spec.code.to_string(),
            endpoint: Some(spec.endpoint.to_string()),
            benchmarks: spec
                .benchmarks
                .iter()
                .map(|b| BenchmarkDefinition {
                    name: b.name.to_string(),
                    key: b.key.to_string(),
                    category: b.category.to_string(),
                })
                .collect(),
        })
        .collect();
    Catalogue { categories }
}
