use super::loader::{CatalogueError, validate_catalogue};
use super::mapping::unmapped_names;
use super::*;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn def(name: &str, key: &str) -> BenchmarkDefinition {
    BenchmarkDefinition {
        name: name.to_string(),
        key: key.to_string(),
        category: "bias".to_string(),
    }
}

#[test]
fn test_builtin_catalogue_loaded() {
    let catalogue = builtin_catalogue();
    assert_eq!(catalogue.categories.len(), 5);
    assert_eq!(catalogue.categories[0].code, "technical_robustness_safety");

    let fairness = catalogue
        .category("diversity_non_discrimination_fairness")
        .unwrap();
    assert_eq!(fairness.endpoint.as_deref(), Some("/partial_9"));
    assert_eq!(fairness.benchmarks.len(), 5);
    assert_eq!(fairness.benchmarks[0].key, "reddit_bias_score");
    assert!(
        catalogue
            .categories
            .iter()
            .flat_map(|c| c.benchmarks.iter())
            .all(|b| b.key.ends_with("_score"))
    );
}

#[test]
fn test_builtin_catalogue_is_valid() {
    let catalogue = builtin_catalogue();
    assert!(validate_catalogue(catalogue.categories).is_ok());
}

#[test]
fn test_model_column_substring_case_insensitive() {
    let h = headers(&["T", "Model Name", "Report"]);
    assert_eq!(resolve_model_column(&h), Some(1));
    let h = headers(&["MODEL", "x"]);
    assert_eq!(resolve_model_column(&h), Some(0));
}

#[test]
fn test_model_column_first_match_wins() {
    let h = headers(&["Score", "Model", "Model Type"]);
    assert_eq!(resolve_model_column(&h), Some(1));
}

#[test]
fn test_model_column_not_found() {
    let h = headers(&["Name", "Score"]);
    assert_eq!(resolve_model_column(&h), None);
}

#[test]
fn test_benchmark_columns_exact_match_only() {
    let h = headers(&[
        "Model",
        "Representation Bias: RedditBias",
        "Prejudiced Answers: BBQ",
        "prejudiced answers: bbq (v2)",
    ]);
    let defs = vec![
        def("Representation Bias: RedditBias", "reddit_bias_score"),
        def("Prejudiced Answers: BBQ", "bbq_prejudice_score"),
        def("Biased Completions: BOLD", "bold_completions_score"),
        def("Representation Bias", "partial_name"),
    ];
    let map = resolve_benchmark_columns(&h, &defs);
    assert_eq!(map.get("Representation Bias: RedditBias"), Some(&1));
    assert_eq!(map.get("Prejudiced Answers: BBQ"), Some(&2));
    assert!(!map.contains_key("Biased Completions: BOLD"));
    assert!(!map.contains_key("Representation Bias"));
    assert_eq!(map.len(), 2);

    assert_eq!(
        unmapped_names(&defs, &map),
        vec![
            "Biased Completions: BOLD".to_string(),
            "Representation Bias".to_string()
        ]
    );
}

#[test]
fn test_benchmark_columns_duplicate_header_first_wins() {
    let h = headers(&["Model", "Rule Following", "Rule Following"]);
    let defs = vec![def("Rule Following", "rule_following_score")];
    let map = resolve_benchmark_columns(&h, &defs);
    assert_eq!(map.get("Rule Following"), Some(&1));
}

#[test]
fn test_benchmark_columns_idempotent() {
    let h = headers(&["Model", "A", "B"]);
    let defs = vec![def("B", "b"), def("A", "a"), def("C", "c")];
    let first = resolve_benchmark_columns(&h, &defs);
    let second = resolve_benchmark_columns(&h, &defs);
    assert_eq!(first, second);
}

#[test]
fn test_catalogue_rejects_duplicates() {
    let cat = |code: &str, names: &[&str]| CategoryDef {
        code: code.to_string(),
        endpoint: None,
        benchmarks: names.iter().map(|n| def(n, "k")).collect(),
    };

    let err = validate_catalogue(vec![cat("a", &["x", "x"])]).unwrap_err();
    assert!(matches!(err, CatalogueError::DuplicateBenchmark { .. }));

    let err = validate_catalogue(vec![cat("a", &["x"]), cat("a", &["y"])]).unwrap_err();
    assert!(matches!(err, CatalogueError::DuplicateCategory(code) if code == "a"));

    let err = validate_catalogue(vec![cat(" ", &["x"])]).unwrap_err();
    assert!(matches!(err, CatalogueError::EmptyCode(0)));

    assert!(matches!(
        validate_catalogue(Vec::new()).unwrap_err(),
        CatalogueError::Empty
    ));
}

#[test]
fn test_catalogue_json_shape() {
    let raw = r#"[{"code":"fairness","benchmarks":[
        {"name":"Prejudiced Answers: BBQ","key":"bbq_prejudice_score","category":"bias"}
    ]}]"#;
    let categories: Vec<CategoryDef> = serde_json::from_str(raw).unwrap();
    let catalogue = validate_catalogue(categories).unwrap();
    let fairness = catalogue.category("fairness").unwrap();
    assert_eq!(fairness.endpoint, None);
    assert_eq!(fairness.benchmarks[0].name, "Prejudiced Answers: BBQ");
    assert_eq!(catalogue.codes(), vec!["fairness"]);
}
