use namescreen::{rank, to_json_rows, Candidate, Query, RankOptions, Record, Screener};
use std::sync::Arc;

const SDN: &str = r#"[
    {"name": "JON SMITH", "entity_id": "100", "program": "SDGT"},
    {"name": "ALICE JONES", "alt_names": ["JOHN SMYTHE"], "entity_id": "200", "program": "IRAN"},
    {"name": "ROBERT BROWN", "entity_id": "300", "program": "CUBA"},
    {"name": "BANCO NACIONAL DE CUBA", "alt_names": "BNC", "entity_id": "306", "program": "CUBA"}
]"#;

fn pool() -> Vec<Candidate<Record>> {
    Record::list_from_json(SDN)
        .unwrap()
        .into_iter()
        .map(Record::into_candidate)
        .collect()
}

#[test]
fn test_screening_end_to_end() {
    let screener = Screener::new(
        pool(),
        RankOptions {
            limit: 2,
            min_match: 0.5,
            threads: None,
        },
    )
    .unwrap();

    let results = screener.search(&Query::new("John Smith", Vec::<&str>::new())).unwrap();
    let rows = to_json_rows(&results);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["entity_id"], "100");
    assert_eq!(rows[1]["entity_id"], "200");
    assert_eq!(rows[1]["name"], "ALICE JONES");
    assert!(rows[0]["match"].as_f64().unwrap() > rows[1]["match"].as_f64().unwrap());
}

#[test]
fn test_rank_matches_screener() {
    let candidates = pool();
    let query = Query::new("banco nacional de cuba", Vec::<&str>::new());

    let direct = rank(3, 0.0, &query, &candidates).unwrap();
    let screener = Screener::new(pool(), RankOptions::default()).unwrap();
    let via_engine = screener.search_with(&query, 3, 0.0).unwrap();

    assert_eq!(direct, via_engine);
    assert_eq!(direct[0].payload.fields["entity_id"], "306");
    assert_eq!(direct[0].score, 1.0);
}

#[test]
fn test_repeated_runs_are_identical() {
    let candidates: Vec<Candidate<u32>> = (0..2_000u32)
        .map(|i| {
            let name = match i % 4 {
                0 => "mohammed al rashid",
                1 => "muhammad al rasheed",
                2 => "mohamed rashid",
                _ => "ahmed hassan",
            };
            Candidate::new(i, name, Vec::<&str>::new())
        })
        .collect();
    let query = Query::new("Mohammed Al-Rashid", ["Muhammad Rashid"]);

    let first = rank(25, 0.6, &query, &candidates).unwrap();
    assert_eq!(first.len(), 25);
    for _ in 0..5 {
        assert_eq!(rank(25, 0.6, &query, &candidates).unwrap(), first);
    }
}

#[test]
fn test_limit_zero_and_empty_pool() {
    let query = Query::new("John Smith", Vec::<&str>::new());
    assert!(rank(0, 0.0, &query, &pool()).unwrap().is_empty());

    let empty: Vec<Candidate<Record>> = Vec::new();
    assert!(rank(10, 0.0, &query, &empty).unwrap().is_empty());
}

#[tokio::test]
async fn test_async_search() {
    let screener = Arc::new(Screener::new(pool(), RankOptions::default()).unwrap());

    let results = screener
        .search_async(Query::new("BNC", Vec::<&str>::new()), 1, 0.9)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].payload.name, "BANCO NACIONAL DE CUBA");
}

#[test]
fn test_async_search_blocking_harness() {
    let screener = Arc::new(Screener::new(pool(), RankOptions::default()).unwrap());

    let results = tokio_test::block_on(screener.search_async(
        Query::new("Robert Brown", Vec::<&str>::new()),
        5,
        0.99,
    ))
    .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].payload.fields["entity_id"], "300");
}
