//! End-to-end queries against small tables and the bundled dataset.

use fichat_core::prelude::*;
use fichat_core::session::Phase;
use fichat_core::Intent;
use std::io::Write;
use std::sync::Arc;

fn sample_router() -> Router {
    let table = FiTable::from_records(vec![
        FiRecordRaw::new("Quezon City", "Metro Manila", 120),
        FiRecordRaw::new("Manila", "Metro Manila", 95),
        FiRecordRaw::new("Davao City", "Davao del Sur", 60),
    ])
    .unwrap();
    Router::with_defaults(Arc::new(table))
}

#[test]
fn typo_resolves_to_quezon_city() {
    let answer = sample_router().route("quezn city").unwrap();
    assert_eq!(
        answer,
        Answer::CityRows(vec![CityRow {
            city: "quezon city".into(),
            province: "metro manila".into(),
            fi_count: 120,
        }])
    );
}

#[test]
fn metro_manila_summary() {
    let Answer::ProvinceSummary(s) = sample_router().route("Metro Manila").unwrap() else {
        panic!("expected a province summary");
    };
    assert_eq!(s.province, "metro manila");
    assert_eq!(s.total_fis, 215);
    assert_eq!(
        s.cities,
        vec![
            CityCount { city: "quezon city".into(), fi_count: 120 },
            CityCount { city: "manila".into(), fi_count: 95 },
        ]
    );
    assert_eq!(s.highest, CityCount { city: "quezon city".into(), fi_count: 120 });
    assert_eq!(s.lowest, CityCount { city: "manila".into(), fi_count: 95 });
}

#[test]
fn average_without_category() {
    let router = sample_router();
    let expected = "The average number of financial institutions per city is 91.67";
    assert_eq!(router.route("average").unwrap().to_string(), expected);

    let (reply, _) = router.converse("average", Session::new()).unwrap();
    assert_eq!(reply.answer.to_string(), expected);
}

#[test]
fn exit_never_dispatches() {
    let router = sample_router();
    for text in ["exit", "EXIT", "average then exit", "quezon city exit", "exit metro manila"] {
        assert_eq!(router.classify(text), Intent::Exit);
        assert!(matches!(router.route(text).unwrap(), Answer::Farewell(_)));
    }
}

#[test]
fn city_lookup_returns_every_row_for_shared_names() {
    let table = FiTable::from_records(vec![
        FiRecordRaw::new("San Jose", "Nueva Ecija", 40),
        FiRecordRaw::new("Tarlac City", "Tarlac", 80),
        FiRecordRaw::new("San Jose", "Occidental Mindoro", 12),
    ])
    .unwrap();
    let router = Router::with_defaults(Arc::new(table));
    let Answer::CityRows(rows) = router.route("san jose").unwrap() else {
        panic!("expected rows");
    };
    let provinces: Vec<&str> = rows.iter().map(|r| r.province.as_str()).collect();
    assert_eq!(provinces, ["nueva ecija", "occidental mindoro"]);
}

#[test]
fn partial_ratio_config_finds_names_inside_sentences() {
    let table = sample_router().table().clone();
    let config = RouterConfig {
        city: MatchPolicy::new(Scorer::PartialRatio, 90),
        ..RouterConfig::default()
    };
    let router = Router::new(Arc::new(table), config);
    assert_eq!(
        router.lookup_city("tell me about davao city").to_string(),
        "davao city (davao del sur): 60 financial institutions"
    );
}

#[test]
fn bundled_dataset_answers_questions() {
    let router = Router::with_defaults(Arc::new(FiTable::load().unwrap()));

    let Answer::CityRows(rows) = router.route("Cebu Cty").unwrap() else {
        panic!("expected cebu rows");
    };
    assert_eq!(rows[0].city, "cebu city");

    let Answer::ProvinceSummary(s) = router.route("oriental mindoro").unwrap() else {
        panic!("expected mindoro summary");
    };
    assert_eq!(s.cities.len(), 1);

    let Answer::Statistic(max) = router.route("which city has the most?").unwrap() else {
        panic!("expected a statistic");
    };
    assert_eq!(max.city.unwrap().city, "quezon city");
}

#[test]
fn sentences_resolve_with_default_config() {
    let router = Router::with_defaults(Arc::new(FiTable::load().unwrap()));

    for (query, city) in [
        ("how many financial institutions are in quezn city", "quezon city"),
        ("tell me about cebu city", "cebu city"),
        ("quezon city please", "quezon city"),
    ] {
        let Answer::CityRows(rows) = router.route(query).unwrap() else {
            panic!("expected rows for {query:?}");
        };
        assert_eq!(rows[0].city, city, "{query}");
    }

    let Answer::ProvinceSummary(s) = router.route("what about metro manila?").unwrap() else {
        panic!("expected a province summary");
    };
    assert_eq!(s.province, "metro manila");
}

#[test]
fn statistics_alone_gives_the_average() {
    let answer = sample_router().route("statistics").unwrap();
    assert_eq!(
        answer.to_string(),
        "The average number of financial institutions per city is 91.67"
    );
}

#[test]
fn loads_csv_from_disk_and_snapshots_it() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("fi.csv");
    let mut f = std::fs::File::create(&csv_path).unwrap();
    writeln!(f, "Cities,Province,Total Number of Fis").unwrap();
    writeln!(f, "Quezon City,Metro Manila,120").unwrap();
    writeln!(f, "Manila,Metro Manila,95").unwrap();
    drop(f);

    let table = FiTable::load_from_path(&csv_path).unwrap();
    assert_eq!(table.stats().total_fis, 215);

    let bin_path = dir.path().join("fi.bin.gz");
    table.save_as(&bin_path).unwrap();
    let back = FiTable::load_from_path(&bin_path).unwrap();
    assert_eq!(back.records(), table.records());
    assert_eq!(back.city_names(), table.city_names());
}

#[test]
fn malformed_rows_surface_as_errors() {
    let data = "Cities,Province,Total Number of Fis\nManila,,95\n";
    let err = FiTable::from_csv_reader(data.as_bytes()).unwrap_err();
    assert!(matches!(err, FiError::InvalidData(_)));
}

#[test]
fn conversation_through_the_store() {
    let store = SessionStore::new(sample_router());
    let id = store.open();

    let reply = store.converse(id, "what can you do?").unwrap();
    assert!(matches!(reply.answer, Answer::Unrecognized(_)));

    store.converse(id, "city").unwrap();
    let reply = store.converse(id, "davao").unwrap();
    assert!(matches!(reply.answer, Answer::NotFound { .. }));

    let reply = store.converse(id, "davao city").unwrap();
    assert!(matches!(reply.answer, Answer::CityRows(_)));
    assert_eq!(
        store.get(&id).unwrap().phase,
        Phase::AnsweredAwaitingNext(Category::City)
    );

    let reply = store.converse(id, "exit").unwrap();
    assert!(matches!(reply.answer, Answer::Farewell(_)));
    assert_eq!(store.get(&id), None);
    assert!(store.is_empty());
}
