use spherical_geodesy::api::formatting::{render, AnswerData};
use spherical_geodesy::{
    destination_point, distance, initial_bearing, AnswerFormatter, GeodesyConfig, OutputFormat,
    Position, Query, QueryEngine,
};

const QUERIES: &str = r#"[
    {"op": "distance", "start": [0.119, 52.205], "destination": [2.351, 48.857]},
    {"op": "distance", "start": [0.119, 52.205], "destination": [2.351, 48.857], "radius": 3959},
    {"op": "initial_bearing", "start": [0.119, 52.205], "destination": [2.351, 48.857]},
    {"op": "final_bearing", "start": [0.119, 52.205], "destination": [2.351, 48.857]},
    {"op": "midpoint", "start": [0.119, 52.205], "destination": [2.351, 48.857]},
    {"op": "destination_point", "start": [-0.00147, 51.47788], "distance": 7794, "bearing": 300.7},
    {"op": "initial_bearing", "start": [2.351, 48.857], "destination": [2.351, 48.857]}
]"#;

fn evaluate_reference_batch() -> Vec<AnswerData> {
    let queries: Vec<Query> = serde_json::from_str(QUERIES).unwrap();
    let engine = QueryEngine::new(GeodesyConfig::default());
    let answers = engine.evaluate_batch(&queries);
    AnswerFormatter::new()
        .with_precision(1)
        .format_batch(&queries, &answers)
        .into_iter()
        .map(|formatted| formatted.result)
        .collect()
}

#[test]
fn test_reference_batch() {
    let results = evaluate_reference_batch();

    assert_eq!(results[0], AnswerData::Distance { value: 404279.2 });
    assert_eq!(results[1], AnswerData::Distance { value: 251.2 });
    assert_eq!(results[2], AnswerData::Bearing { degrees: Some(156.2) });
    assert_eq!(results[3], AnswerData::Bearing { degrees: Some(157.9) });
    assert_eq!(
        results[4],
        AnswerData::Position { longitude_deg: 1.3, latitude_deg: 50.5 }
    );
    assert_eq!(
        results[5],
        AnswerData::Position { longitude_deg: -0.1, latitude_deg: 51.5 }
    );
    assert_eq!(results[6], AnswerData::Bearing { degrees: None });
}

#[test]
fn test_json_render_round_trips_through_serde() {
    let queries: Vec<Query> = serde_json::from_str(QUERIES).unwrap();
    let engine = QueryEngine::default();
    let formatted = AnswerFormatter::new().format_batch(&queries, &engine.evaluate_batch(&queries));

    let output = render(OutputFormat::Json, &formatted).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), queries.len());
    assert!(value[6]["result"]["degrees"].is_null());
}

#[test]
fn test_navigation_round_trip() {
    let legs = [
        (Position::new(-0.00147, 51.47788), Position::new(-74.006, 40.7128)),
        (Position::new(151.2093, -33.8688), Position::new(-149.9003, 61.2181)),
        (Position::new(18.4241, -33.9249), Position::new(103.8198, 1.3521)),
    ];

    for (from, to) in legs {
        let reached = destination_point(from, distance(from, to), initial_bearing(from, to));
        assert!(distance(reached, to) < 1e-3, "{:?} -> {:?} landed at {:?}", from, to, reached);
    }
}
