use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;
use team_tracker::models::TeamSelection;
use team_tracker::services::ScoreExtractors;

fn team(sport: &str, name: &str) -> TeamSelection {
    TeamSelection {
        user_id: "bench-user".to_string(),
        sport: sport.to_string(),
        team_name: name.to_string(),
        created_at: Utc::now(),
    }
}

/// A search response padded with the kind of noise real responses carry.
fn response_with_spotlight(teams: Value) -> Value {
    let organic: Vec<Value> = (0..20)
        .map(|i| {
            json!({
                "position": i,
                "title": format!("Result {}", i),
                "link": format!("https://example.com/{}", i),
                "snippet": "Match report, highlights and reaction."
            })
        })
        .collect();

    json!({
        "search_metadata": { "status": "Success" },
        "sports_results": {
            "title": "Latest match",
            "game_spotlight": { "league": "League", "teams": teams }
        },
        "organic_results": organic
    })
}

fn benchmark_extract(c: &mut Criterion) {
    let extractors = ScoreExtractors::default();

    let soccer = team("soccer", "Arsenal");
    let soccer_response = response_with_spotlight(json!([
        { "name": "Arsenal", "score": "2", "thumbnail": "https://img/ars.png" },
        { "name": "Chelsea", "score": "1", "thumbnail": "https://img/che.png" }
    ]));

    let cricket = team("cricket", "India");
    let cricket_response = response_with_spotlight(json!([
        { "name": "India", "score": { "runs": "287/6", "overs": "50" } },
        { "name": "Australia", "score": { "runs": "250", "overs": "48.2" } }
    ]));

    let missing = response_with_spotlight(json!([{ "name": "Arsenal" }]));

    let mut group = c.benchmark_group("score_extraction");

    group.bench_function("scalar_scores", |b| {
        b.iter(|| extractors.extract(black_box(&soccer), black_box(&soccer_response)))
    });

    group.bench_function("cricket_runs", |b| {
        b.iter(|| extractors.extract(black_box(&cricket), black_box(&cricket_response)))
    });

    group.bench_function("no_spotlight", |b| {
        b.iter(|| extractors.extract(black_box(&soccer), black_box(&missing)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_extract);
criterion_main!(benches);
