use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use steam_profile_client::models::{total_minutes_last_period, RawActivityResponse};
use steam_profile_client::services::normalize_activity;

fn benchmark_normalize(c: &mut Criterion) {
    // A full-size response: the client requests up to 50 games per query
    let games: Vec<_> = (0..50)
        .map(|i| {
            json!({
                "appid": 400 + i,
                "name": format!("Game Title Number {}", i),
                "img_icon_url": "e3f595a92552da3d664ad00277fad2107345f743",
                "playtime_2weeks": i * 17,
                "playtime_forever": i * 1043,
            })
        })
        .collect();
    let raw: RawActivityResponse =
        serde_json::from_value(json!({ "response": { "total_count": 50, "games": games } }))
            .expect("Failed to build fixture");

    let mut group = c.benchmark_group("normalize");

    group.bench_function("normalize_activity_50_games", |b| {
        b.iter(|| normalize_activity(black_box(&raw)))
    });

    let records = normalize_activity(&raw);
    group.bench_function("total_minutes_50_games", |b| {
        b.iter(|| total_minutes_last_period(black_box(&records)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_normalize);
criterion_main!(benches);
