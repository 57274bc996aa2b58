//! Benchmarks for feed queries.
//!
//! These benchmarks measure expiry filtering and ordering over a large
//! in-memory repository where part of the content has already expired.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soulspace::content::{
    CircleId, Content, MemoryRepository, Mood, MoodPulse, PostDraft, Repository,
};

const POST_COUNT: i64 = 10_000;

fn populated() -> MemoryRepository {
    let start = Utc.ymd(2024, 3, 1).and_hms(0, 0, 0);
    let mut repository = MemoryRepository::default();
    let moods = Mood::composer();
    for i in 0..POST_COUNT {
        let draft = PostDraft {
            mood: moods[i as usize % moods.len()].tag().to_string(),
            content: Content::Text(format!("post number {}", i)),
            circle_id: Some(CircleId((i % 6) as u32 + 1)),
        };
        // One post every 12 seconds spans roughly 33 hours.
        if let Err(e) = repository.create_post(draft, start + Duration::seconds(i * 12)) {
            panic!("failed to seed post: {}", e);
        }
    }
    repository
}

fn bench_feed(c: &mut Criterion) {
    let repository = populated();
    let now = Utc.ymd(2024, 3, 2).and_hms(12, 0, 0);

    c.bench_function("feed_visible_posts", |b| {
        b.iter(|| repository.feed(black_box(now)))
    });
}

fn bench_circle_feed(c: &mut Criterion) {
    let repository = populated();
    let now = Utc.ymd(2024, 3, 2).and_hms(12, 0, 0);

    c.bench_function("circle_feed_visible_posts", |b| {
        b.iter(|| repository.circle_feed(black_box(CircleId(3)), black_box(now)))
    });
}

fn bench_mood_pulse(c: &mut Criterion) {
    let repository = populated();
    let now = Utc.ymd(2024, 3, 2).and_hms(12, 0, 0);
    let feed = repository.feed(now);

    c.bench_function("mood_pulse_from_feed", |b| {
        b.iter(|| MoodPulse::from_posts(black_box(&feed)))
    });
}

criterion_group!(benches, bench_feed, bench_circle_feed, bench_mood_pulse);
criterion_main!(benches);
