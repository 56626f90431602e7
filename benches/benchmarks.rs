criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_native_hand,
        evaluating_royal_hand,
        sampling_royal_runout,
        estimating_flop_equity,
        estimating_river_equity,
}

fn evaluating_native_hand(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Deck::new().deal(rng, 7);
    c.bench_function("evaluate a 7-card Hand", |b| {
        b.iter(|| Strength::from(hand))
    });
}

fn evaluating_royal_hand(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Deck::new().deal(rng, 9);
    c.bench_function("evaluate a 9-card Hand over every 7-card subset", |b| {
        b.iter(|| Strength::from(hand))
    });
}

fn sampling_royal_runout(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let dead = Hand::try_from("As Ah 2h 2d Ks").unwrap();
    c.bench_function("draw a royal runout from the Flop", |b| {
        b.iter(|| Deck::without(dead).runout(rng, 2))
    });
}

fn estimating_flop_equity(c: &mut criterion::Criterion) {
    let mut equity = Equity::<SmallRng>::seeded(0).trials(10).tolerance(1.0);
    let board = Card::parse("2h 2d Ks").unwrap();
    let hole = Hole::try_from("As Ah").unwrap();
    c.bench_function("estimate Flop equity against every hand", |b| {
        b.iter(|| equity.equity(hole, &board, std::time::Duration::from_secs(1)))
    });
}

fn estimating_river_equity(c: &mut criterion::Criterion) {
    let mut equity = Equity::<SmallRng>::seeded(0).trials(1).tolerance(1.0);
    let board = Card::parse("2h 2d Ks 9c 3d").unwrap();
    let hole = Hole::try_from("As Ah").unwrap();
    c.bench_function("estimate River equity against every hand", |b| {
        b.iter(|| equity.equity(hole, &board, std::time::Duration::from_secs(1)))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use royal_equity::cards::card::Card;
use royal_equity::cards::deck::Deck;
use royal_equity::cards::hand::Hand;
use royal_equity::cards::hole::Hole;
use royal_equity::cards::strength::Strength;
use royal_equity::equity::Equity;
