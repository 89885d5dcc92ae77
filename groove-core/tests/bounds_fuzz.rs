//! Randomized navigation sequences against the index and culling invariants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use groove_core::carousel::transition;
use groove_core::input::rubber_band;
use groove_core::layout::resolve;
use groove_core::stack::{StackConfig, render_window};
use groove_core::{CarouselState, Signal, Transition};

const SEEDS: [u64; 4] = [7, 42, 1_337, 0xC0FFEE];

fn random_signal(rng: &mut StdRng, count: usize) -> Signal {
    match rng.random_range(0..4) {
        0 => Signal::Advance,
        1 => Signal::Retreat,
        // Deliberately reaches past the end.
        _ => Signal::Select(rng.random_range(0..count + 3)),
    }
}

#[test]
fn index_never_leaves_bounds() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let count = rng.random_range(1..12);
            let start = rng.random_range(0..count);
            let mut c = CarouselState::with_index(count, start);
            for _ in 0..200 {
                let before = c.index();
                let signal = random_signal(&mut rng, count);
                match c.apply(signal) {
                    Transition::DetailRequested(i) => {
                        assert_eq!(i, before);
                        assert_eq!(c.index(), before);
                    }
                    Transition::MovedTo(i) => assert_eq!(c.index(), i),
                    Transition::Unchanged => assert_eq!(c.index(), before),
                }
                assert!(c.index() < count, "seed {seed}: {signal:?}");
            }
        }
    }
}

#[test]
fn empty_collection_is_inert_for_any_signal() {
    let mut rng = StdRng::seed_from_u64(SEEDS[0]);
    for _ in 0..500 {
        let current = rng.random_range(0..5);
        let signal = random_signal(&mut rng, 0);
        assert_eq!(transition(current, 0, signal), Transition::Unchanged);
    }
}

#[test]
fn render_window_always_contains_active_card() {
    let cfg = StackConfig::default();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..500 {
            let width = rng.random_range(0.0..2_400.0);
            let height = rng.random_range(0.0..1_600.0);
            let profile = resolve(width, height);
            assert!(profile.card_size >= 1.0);
            assert!(profile.stage_top <= profile.stage_bottom);

            let count = rng.random_range(1..20);
            let index = rng.random_range(0..count);
            let window = render_window(index, count, profile.device_class, &cfg);
            let radius = cfg.render_radius(profile.device_class);
            assert!(window.contains(&index));
            assert!(window.end <= count);
            assert!(window.len() <= 2 * radius + 1);
        }
    }
}

#[test]
fn elastic_offset_stays_inside_limit() {
    let mut rng = StdRng::seed_from_u64(SEEDS[1]);
    for _ in 0..1_000 {
        let spacing = rng.random_range(1.0..400.0_f32);
        let limit = 1.5 * spacing;
        let raw = rng.random_range(-1e7..1e7_f32);
        let out = rubber_band(raw, limit);
        assert!(out.abs() < limit);
        assert!(out.signum() == raw.signum() || out == 0.0);
    }
}
