//! Properties that hold after every frame, for any input sequence

use std::time::Duration;

use proptest::prelude::*;

use raindrop::sim::{GameEvent, SeededSpawner, TickInput, initialize, step};
use raindrop::FieldConfig;

fn frame_strategy() -> impl Strategy<Value = (f32, TickInput)> {
    (
        0.0f32..0.25,
        proptest::option::of(-300.0f32..1100.0),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(dt, pointer_x, left, right)| {
            (
                dt,
                TickInput {
                    pointer_x,
                    left,
                    right,
                },
            )
        })
}

proptest! {
    #[test]
    fn frame_postconditions_hold(
        seed in any::<u64>(),
        frames in proptest::collection::vec(frame_strategy(), 1..300),
    ) {
        let config = FieldConfig::default();
        let size = config.object_size as f32;
        let max_x = config.max_x();
        let height = config.height as f32;

        let mut state = initialize(config, SeededSpawner::new(seed), Duration::ZERO).unwrap();
        let mut now = Duration::ZERO;

        for (dt, input) in &frames {
            now += Duration::from_secs_f32(*dt);
            let before = state.score();
            let events = step(&mut state, input.intent(), *dt, now);

            let catcher = state.catcher();
            prop_assert!(catcher.x() >= 0.0 && catcher.x() <= max_x);

            let caught = events.iter().filter(|e| matches!(e, GameEvent::Caught { .. })).count() as u64;
            prop_assert_eq!(state.score(), before + caught);

            for drop in state.drops() {
                prop_assert!(drop.rect.y() + size >= 0.0);
                prop_assert!(!drop.rect.overlaps(&catcher));
            }

            for event in &events {
                if let GameEvent::Spawned { id, x } = *event {
                    prop_assert!((0.0..=max_x).contains(&x));
                    prop_assert_eq!(x.fract(), 0.0);
                    let drop = state.drops().last().unwrap();
                    prop_assert_eq!(drop.id, id);
                    prop_assert_eq!(drop.rect.y(), height);
                }
            }
        }
    }

    #[test]
    fn negative_dt_never_moves_anything(dt in -10.0f32..0.0, seed in any::<u64>()) {
        let mut state = initialize(FieldConfig::default(), SeededSpawner::new(seed), Duration::ZERO).unwrap();
        let catcher = state.catcher();
        let drops = state.drops().to_vec();

        let input = TickInput { left: true, ..Default::default() };
        let events = step(&mut state, input.intent(), dt, Duration::ZERO);

        prop_assert!(events.is_empty());
        prop_assert_eq!(state.catcher(), catcher);
        prop_assert_eq!(state.drops(), drops.as_slice());
    }
}
