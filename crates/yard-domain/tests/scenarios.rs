//! End-to-end scenarios and randomized invariant checks for the yard grid

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use yard_domain::model::{
    container_number, AreaStats, OccupancySnapshot, SlotOccupancy, SlotPosition, StoredContainer,
    ViewConfiguration, YardArea,
};
use yard_domain::service::{
    find_floating_slots, validate_snapshot, DrawPrimitive, GenerationPolicy, ObliqueProjection,
    OccupancyStatsCalculator, ProjectionRenderer, Surface, YardGridModel,
};
use yard_types::ContainerType;

const NUM_SAMPLES: usize = 300;
const SEED: u64 = 0x0C0F_FEE0_57AC_4ED;

fn random_area(rng: &mut StdRng, index: usize) -> YardArea {
    YardArea::new(
        format!("A{}", index),
        format!("A{}区", index),
        rng.gen_range(1..=12),
        rng.gen_range(1..=18),
        rng.gen_range(1..=6),
        "#96ceb4",
    )
}

fn random_policy(rng: &mut StdRng) -> GenerationPolicy {
    let a: f64 = rng.gen();
    let b: f64 = rng.gen();
    GenerationPolicy::new(a.min(b), a.max(b)).unwrap()
}

fn container(area_id: &str, position: SlotPosition) -> StoredContainer {
    StoredContainer {
        container_no: container_number(area_id, position),
        container_type: ContainerType::Gp20,
        customer: "上海远洋".to_string(),
    }
}

/// 2x2x2 area "AA" with only the given positions occupied
fn forced_model(occupied: &[SlotPosition]) -> YardGridModel {
    let area = YardArea::new("AA", "AA区", 2, 2, 2, "#ff6b6b");
    let slots = area
        .positions()
        .map(|p| {
            if occupied.contains(&p) {
                SlotOccupancy::occupied("AA", p, container("AA", p))
            } else {
                SlotOccupancy::empty("AA", p)
            }
        })
        .collect();
    let mut model = YardGridModel::new(vec![area]).unwrap();
    model
        .replace(OccupancySnapshot::new(slots))
        .expect("forced snapshot should be valid");
    model
}

// ---------------------------------------------------------------------------
// Randomized invariants
// ---------------------------------------------------------------------------

#[test]
fn test_prop_generated_snapshots_never_float() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..NUM_SAMPLES {
        let areas: Vec<YardArea> = (0..rng.gen_range(1..=4)).map(|i| random_area(&mut rng, i)).collect();
        let policy = random_policy(&mut rng);
        let mut model = YardGridModel::new(areas).unwrap();
        let snapshot = model.generate_snapshot(&policy, &mut rng);

        assert!(find_floating_slots(&snapshot).is_empty());
        assert_eq!(validate_snapshot(model.areas(), &snapshot), Ok(()));
        model.replace(snapshot).expect("generated snapshot must be accepted");
    }
}

#[test]
fn test_prop_counts_add_up() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    for _ in 0..NUM_SAMPLES {
        let areas: Vec<YardArea> = (0..3).map(|i| random_area(&mut rng, i)).collect();
        let policy = random_policy(&mut rng);
        let mut model = YardGridModel::new(areas).unwrap();
        model.regenerate(&policy, &mut rng, None).unwrap();

        let calc = OccupancyStatsCalculator::new(model.areas(), model.snapshot());
        for area in model.areas() {
            let stats = calc.compute_area_stats(&area.id);
            assert_eq!(stats.occupied + stats.available, stats.total);
            assert_eq!(stats.total, area.slot_count());
            assert!(stats.occupancy_rate <= 100);
            assert_eq!(calc.compute_area_stats(&area.id), stats);
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_single_ground_container_rate() {
    let model = forced_model(&[SlotPosition::new(1, 1, 1)]);
    let calc = OccupancyStatsCalculator::new(model.areas(), model.snapshot());
    assert_eq!(
        calc.compute_area_stats("AA"),
        AreaStats {
            total: 8,
            occupied: 1,
            available: 7,
            occupancy_rate: 13
        }
    );
}

#[test]
fn test_two_high_stack_rate() {
    let model = forced_model(&[SlotPosition::new(1, 1, 1), SlotPosition::new(1, 1, 2)]);
    let calc = OccupancyStatsCalculator::new(model.areas(), model.snapshot());
    let stats = calc.compute_area_stats("AA");
    assert_eq!(stats.occupied, 2);
    assert_eq!(stats.occupancy_rate, 25);
}

#[test]
fn test_repeated_generation_yields_independent_snapshots() {
    let area = YardArea::new("AA", "AA区", 2, 2, 2, "#ff6b6b");
    let model = YardGridModel::new(vec![area]).unwrap();
    let policy = GenerationPolicy::new(1.0, 1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let first = model.generate_snapshot(&policy, &mut rng);
    let second = model.generate_snapshot(&policy, &mut rng);
    let second_before = second.clone();

    let mut mutated = first.into_slots();
    for slot in &mut mutated {
        slot.container = None;
    }
    assert_eq!(second, second_before);
    assert!(second.slots().iter().all(|s| !s.is_empty()));

    assert!(find_floating_slots(&second).is_empty());
    assert!(find_floating_slots(&OccupancySnapshot::new(mutated)).is_empty());
}

#[test]
fn test_stack_draw_order_is_bottom_up() {
    let area = YardArea::new("AA", "AA区", 2, 2, 3, "#ff6b6b");
    let stack = [
        SlotPosition::new(1, 1, 1),
        SlotPosition::new(1, 1, 2),
        SlotPosition::new(1, 1, 3),
    ];
    let slots = area
        .positions()
        .map(|p| {
            if stack.contains(&p) {
                SlotOccupancy::occupied("AA", p, container("AA", p))
            } else {
                SlotOccupancy::empty("AA", p)
            }
        })
        .collect();
    let mut model = YardGridModel::new(vec![area]).unwrap();
    model.replace(OccupancySnapshot::new(slots)).unwrap();

    let list = ObliqueProjection::default().render(
        &model,
        &ViewConfiguration::new("AA"),
        Surface::new(800.0, 500.0),
    );
    let layers: Vec<u32> = list
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Rect { slot, .. } => Some(slot.layer),
            _ => None,
        })
        .collect();
    assert_eq!(layers, vec![1, 2, 3]);
}

#[test]
fn test_unknown_selection_renders_nothing() {
    let model = forced_model(&[SlotPosition::new(1, 1, 1)]);
    let list = ObliqueProjection::default().render(
        &model,
        &ViewConfiguration::new("NOPE"),
        Surface::new(800.0, 500.0),
    );
    assert!(list.is_empty());
}

#[test]
fn test_zero_sized_area_stats() {
    let areas = vec![YardArea::new("ZZ", "ZZ区", 0, 0, 3, "#cccccc")];
    let snapshot = OccupancySnapshot::empty();
    let calc = OccupancyStatsCalculator::new(&areas, &snapshot);
    assert_eq!(
        calc.compute_area_stats("ZZ"),
        AreaStats {
            total: 0,
            occupied: 0,
            available: 0,
            occupancy_rate: 0
        }
    );
}
