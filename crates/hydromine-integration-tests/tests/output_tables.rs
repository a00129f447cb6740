//! Shape and content checks on the two output tables a chart consumer
//! receives from a completed run.

use hydromine_core::report::HydroKind;
use hydromine_core::simulation::{Simulation, StrategyKind};
use hydromine_core::tables::MAX_ROIDS;
use hydromine_core::test_utils::{baseline_input, fixed, rush_input};

fn completed_simulation() -> Simulation {
    let mut sim = Simulation::new(rush_input(), 0xD125);
    sim.set_strategy(StrategyKind::ContinuousMining).unwrap();
    sim.run();
    assert!(sim.valid());
    sim
}

#[test]
fn field_history_covers_every_roid_in_both_kinds() {
    let sim = completed_simulation();
    let samples = sim.field_history().unwrap();

    for i in 0..MAX_ROIDS {
        let label = format!("r{i:02}");
        assert!(
            samples
                .iter()
                .any(|s| s.roid == label && s.kind == HydroKind::Remaining),
            "no remaining samples for {label}"
        );
        assert!(
            samples
                .iter()
                .any(|s| s.roid == label && s.kind == HydroKind::Collected),
            "no collected samples for {label}"
        );
    }
}

#[test]
fn field_history_is_one_remaining_block_then_one_collected_block() {
    let sim = completed_simulation();
    let samples = sim.field_history().unwrap();
    assert_eq!(samples.len() % 2, 0);

    let (remaining, collected) = samples.split_at(samples.len() / 2);
    assert!(remaining.iter().all(|s| s.kind == HydroKind::Remaining));
    assert!(collected.iter().all(|s| s.kind == HydroKind::Collected));
}

#[test]
fn progress_durations_match_their_times() {
    let sim = completed_simulation();
    for row in sim.mining_progress().unwrap() {
        let minutes = row.time / 60;
        let seconds = row.time % 60;
        assert_eq!(row.duration, format!("{minutes:02}m{seconds:02}s"));
    }
}

#[test]
fn remaining_hydro_never_exceeds_the_field_cap() {
    let mut sim = Simulation::new(baseline_input(), 0xD125);
    sim.set_strategy(StrategyKind::ContinuousMining).unwrap();
    sim.run();
    let cap = fixed(21_000.0);
    for row in sim.mining_progress().unwrap() {
        assert!(row.total_hydro <= cap, "field over cap at {}", row.time);
        assert!(row.total_hydro >= fixed(0.0));
    }
}

#[test]
fn tank_level_stays_within_fleet_capacity() {
    let sim = completed_simulation();
    // Four level-7 miners: 2000 each.
    let tank_max = fixed(8000.0);
    for row in sim.mining_progress().unwrap() {
        assert!(row.tank <= tank_max, "tank over capacity at {}", row.time);
    }
}
