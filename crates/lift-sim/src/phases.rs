//! The sub-phases of one simulated second.
//!
//! Each function runs to completion before the next starts; `Sim::step`
//! calls them in the fixed order spawn → dispatch → commands → motion.

use lift_core::{PassengerId, SimulationConfig, Tick};
use lift_dispatch::{DispatchContext, Dispatcher};
use lift_fleet::{Elevator, MoveState, PassengerRegistry};
use lift_metrics::MetricsCollector;

use crate::observation::Completion;
use crate::state::SimState;
use crate::SimResult;

/// What happened during the motion phase of one second.
#[derive(Debug, Default)]
pub(crate) struct StepEvents {
    pub completed: Vec<Completion>,
    pub rejected:  u64,
}

// ── ① Spawn ───────────────────────────────────────────────────────────────────

/// With probability `spawn_prob`, create one passenger with a uniform origin
/// and a uniform destination distinct from it.
///
/// Draw order (coin, origin, destination) is fixed; it is part of the
/// determinism contract.
pub(crate) fn spawn(state: &mut SimState, config: &SimulationConfig) -> SimResult<Option<PassengerId>> {
    if !state.rng.gen_bool(config.spawn_prob) {
        return Ok(None);
    }
    let origin = state.rng.gen_range(1..=config.floors);
    // Uniform over the other `floors - 1` floors.
    let mut dest = state.rng.gen_range(1..config.floors);
    if dest >= origin {
        dest += 1;
    }
    let id = state.passengers.spawn(state.time, origin, dest, config.floors)?;
    log::trace!("{} spawned {id}: floor {origin} -> {dest}", state.time);
    Ok(Some(id))
}

// ── ② Dispatch ────────────────────────────────────────────────────────────────

/// Offer every passenger without a car to `dispatcher`.
pub(crate) fn dispatch<D: Dispatcher>(state: &mut SimState, dispatcher: &D) {
    let pending = state.passengers.unassigned();
    if pending.is_empty() {
        return;
    }
    let mut ctx = DispatchContext::new(
        state.time,
        &pending,
        &mut state.passengers,
        &mut state.elevators,
    );
    dispatcher.assign(&mut ctx);
}

// ── ③ External commands ───────────────────────────────────────────────────────

/// Queue one externally chosen target floor per car.
///
/// `0` means "no command".  Out-of-range floors are ignored, and full cars
/// drop the request.  Length is checked by the caller.
pub(crate) fn apply_commands(elevators: &mut [Elevator], config: &SimulationConfig, commands: &[u32]) {
    debug_assert_eq!(elevators.len(), commands.len());
    for (car, &target) in elevators.iter_mut().zip(commands) {
        if target == 0 || !config.floor_in_range(target) {
            continue;
        }
        car.enqueue_stop(target, false);
    }
}

// ── ④ Motion ──────────────────────────────────────────────────────────────────

/// Advance every car by one second.
///
/// - dwelling: count down, possibly closing the doors;
/// - nothing queued: go idle;
/// - at the queue head: serve the stop, pop it, start a dwell;
/// - otherwise: travel one floor toward the queue head.
pub(crate) fn move_elevators(state: &mut SimState, dwell_secs: u32, events: &mut StepEvents) {
    let SimState { time, passengers, elevators, metrics, .. } = state;
    let now = *time;

    for car in elevators.iter_mut() {
        match car.move_state {
            MoveState::Dwell => {
                car.tick_dwell();
            }
            MoveState::Idle | MoveState::Moving => match car.next_stop() {
                None => car.settle_idle(),
                Some(target) if target == car.current_floor => {
                    serve_stop(car, passengers, metrics, now, events);
                    car.pop_stop();
                    car.begin_dwell(dwell_secs);
                }
                Some(target) => car.move_toward(target),
            },
        }
    }
}

/// Alight, then board, at the car's current floor.
///
/// Alighting first frees capacity for boarders in the same second.  A
/// boarder that does not fit is rejected: counted, unassigned, and left for
/// the next dispatch phase.
fn serve_stop(
    car:        &mut Elevator,
    passengers: &mut PassengerRegistry,
    metrics:    &mut MetricsCollector,
    now:        Tick,
    events:     &mut StepEvents,
) {
    let floor = car.current_floor;
    log::debug!("{now} {} stops at floor {floor} carrying {}", car.id, car.load());

    let alighting: Vec<PassengerId> = car
        .passengers()
        .iter()
        .copied()
        .filter(|&id| passengers.get(id).is_some_and(|p| p.dest_floor == floor))
        .collect();
    for id in alighting {
        car.alight(id);
        let Some(p) = passengers.get_mut(id) else {
            continue;
        };
        p.mark_arrived(now);
        if let (Some(wait_secs), Some(ride_secs)) = (p.waiting_time(), p.ride_time()) {
            metrics.record_completion(wait_secs, ride_secs);
            events.completed.push(Completion { passenger: id, wait_secs, ride_secs });
        }
    }

    let boarding: Vec<PassengerId> = passengers
        .iter()
        .filter(|p| p.awaits(car.id, floor))
        .map(|p| p.id)
        .collect();
    for id in boarding {
        let Some(p) = passengers.get_mut(id) else {
            continue;
        };
        match car.board(id) {
            Ok(()) => {
                p.mark_boarded(now);
                car.enqueue_stop(p.dest_floor, true);
            }
            Err(e) => {
                log::debug!("{now} {id} refused at floor {floor}: {e}");
                metrics.record_rejection();
                events.rejected += 1;
                p.reject();
            }
        }
    }
}

// ── Horizon ───────────────────────────────────────────────────────────────────

/// Count every passenger without an `arrive_time` as unserved, once.
///
/// Returns the number newly counted: zero on every call after the first.
pub(crate) fn finalize_unserved(state: &mut SimState) -> u64 {
    if state.finalized {
        return 0;
    }
    state.finalized = true;
    let unserved = state.passengers.unresolved_count() as u64;
    if unserved > 0 {
        state.metrics.record_unserved(unserved);
    }
    log::info!(
        "{} horizon reached: {} completed, {} rejections, {unserved} unserved",
        state.time,
        state.metrics.completed(),
        state.metrics.rejected(),
    );
    unserved
}
