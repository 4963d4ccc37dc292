//! Simulator scenario tests.
//!
//! Classic textbook reference strings with known hit/fault counts, plus
//! full step/undo walkthroughs of the public API.

use pagesim::common::config::parse_references;
use pagesim::{Error, Event, FrameId, PageId, Phase, Policy, PolicyState, Simulator, StepStats};

/// The short reference string used in most OS textbooks.
const SHORT: &str = "7 0 1 2 0 3 0 4";

/// The full 20-reference textbook string.
const TEXTBOOK: &str = "7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1";

fn run(policy: Policy, frames: usize, refs: &str) -> StepStats {
    let mut sim = Simulator::new();
    sim.configure(policy, frames, parse_references(refs).unwrap())
        .unwrap();
    sim.run_to_end().unwrap();
    sim.current_state().unwrap().stats
}

fn p(id: u32) -> PageId {
    PageId::new(id)
}

// ============================================================================
// Known results
// ============================================================================

/// Six distinct pages means at least six faults whatever the policy.
#[test]
fn test_short_string_counts() {
    assert_eq!(run(Policy::Fifo, 3, SHORT), StepStats { hits: 1, faults: 7 });
    assert_eq!(run(Policy::Lru, 3, SHORT), StepStats { hits: 2, faults: 6 });
    assert_eq!(run(Policy::Optimal, 3, SHORT), StepStats { hits: 2, faults: 6 });
}

#[test]
fn test_textbook_string_counts() {
    assert_eq!(run(Policy::Fifo, 3, TEXTBOOK).faults, 15);
    assert_eq!(run(Policy::Lru, 3, TEXTBOOK).faults, 12);
    assert_eq!(run(Policy::Optimal, 3, TEXTBOOK).faults, 9);
}

#[test]
fn test_single_frame_thrash() {
    for policy in Policy::ALL {
        assert_eq!(run(policy, 1, "1 2 3"), StepStats { hits: 0, faults: 3 });
    }
}

/// Belady's anomaly: FIFO faults more with four frames than with three.
#[test]
fn test_fifo_belady_anomaly() {
    let refs = "1 2 3 4 1 2 5 1 2 3 4 5";
    assert_eq!(run(Policy::Fifo, 3, refs).faults, 9);
    assert_eq!(run(Policy::Fifo, 4, refs).faults, 10);
}

#[test]
fn test_enough_frames_only_cold_faults() {
    for policy in Policy::ALL {
        let stats = run(policy, 8, TEXTBOOK);
        assert_eq!(stats.faults, 6);
        assert_eq!(stats.hits, 14);
    }
}

// ============================================================================
// Step-by-step walkthroughs
// ============================================================================

#[test]
fn test_fifo_walkthrough() {
    let mut sim = Simulator::new();
    sim.configure(Policy::Fifo, 3, parse_references(SHORT).unwrap())
        .unwrap();

    let events = sim.run_to_end().unwrap();
    let victims: Vec<Option<PageId>> = events
        .iter()
        .filter_map(|event| match event {
            Event::Fault { replaced, .. } => Some(*replaced),
            _ => None,
        })
        .collect();

    assert_eq!(
        victims,
        vec![None, None, None, Some(p(7)), Some(p(0)), Some(p(1)), Some(p(2))]
    );

    let state = sim.current_state().unwrap();
    assert_eq!(state.frames.as_slice(), &[Some(p(4)), Some(p(3)), Some(p(0))]);
    let PolicyState::Fifo(fifo) = &state.policy_state else {
        panic!("expected FIFO state");
    };
    assert_eq!(fifo.pointer(), FrameId::new(1));
}

#[test]
fn test_lru_walkthrough() {
    let mut sim = Simulator::new();
    sim.configure(Policy::Lru, 3, parse_references(SHORT).unwrap())
        .unwrap();

    let events = sim.run_to_end().unwrap();
    assert_eq!(
        events[5],
        Event::Fault {
            page: p(3),
            replaced: Some(p(1)),
            slot: FrameId::new(2)
        }
    );

    let state = sim.current_state().unwrap();
    let PolicyState::Lru(lru) = &state.policy_state else {
        panic!("expected LRU state");
    };
    assert_eq!(lru.recency(), &[p(3), p(0), p(4)]);
}

#[test]
fn test_optimal_walkthrough() {
    let mut sim = Simulator::new();
    sim.configure(Policy::Optimal, 3, parse_references(SHORT).unwrap())
        .unwrap();

    let events = sim.run_to_end().unwrap();

    // At 2: 7 never recurs
    assert_eq!(
        events[3],
        Event::Fault {
            page: p(2),
            replaced: Some(p(7)),
            slot: FrameId::new(0)
        }
    );
    // At 3: 2 and 1 never recur, the first slot wins
    assert_eq!(
        events[5],
        Event::Fault {
            page: p(3),
            replaced: Some(p(2)),
            slot: FrameId::new(0)
        }
    );
}

#[test]
fn test_undo_all_the_way_back() {
    let mut sim = Simulator::new();
    sim.configure(Policy::Lru, 3, parse_references(TEXTBOOK).unwrap())
        .unwrap();
    let initial = sim.current_state().unwrap();

    sim.run_to_end().unwrap();
    assert_eq!(sim.step_forward(), Ok(Event::Done));
    assert_eq!(sim.history_len(), 21);

    let mut undone = 0;
    while sim.step_backward() {
        undone += 1;
    }
    assert_eq!(undone, 20);
    assert_eq!(sim.phase(), Phase::Ready);
    assert_eq!(sim.current_state().unwrap(), initial);
}

#[test]
fn test_undo_then_redo_matches() {
    let mut sim = Simulator::new();
    sim.configure(Policy::Optimal, 3, parse_references(TEXTBOOK).unwrap())
        .unwrap();

    let first: Vec<Event> = sim.run_to_end().unwrap();
    for _ in 0..10 {
        sim.step_backward();
    }
    let replay = sim.run_to_end().unwrap();

    assert_eq!(replay.as_slice(), &first[10..]);
    assert_eq!(sim.current_state().unwrap().stats.faults, 9);
}

#[test]
fn test_contract_violations() {
    let mut sim = Simulator::new();
    assert_eq!(sim.step_forward(), Err(Error::NotConfigured));

    sim.configure(Policy::Fifo, 2, vec![p(1)]).unwrap();
    sim.step_forward().unwrap();
    assert_eq!(sim.step_forward(), Ok(Event::Done));
    assert_eq!(sim.step_forward(), Err(Error::StepAfterFinished));
    assert_eq!(sim.phase(), Phase::Finished);
}

#[test]
fn test_reconfigure_replaces_run() {
    let mut sim = Simulator::new();
    sim.configure(Policy::Fifo, 3, parse_references(SHORT).unwrap())
        .unwrap();
    sim.run_to_end().unwrap();

    sim.configure(Policy::Optimal, 2, vec![p(9)]).unwrap();
    let state = sim.current_state().unwrap();
    assert_eq!(state.cursor, 0);
    assert_eq!(state.frames.len(), 2);
    assert_eq!(state.stats, StepStats::new());
    assert_eq!(sim.history_len(), 1);
}
