//! Algebraic properties of the engine, checked over generated pipelines.

use proptest::prelude::*;
use railflow::prelude::*;
use serde_json::{json, Value};

/// One generated step: which preset, and what its function replies.
#[derive(Debug, Clone)]
enum Op {
    Run(bool, i64),
    Recover(bool, i64),
    Check(bool, i64),
    Tap(TrackFilter, bool),
    Note(bool),
    Memorize(String, i64),
}

fn reply(ok: bool, n: i64) -> Reply {
    if ok {
        Reply::ok(n)
    } else {
        Reply::error(n)
    }
}

fn filter() -> impl Strategy<Value = TrackFilter> {
    prop_oneof![
        Just(TrackFilter::Ok),
        Just(TrackFilter::Error),
        Just(TrackFilter::Both),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), any::<i64>()).prop_map(|(ok, n)| Op::Run(ok, n)),
        (any::<bool>(), any::<i64>()).prop_map(|(ok, n)| Op::Recover(ok, n)),
        (any::<bool>(), any::<i64>()).prop_map(|(ok, n)| Op::Check(ok, n)),
        (filter(), any::<bool>()).prop_map(|(f, fail)| Op::Tap(f, fail)),
        any::<bool>().prop_map(Op::Note),
        ("[a-c]", any::<i64>()).prop_map(|(name, n)| Op::Memorize(name, n)),
    ]
}

fn seed() -> impl Strategy<Value = Track> {
    (any::<bool>(), any::<i64>()).prop_map(|(ok, n)| {
        if ok {
            Track::ok(n)
        } else {
            Track::error(n)
        }
    })
}

fn apply(track: Track, op: &Op) -> Track {
    match op.clone() {
        Op::Run(ok, n) => track.run(move |_| Ok(reply(ok, n))).unwrap(),
        Op::Recover(ok, n) => track.recover(move |_| Ok(reply(ok, n))).unwrap(),
        Op::Check(ok, n) => track.check(move |_| Ok(reply(ok, n))).unwrap(),
        Op::Tap(filter, fail) => {
            let config = StepConfig::tap(filter).trapping();
            track
                .step(&config, move |_| {
                    if fail {
                        anyhow::bail!("tap failed");
                    }
                    Ok(Reply::error("ignored"))
                })
                .unwrap()
        }
        Op::Note(fail) => track
            .step(&StepConfig::note().trapping(), move |_| {
                if fail {
                    anyhow::bail!("note failed");
                }
                Ok(Reply::raw("ignored"))
            })
            .unwrap(),
        Op::Memorize(name, n) => track.memorize(name, n).unwrap(),
    }
}

proptest! {
    #[test]
    fn history_counts_every_invocation(start in seed(), ops in prop::collection::vec(op(), 0..24)) {
        let mut track = start;
        for (i, op) in ops.iter().enumerate() {
            let before: Vec<StepResult> = track.history().to_vec();
            track = apply(track, op);
            prop_assert_eq!(track.len(), i + 1);
            prop_assert_eq!(&track.history()[..i], &before[..]);
        }
    }

    #[test]
    fn run_steps_short_circuit_after_error(
        n in any::<i64>(),
        results in prop::collection::vec((any::<bool>(), any::<i64>()), 1..16),
    ) {
        let mut track = Track::new(n);
        let mut expected: Option<(Tag, Value)> = None;
        for (ok, m) in &results {
            let (ok, m) = (*ok, *m);
            track = track.run(move |_| Ok(reply(ok, m))).unwrap();
            if expected.is_none() && !ok {
                expected = Some((Tag::Error, json!(m)));
            }
        }

        match expected {
            Some(pair) => prop_assert_eq!(track.finish(), pair),
            None => {
                let last = results.last().map(|(_, m)| json!(m));
                prop_assert_eq!(track.finish(), (Tag::Ok, last.unwrap_or(json!(n))));
            }
        }
    }

    #[test]
    fn taps_and_notes_never_change_state(start in seed(), f in filter(), fail in any::<bool>()) {
        let before = (start.tag(), start.value().clone());
        let after_tap = apply(start, &Op::Tap(f, fail));
        prop_assert_eq!((after_tap.tag(), after_tap.value().clone()), before.clone());

        let after_note = apply(after_tap, &Op::Note(fail));
        prop_assert_eq!((after_note.tag(), after_note.value().clone()), before);
    }

    #[test]
    fn check_never_moves_error_to_ok(n in any::<i64>(), ok in any::<bool>(), m in any::<i64>()) {
        let track = Track::error(n).check(move |_| Ok(reply(ok, m))).unwrap();
        prop_assert_eq!(track.finish(), (Tag::Error, json!(n)));
    }

    #[test]
    fn recover_only_acts_on_errors(start in seed(), m in any::<i64>()) {
        let before = (start.tag(), start.value().clone());
        let track = start.recover(move |_| Ok(Reply::ok(m))).unwrap();
        if before.0 == Tag::Ok {
            prop_assert_eq!(track.finish(), before);
        } else {
            prop_assert_eq!(track.finish(), (Tag::Ok, json!(m)));
        }
    }

    #[test]
    fn recall_sees_latest_non_skipped_write(values in prop::collection::vec(any::<i64>(), 1..8)) {
        let mut track = Track::new(0);
        for v in &values {
            let v = *v;
            track = track.step(&StepConfig::run().named("x"), move |_| Ok(Reply::ok(v))).unwrap();
        }
        track = track.run(|_| Ok(Reply::error("stop"))).unwrap();
        track = track.step(&StepConfig::run().named("x"), |_| Ok(Reply::ok("unrun"))).unwrap();

        let last = *values.last().unwrap();
        prop_assert_eq!(track.recall(&["x"]), vec![json!(last)]);
    }
}
