//! Fixed timestep simulation tick
//!
//! Advances one session by one unit of time. A tick is an atomic unit: the
//! caller holds the session exclusively for the whole step, so a concurrent
//! renderer only ever observes complete post-tick state.

use super::collision::{Collision, resolve};
use super::state::{GamePhase, GameSession};
use crate::consts::DESCENT_PER_TICK;

/// Advance the session by one tick
///
/// No-op once the session is over. Order within a tick is fixed: score,
/// scroll, closest-line lookup, spawn, evict, vertical resolution, floor
/// clamp, loss check.
pub fn tick(session: &mut GameSession) {
    if session.phase == GamePhase::Over {
        return;
    }

    session.score += 1;
    session.ticks += 1;

    session.track.advance();

    // Copied out before spawn/evict: the pre-spawn view decides this tick,
    // and a same-tick eviction must not invalidate it.
    let closest = session
        .track
        .closest_below(session.player.pos.y, session.player.radius);

    session
        .track
        .maybe_spawn(session.width, session.height, &mut session.rng);
    session.track.maybe_evict();

    match closest {
        Some(line) => match resolve(&line, session.player.pos, session.player.radius) {
            // Rest exactly on top of the line; the scroll then carries the
            // player up one unit per tick until a hole lines up.
            Collision::Blocked => session.player.pos.y = line.y - session.player.radius,
            Collision::Passing => session.player.pos.y += DESCENT_PER_TICK,
        },
        None => session.player.pos.y += DESCENT_PER_TICK,
    }

    if session.player.pos.y + session.player.radius > session.height {
        session.player.pos.y = session.height - session.player.radius;
    }

    if session.player.pos.y - session.player.radius <= 0 {
        session.phase = GamePhase::Over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HOLE_SIZE;
    use crate::sim::track::Line;
    use proptest::prelude::*;

    #[test]
    fn test_first_tick_spawns_line_at_bottom() {
        let mut session = GameSession::new(400, 600, 12345);
        tick(&mut session);

        assert_eq!(session.score, 1);
        assert_eq!(session.track.len(), 1);
        let line = *session.track.newest().unwrap();
        assert_eq!(line.y, 600);
        assert!((0..280).contains(&line.hole_start));
        // The line spawned after the closest-line lookup, so the player
        // free-falls this tick
        assert_eq!(session.player.pos.y, 302);
    }

    #[test]
    fn test_band_miss_descends() {
        // Post-advance line at y = 298: |300 - 298 + 20| = 22 misses the
        // contact band, so the player keeps falling even though it is
        // nowhere near the hole
        let mut session = GameSession::new(400, 600, 1);
        session.track.push(Line {
            y: 299,
            hole_start: 50,
            hole_width: HOLE_SIZE,
        });

        tick(&mut session);
        assert_eq!(session.player.pos.y, 302);
    }

    #[test]
    fn test_blocked_snaps_on_top_of_line() {
        // Post-advance line at y = 280; player at x = 200 is outside the
        // passable span [70, 150] and inside the band: snap to 260
        let mut session = GameSession::new(400, 600, 1);
        session.player.pos.y = 262;
        session.track.push(Line {
            y: 281,
            hole_start: 50,
            hole_width: HOLE_SIZE,
        });

        tick(&mut session);
        assert_eq!(session.player.pos.y, 280 - session.player.radius);
    }

    #[test]
    fn test_in_hole_falls_through() {
        // Same geometry but x = 110 sits inside the passable span: no snap
        let mut session = GameSession::new(400, 600, 1);
        session.player.pos.x = 110;
        session.player.pos.y = 262;
        session.track.push(Line {
            y: 281,
            hole_start: 50,
            hole_width: HOLE_SIZE,
        });

        tick(&mut session);
        assert_eq!(session.player.pos.y, 264);
    }

    #[test]
    fn test_descent_clamps_at_floor() {
        let mut session = GameSession::new(400, 600, 1);
        session.player.pos.y = 590;

        tick(&mut session);
        assert_eq!(session.player.pos.y, 600 - session.player.radius);
    }

    #[test]
    fn test_pushed_past_top_ends_game() {
        // Blocked against a line near the top: the snap lands the player at
        // y = 0, past the loss boundary
        let mut session = GameSession::new(400, 600, 1);
        session.player.pos.y = 2;
        session.track.push(Line {
            y: 21,
            hole_start: 260,
            hole_width: HOLE_SIZE,
        });

        tick(&mut session);
        assert!(session.is_over());
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_over_is_terminal_and_idempotent() {
        let mut session = GameSession::new(400, 600, 1);
        session.player.pos.y = 2;
        session.track.push(Line {
            y: 21,
            hole_start: 260,
            hole_width: HOLE_SIZE,
        });
        tick(&mut session);
        assert!(session.is_over());

        let score = session.score;
        let player = session.player;
        let track_len = session.track.len();
        for _ in 0..10 {
            tick(&mut session);
        }
        assert_eq!(session.score, score);
        assert_eq!(session.player, player);
        assert_eq!(session.track.len(), track_len);
    }

    #[test]
    fn test_score_counts_running_ticks() {
        let mut session = GameSession::new(400, 600, 42);
        for i in 1..=50u64 {
            tick(&mut session);
            assert_eq!(session.score, i);
            assert!(!session.is_over());
        }
    }

    #[test]
    fn test_determinism() {
        // Same seed and same input schedule give identical sessions
        let mut a = GameSession::new(400, 600, 99999);
        let mut b = GameSession::new(400, 600, 99999);

        for i in 0..500 {
            if i % 7 == 0 {
                a.player.nudge(-25, a.width);
                b.player.nudge(-25, b.width);
            }
            tick(&mut a);
            tick(&mut b);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.player, b.player);
        assert_eq!(a.track.len(), b.track.len());
        assert!(a.track.iter().zip(b.track.iter()).all(|(x, y)| x == y));
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_while_running(
            seed in any::<u64>(),
            ticks in 1usize..1500,
            moves in proptest::collection::vec(-1i32..=1, 1..64),
        ) {
            let mut session = GameSession::new(400, 600, seed);

            for i in 0..ticks {
                session.player.nudge(moves[i % moves.len()] * 25, session.width);
                tick(&mut session);

                prop_assert!(session.player.pos.x >= session.player.radius);
                prop_assert!(session.player.pos.x <= session.width - session.player.radius);

                let ys: Vec<i32> = session.track.iter().map(|line| line.y).collect();
                prop_assert!(ys.windows(2).all(|pair| pair[0] < pair[1]));

                for line in session.track.iter() {
                    prop_assert!(line.hole_start >= 0);
                    prop_assert!(line.hole_end() <= session.width);
                }

                if session.is_over() {
                    break;
                }
            }
        }

        #[test]
        fn prop_score_equals_running_ticks(
            seed in any::<u64>(),
            ticks in 1usize..500,
        ) {
            let mut session = GameSession::new(400, 600, seed);
            let mut expected = 0u64;

            for _ in 0..ticks {
                if !session.is_over() {
                    expected += 1;
                }
                tick(&mut session);
                prop_assert_eq!(session.score, expected);
            }
        }
    }
}
