mod common;

use std::collections::HashSet;

use bot::session::SessionState;
use proptest::prelude::*;

const HOST: u64 = 1;

#[derive(Debug, Clone)]
enum LobbyOp {
    Join(u64),
    Leave(u64),
}

fn lobby_ops() -> impl Strategy<Value = Vec<LobbyOp>> {
    // Small id space so joins, duplicate joins, and leaves of present and
    // absent players all occur. The host never leaves here; that path
    // tears down the whole session and is covered in lobby_test.
    prop::collection::vec(
        prop_oneof![
            (2u64..12).prop_map(LobbyOp::Join),
            (2u64..12).prop_map(LobbyOp::Leave),
        ],
        0..40,
    )
}

proptest! {
    /// Roster membership and join order name the same set at every
    /// observation point, with no duplicates in the order.
    #[test]
    fn roster_and_join_order_agree_under_any_lobby_traffic(ops in lobby_ops()) {
        let mut state = SessionState::new_lobby(HOST);

        for op in ops {
            match op {
                LobbyOp::Join(id) => {
                    let _ = state.join(id);
                }
                LobbyOp::Leave(id) => {
                    let _ = state.remove_from_lobby(id);
                }
            }

            let roster: HashSet<u64> = state.players.keys().copied().collect();
            let order: HashSet<u64> = state.join_order.iter().copied().collect();
            prop_assert_eq!(&roster, &order);
            prop_assert_eq!(state.join_order.len(), order.len());
        }
    }

    /// Leaving splices a player out without reordering the remaining ids.
    #[test]
    fn leave_preserves_relative_order(ops in lobby_ops()) {
        let mut state = SessionState::new_lobby(HOST);
        let mut previous = state.join_order.clone();

        for op in ops {
            match op {
                LobbyOp::Join(id) => {
                    if state.join(id).is_ok() {
                        previous.push(id);
                    }
                }
                LobbyOp::Leave(id) => {
                    if state.remove_from_lobby(id).is_ok() {
                        previous.retain(|p| *p != id);
                    }
                }
            }
            prop_assert_eq!(&state.join_order, &previous);
        }
    }
}
