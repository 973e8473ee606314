//! Movement resolution.
//!
//! `destination` is the single source of truth for both legality and the
//! resulting state: a token is movable iff it has a destination.
//!
//! | From            | Die `d`                         | To                                   |
//! |-----------------|---------------------------------|--------------------------------------|
//! | `Base`          | `d == 6`                        | `OnRing { 0 }`                       |
//! | `OnRing { r }`  | `r + d < 52`                    | `OnRing { r + d }`                   |
//! | `OnRing { r }`  | `0 <= r + d - 52 <= 5`          | `InHomePath { r + d - 52 }`          |
//! | `InHomePath{i}` | `i + d <= 5`                    | `InHomePath { i + d }`               |
//! | `Finished`      | never                           |                                      |
//!
//! Any landing on home index 5 becomes `Finished`.

use crate::core::config::{DIE_FACES, FINAL_HOME_INDEX, RELEASE_ROLL, RING_LEN};
use crate::core::token::TokenState;

/// Where a token in `state` ends up after moving `die` squares.
///
/// Returns `None` if the move is illegal. Die values outside `1..=6` are
/// always illegal.
#[must_use]
pub fn destination(state: TokenState, die: u8) -> Option<TokenState> {
    if !(1..=DIE_FACES).contains(&die) {
        return None;
    }

    let landed = match state {
        TokenState::Finished => return None,
        TokenState::Base => {
            if die != RELEASE_ROLL {
                return None;
            }
            TokenState::OnRing { offset: 0 }
        }
        TokenState::OnRing { offset } => {
            let target = offset.saturating_add(die);
            if target < RING_LEN {
                TokenState::OnRing { offset: target }
            } else {
                let steps_into_home = target - RING_LEN;
                if steps_into_home > FINAL_HOME_INDEX {
                    return None;
                }
                TokenState::InHomePath { index: steps_into_home }
            }
        }
        TokenState::InHomePath { index } => {
            let target = index.saturating_add(die);
            if target > FINAL_HOME_INDEX {
                return None;
            }
            TokenState::InHomePath { index: target }
        }
    };

    Some(finish_if_home(landed))
}

/// Exact landing on the final home cell finishes the token.
fn finish_if_home(state: TokenState) -> TokenState {
    match state {
        TokenState::InHomePath { index } if index == FINAL_HOME_INDEX => TokenState::Finished,
        other => other,
    }
}
