//! Capture resolution.
//!
//! Landing on a non-safe ring square sends every other player's ring token on
//! that square back to base. There is no blocking rule: two or more tokens of
//! the same opponent sharing the square are all captured together. A player
//! never captures their own tokens.

use smallvec::SmallVec;

use crate::core::action::Capture;
use crate::core::config::BoardConfig;
use crate::core::player::{ring_square, Player, PlayerId};

/// Capture every opposing token on `square`.
///
/// `square` is the mover's absolute ring square after the move. Returns the
/// captured tokens in seat order, then token order.
pub fn resolve_captures(
    players: &mut [Player],
    mover: PlayerId,
    square: u8,
    config: &BoardConfig,
) -> SmallVec<[Capture; 4]> {
    let mut captured = SmallVec::new();

    if config.is_safe(square) {
        return captured;
    }

    for player in players.iter_mut().filter(|p| p.seat() != mover) {
        let entry = player.entry_point();
        let seat = player.seat();

        for token in player.tokens_mut() {
            let on_square = token
                .state()
                .ring_offset()
                .is_some_and(|offset| ring_square(entry, offset) == square);

            if on_square {
                token.send_to_base();
                captured.push(Capture {
                    player: seat,
                    token: token.id(),
                });
            }
        }
    }

    captured
}
