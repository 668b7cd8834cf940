//! Stake custody through the native token contract.

use soroban_sdk::{token, Address, Env};

use crate::game::Game;
use crate::payoff::Settlement;
use crate::storage::Config;

/// Move `amount` from `player` into the contract. Zero stakes skip the transfer.
pub fn reserve(env: &Env, config: &Config, player: &Address, amount: i128) {
    if amount > 0 {
        let token_client = token::Client::new(env, &config.native_token);
        token_client.transfer(player, &env.current_contract_address(), &amount);
    }
}

/// Pay out a settlement. A failing transfer traps, aborting the invocation
/// that completed the game.
pub fn pay_out(env: &Env, config: &Config, game: &Game, settlement: &Settlement) {
    let token_client = token::Client::new(env, &config.native_token);
    let contract_address = env.current_contract_address();

    let payouts = [
        (&game.player1, settlement.player1),
        (&game.player2, settlement.player2),
        (&config.treasury, settlement.treasury),
    ];
    for (to, amount) in payouts {
        if amount > 0 {
            token_client.transfer(&contract_address, to, &amount);
        }
    }
}
