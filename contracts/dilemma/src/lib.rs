#![no_std]

//! Five-round iterated prisoner's dilemma with zero-knowledge reveals.
//!
//! Each round both players commit a 32-byte digest of (move, salt). Once both
//! digests are on-chain, each player reveals the move with a Groth16 proof
//! that it opens their digest; the salt never leaves the client. When both
//! moves of a round are in, the round is scored. After round five the
//! escrowed stakes are settled and the game hub is told the result.
//!
//! Every entry point runs as one invocation: any `Err` or trap leaves the
//! stored session untouched.

use commit_verifier::VerifyError;
use soroban_sdk::{
    contract, contracterror, contractimpl, vec, Address, Bytes, BytesN, Env, IntoVal,
};

mod escrow;
mod events;
mod game;
mod hub;
mod payoff;
mod storage;


pub use game::{Game, Move, Stakes, MAX_ROUNDS};
pub use payoff::Settlement;
pub use storage::Config;

use events::{
    AdminChanged, GameSettled, GameStarted, MoveCommitted, MoveRevealed, RoundScored,
    VerificationKeyUpdated,
};
use hub::GameHubClient;

// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    GameNotFound = 1,
    NotPlayer = 2,
    AlreadyCommitted = 3,
    BothPlayersNotCommitted = 4,
    GameAlreadyEnded = 5,
    InvalidMove = 6,
    VerificationFailed = 7,
    VkNotSet = 8,
    AlreadyRevealed = 9,
    SessionAlreadyExists = 10,
    SelfPlay = 11,
    InvalidStake = 12,
    NotInitialized = 13,
}

impl From<VerifyError> for Error {
    fn from(_: VerifyError) -> Self {
        Error::VerificationFailed
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct DilemmaContract;

#[contractimpl]
impl DilemmaContract {
    pub fn __constructor(
        env: Env,
        admin: Address,
        game_hub: Address,
        native_token: Address,
        treasury: Address,
    ) {
        storage::save_config(
            &env,
            &Config {
                admin,
                game_hub,
                native_token,
                treasury,
            },
        );
    }

    // ----- Sessions ---------------------------------------------------------

    /// Open a session: both players authorize their stake, the stakes move
    /// into escrow and the session is registered with the game hub.
    pub fn start_game(
        env: Env,
        session_id: u32,
        player1: Address,
        player2: Address,
        player1_points: i128,
        player2_points: i128,
    ) -> Result<(), Error> {
        if player1 == player2 {
            return Err(Error::SelfPlay);
        }
        if player1_points < 0 || player2_points < 0 {
            return Err(Error::InvalidStake);
        }

        player1.require_auth_for_args(vec![
            &env,
            session_id.into_val(&env),
            player1_points.into_val(&env),
        ]);
        player2.require_auth_for_args(vec![
            &env,
            session_id.into_val(&env),
            player2_points.into_val(&env),
        ]);

        let game = Game::new(&env, player1.clone(), player2.clone());
        let stakes = Stakes {
            player1: player1_points,
            player2: player2_points,
        };
        storage::create_game(&env, session_id, &game, &stakes)?;

        let config = storage::load_config(&env);
        escrow::reserve(&env, &config, &player1, player1_points);
        escrow::reserve(&env, &config, &player2, player2_points);

        GameHubClient::new(&env, &config.game_hub).start_game(
            &env.current_contract_address(),
            &session_id,
            &player1,
            &player2,
            &player1_points,
            &player2_points,
        );

        GameStarted {
            session_id,
            player1,
            player2,
            player1_points,
            player2_points,
        }
        .publish(&env);
        Ok(())
    }

    /// Store a player's digest for the current round. The digest is opaque
    /// until it is opened by `reveal_move`.
    pub fn commit_move(
        env: Env,
        session_id: u32,
        player: Address,
        commitment: BytesN<32>,
    ) -> Result<(), Error> {
        player.require_auth();

        let mut game = storage::load_game(&env, session_id)?;
        let seat = game.seat_of(&player)?;
        game.ensure_active()?;

        let round = game.current_round;
        if game.has_committed(seat, round) {
            return Err(Error::AlreadyCommitted);
        }
        game.record_commitment(seat, round, commitment.clone());
        storage::save_game(&env, session_id, &game);

        MoveCommitted {
            session_id,
            player,
            round,
            commitment,
        }
        .publish(&env);
        Ok(())
    }

    /// Open the caller's commitment for the current round.
    ///
    /// `proof` must verify against the configured key with public inputs
    /// (stored commitment, `move_val`). When this is the second reveal of the
    /// round the round is scored; after the last round the game settles.
    pub fn reveal_move(
        env: Env,
        session_id: u32,
        player: Address,
        move_val: u32,
        proof: Bytes,
    ) -> Result<(), Error> {
        player.require_auth();

        let mut game = storage::load_game(&env, session_id)?;
        let seat = game.seat_of(&player)?;
        game.ensure_active()?;
        let vk = storage::load_verification_key(&env).ok_or(Error::VkNotSet)?;

        let round = game.current_round;
        if !game.both_committed(round) {
            return Err(Error::BothPlayersNotCommitted);
        }
        let mv = Move::try_from(move_val)?;
        if game.has_revealed(seat, round) {
            return Err(Error::AlreadyRevealed);
        }
        let commitment = game
            .commitment(seat, round)
            .ok_or(Error::BothPlayersNotCommitted)?;

        commit_verifier::verify(&env, &vk, &commitment, move_val, &proof)?;

        game.record_move(seat, round, mv);
        MoveRevealed {
            session_id,
            player,
            round,
            move_val,
        }
        .publish(&env);

        if let Some((m1, m2)) = game.revealed_moves(round) {
            Self::finish_round(&env, session_id, &mut game, m1, m2)?;
        }

        storage::save_game(&env, session_id, &game);
        Ok(())
    }

    pub fn get_game(env: Env, session_id: u32) -> Result<Game, Error> {
        storage::load_game(&env, session_id)
    }

    pub fn get_stakes(env: Env, session_id: u32) -> Result<Stakes, Error> {
        storage::load_stakes(&env, session_id)
    }

    // ----- Admin ------------------------------------------------------------

    pub fn get_admin(env: Env) -> Address {
        storage::load_config(&env).admin
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let mut config = storage::load_config(&env);
        config.admin.require_auth();

        let old_admin = core::mem::replace(&mut config.admin, new_admin.clone());
        storage::save_config(&env, &config);
        AdminChanged {
            old_admin,
            new_admin,
        }
        .publish(&env);
    }

    pub fn get_config(env: Env) -> Config {
        storage::load_config(&env)
    }

    pub fn get_game_hub(env: Env) -> Address {
        storage::load_config(&env).game_hub
    }

    /// Replace the verification key. Reveals are always checked against the
    /// key current at reveal time, including reveals for rounds committed
    /// under an earlier key.
    pub fn set_verification_key(env: Env, vk: Bytes) {
        let config = storage::load_config(&env);
        config.admin.require_auth();

        storage::save_verification_key(&env, &vk);
        VerificationKeyUpdated {
            vk_digest: env.crypto().sha256(&vk).into(),
            vk_len: vk.len(),
        }
        .publish(&env);
    }

    pub fn get_verification_key(env: Env) -> Option<Bytes> {
        storage::load_verification_key(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let config = storage::load_config(&env);
        config.admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // --- Internals ---

    fn finish_round(
        env: &Env,
        session_id: u32,
        game: &mut Game,
        m1: Move,
        m2: Move,
    ) -> Result<(), Error> {
        let round = game.current_round;
        let (p1_delta, p2_delta) = payoff::apply_round(game, m1, m2);
        RoundScored {
            session_id,
            round,
            p1_delta,
            p2_delta,
            p1_score: game.p1_score,
            p2_score: game.p2_score,
        }
        .publish(env);

        if round < MAX_ROUNDS {
            game.current_round += 1;
            return Ok(());
        }

        game.is_complete = true;
        Self::settle_game(env, session_id, game)
    }

    fn settle_game(env: &Env, session_id: u32, game: &Game) -> Result<(), Error> {
        let config = storage::load_config(env);
        let stakes = storage::load_stakes(env, session_id)?;
        let settlement = payoff::settle(game.p1_score, game.p2_score, &stakes);
        escrow::pay_out(env, &config, game, &settlement);

        // The hub has no draw outcome; a tie is reported for player 1.
        let player1_won = game.p1_score >= game.p2_score;
        GameHubClient::new(env, &config.game_hub).end_game(&session_id, &player1_won);

        GameSettled {
            session_id,
            p1_score: game.p1_score,
            p2_score: game.p2_score,
            player1_payout: settlement.player1,
            player2_payout: settlement.player2,
            treasury_payout: settlement.treasury,
        }
        .publish(env);
        Ok(())
    }
}
