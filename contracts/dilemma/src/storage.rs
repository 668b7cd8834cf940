//! Ledger layout.
//!
//! - instance: `Config`, `VerificationKey`
//! - persistent: `Game(session_id)`, `Stakes(session_id)`
//!
//! Games are never removed; every write extends their TTL so finished
//! sessions stay readable as history.

use soroban_sdk::{contracttype, panic_with_error, Address, Bytes, Env};

use crate::game::{Game, Stakes};
use crate::Error;

// ~30 days of ledgers (5s per ledger)
pub const GAME_TTL_LEDGERS: u32 = 518_400;
pub const INSTANCE_TTL_LEDGERS: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    VerificationKey,
    Game(u32),
    Stakes(u32),
}

/// Deployment-wide configuration, written by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub game_hub: Address,
    pub native_token: Address,
    pub treasury: Address,
}

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_LEDGERS, INSTANCE_TTL_LEDGERS);
}

// ----- Config ---------------------------------------------------------------

pub fn load_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn load_verification_key(env: &Env) -> Option<Bytes> {
    env.storage().instance().get(&DataKey::VerificationKey)
}

pub fn save_verification_key(env: &Env, vk: &Bytes) {
    env.storage().instance().set(&DataKey::VerificationKey, vk);
    extend_instance(env);
}

// ----- Sessions -------------------------------------------------------------

pub fn has_game(env: &Env, session_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Game(session_id))
}

pub fn load_game(env: &Env, session_id: u32) -> Result<Game, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Game(session_id))
        .ok_or(Error::GameNotFound)
}

/// Store a new session. Existing sessions are never overwritten.
pub fn create_game(env: &Env, session_id: u32, game: &Game, stakes: &Stakes) -> Result<(), Error> {
    if has_game(env, session_id) {
        return Err(Error::SessionAlreadyExists);
    }
    env.storage()
        .persistent()
        .set(&DataKey::Stakes(session_id), stakes);
    save_game(env, session_id, game);
    Ok(())
}

/// Overwrite a session record. Stakes live as long as the game they belong to.
pub fn save_game(env: &Env, session_id: u32, game: &Game) {
    let persistent = env.storage().persistent();
    persistent.set(&DataKey::Game(session_id), game);
    for key in [DataKey::Game(session_id), DataKey::Stakes(session_id)] {
        persistent.extend_ttl(&key, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }
    extend_instance(env);
}

pub fn load_stakes(env: &Env, session_id: u32) -> Result<Stakes, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Stakes(session_id))
        .ok_or(Error::GameNotFound)
}
