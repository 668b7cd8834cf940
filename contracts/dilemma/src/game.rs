use soroban_sdk::{contracttype, Address, BytesN, Env, Map};

use crate::Error;

/// Rounds per session.
pub const MAX_ROUNDS: u32 = 5;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Move {
    Cooperate = 0,
    Defect = 1,
}

impl TryFrom<u32> for Move {
    type Error = Error;

    fn try_from(v: u32) -> Result<Self, Error> {
        match v {
            0 => Ok(Move::Cooperate),
            1 => Ok(Move::Defect),
            _ => Err(Error::InvalidMove),
        }
    }
}

/// Which of the two recorded players an address is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Seat {
    Player1,
    Player2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub player1: Address,
    pub player2: Address,
    // Keyed by round number, 1..=MAX_ROUNDS.
    pub p1_commitments: Map<u32, BytesN<32>>,
    pub p2_commitments: Map<u32, BytesN<32>>,
    pub p1_moves: Map<u32, u32>,
    pub p2_moves: Map<u32, u32>,
    pub p1_score: u32,
    pub p2_score: u32,
    pub current_round: u32,
    pub is_complete: bool,
}

/// Amounts escrowed at session start. Kept beside the game record so the
/// game's wire shape stays fixed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stakes {
    pub player1: i128,
    pub player2: i128,
}

impl Game {
    pub fn new(env: &Env, player1: Address, player2: Address) -> Self {
        Self {
            player1,
            player2,
            p1_commitments: Map::new(env),
            p2_commitments: Map::new(env),
            p1_moves: Map::new(env),
            p2_moves: Map::new(env),
            p1_score: 0,
            p2_score: 0,
            current_round: 1,
            is_complete: false,
        }
    }

    pub fn seat_of(&self, player: &Address) -> Result<Seat, Error> {
        if *player == self.player1 {
            Ok(Seat::Player1)
        } else if *player == self.player2 {
            Ok(Seat::Player2)
        } else {
            Err(Error::NotPlayer)
        }
    }

    pub fn ensure_active(&self) -> Result<(), Error> {
        if self.is_complete {
            Err(Error::GameAlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn commitments(&self, seat: Seat) -> &Map<u32, BytesN<32>> {
        match seat {
            Seat::Player1 => &self.p1_commitments,
            Seat::Player2 => &self.p2_commitments,
        }
    }

    fn moves(&self, seat: Seat) -> &Map<u32, u32> {
        match seat {
            Seat::Player1 => &self.p1_moves,
            Seat::Player2 => &self.p2_moves,
        }
    }

    pub fn commitment(&self, seat: Seat, round: u32) -> Option<BytesN<32>> {
        self.commitments(seat).get(round)
    }

    pub fn has_committed(&self, seat: Seat, round: u32) -> bool {
        self.commitments(seat).contains_key(round)
    }

    pub fn both_committed(&self, round: u32) -> bool {
        self.has_committed(Seat::Player1, round) && self.has_committed(Seat::Player2, round)
    }

    pub fn has_revealed(&self, seat: Seat, round: u32) -> bool {
        self.moves(seat).contains_key(round)
    }

    /// Both moves for `round`, once both players have revealed.
    pub fn revealed_moves(&self, round: u32) -> Option<(Move, Move)> {
        let m1 = Move::try_from(self.p1_moves.get(round)?).ok()?;
        let m2 = Move::try_from(self.p2_moves.get(round)?).ok()?;
        Some((m1, m2))
    }

    pub fn record_commitment(&mut self, seat: Seat, round: u32, commitment: BytesN<32>) {
        match seat {
            Seat::Player1 => self.p1_commitments.set(round, commitment),
            Seat::Player2 => self.p2_commitments.set(round, commitment),
        }
    }

    pub fn record_move(&mut self, seat: Seat, round: u32, mv: Move) {
        match seat {
            Seat::Player1 => self.p1_moves.set(round, mv as u32),
            Seat::Player2 => self.p2_moves.set(round, mv as u32),
        }
    }
}
