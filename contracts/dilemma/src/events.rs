use soroban_sdk::{contractevent, Address, BytesN};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameStarted {
    #[topic]
    pub session_id: u32,
    pub player1: Address,
    pub player2: Address,
    pub player1_points: i128,
    pub player2_points: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveCommitted {
    #[topic]
    pub session_id: u32,
    #[topic]
    pub player: Address,
    pub round: u32,
    pub commitment: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveRevealed {
    #[topic]
    pub session_id: u32,
    #[topic]
    pub player: Address,
    pub round: u32,
    pub move_val: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundScored {
    #[topic]
    pub session_id: u32,
    pub round: u32,
    pub p1_delta: u32,
    pub p2_delta: u32,
    pub p1_score: u32,
    pub p2_score: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameSettled {
    #[topic]
    pub session_id: u32,
    pub p1_score: u32,
    pub p2_score: u32,
    pub player1_payout: i128,
    pub player2_payout: i128,
    pub treasury_payout: i128,
}

/// Carries the SHA-256 of the new key so clients can tell which key a reveal
/// will be checked against.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationKeyUpdated {
    pub vk_digest: BytesN<32>,
    pub vk_len: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    pub old_admin: Address,
    pub new_admin: Address,
}
