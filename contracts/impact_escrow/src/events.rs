use soroban_sdk::{contractevent, Address, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub ngo: Address,
    pub title: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceivedEvent {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub donor: Address,
    pub amount: i128,
    pub receipt_id: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProofSubmittedEvent {
    #[topic]
    pub campaign_id: u64,
    pub milestone_index: u32,
    pub proof_ref: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleUpdatedEvent {
    #[topic]
    pub oracle: Address,
    pub enabled: bool,
}

/// Emitted once per verified milestone, after the payout to the NGO has
/// gone through.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneReleasedEvent {
    #[topic]
    pub campaign_id: u64,
    pub milestone_index: u32,
    pub amount: i128,
    pub recipient: Address,
}

/// Emitted when the owner role is handed to a new address.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    #[topic]
    pub old_owner: Address,
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationPolicyUpdatedEvent {
    #[topic]
    pub owner: Address,
    pub accept_after_completion: bool,
    pub cap_at_target: bool,
}
