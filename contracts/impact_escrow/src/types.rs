use soroban_sdk::{contracttype, Address, String, Vec};

/// Where a milestone sits in its one-way proof chain.
///
/// The proof reference travels with the state, so a milestone can only be
/// verified if a proof was recorded first.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MilestoneState {
    Pending,
    ProofSubmitted(String),
    Verified(String),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub description: String,
    pub required_amount: i128,
    pub state: MilestoneState,
}

impl Milestone {
    pub fn proof_ref(&self) -> Option<String> {
        match &self.state {
            MilestoneState::Pending => None,
            MilestoneState::ProofSubmitted(proof_ref) | MilestoneState::Verified(proof_ref) => {
                Some(proof_ref.clone())
            }
        }
    }

    pub fn is_proof_submitted(&self) -> bool {
        !matches!(self.state, MilestoneState::Pending)
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.state, MilestoneState::Verified(_))
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub ngo: Address,
    pub title: String,
    pub milestones: Vec<Milestone>,
    pub target_amount: i128,
    pub amount_raised: i128,
    pub funds_released: i128,
    pub next_milestone_index: u32,
    pub donor_count: u32,
}

impl Campaign {
    pub fn is_completed(&self) -> bool {
        self.next_milestone_index == self.milestones.len()
    }

    pub fn escrow_balance(&self) -> i128 {
        self.amount_raised - self.funds_released
    }

    pub fn summary(&self) -> CampaignSummary {
        CampaignSummary {
            id: self.id,
            ngo: self.ngo.clone(),
            title: self.title.clone(),
            target_amount: self.target_amount,
            amount_raised: self.amount_raised,
            funds_released: self.funds_released,
            next_milestone_index: self.next_milestone_index,
            completed: self.is_completed(),
            donor_count: self.donor_count,
            milestone_count: self.milestones.len(),
        }
    }
}

/// Read-side view of a campaign as dashboards consume it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignSummary {
    pub id: u64,
    pub ngo: Address,
    pub title: String,
    pub target_amount: i128,
    pub amount_raised: i128,
    pub funds_released: i128,
    pub next_milestone_index: u32,
    pub completed: bool,
    pub donor_count: u32,
    pub milestone_count: u32,
}

/// Per-milestone columns of a campaign, index-aligned.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneArrays {
    pub descriptions: Vec<String>,
    pub required_amounts: Vec<i128>,
    pub proof_submitted: Vec<bool>,
    pub verified: Vec<bool>,
    pub proof_refs: Vec<String>,
}

/// Commemorative receipt minted for every accepted donation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    pub campaign_id: u64,
    pub receipt_id: u32,
    pub donor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationPolicy {
    pub accept_after_completion: bool,
    pub cap_at_target: bool,
}

impl Default for DonationPolicy {
    fn default() -> Self {
        Self {
            accept_after_completion: true,
            cap_at_target: false,
        }
    }
}
