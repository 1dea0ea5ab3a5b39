#![no_std]

mod errors;
mod events;
mod storage;
mod token;
mod types;

pub use errors::ImpactError;
use events::{
    CampaignCreatedEvent, DonationPolicyUpdatedEvent, DonationReceivedEvent, InitializedEvent,
    MilestoneReleasedEvent, OracleUpdatedEvent, OwnershipTransferredEvent, ProofSubmittedEvent,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
pub use types::{
    Campaign, CampaignSummary, DonationPolicy, Milestone, MilestoneArrays, MilestoneState, Receipt,
};

#[contract]
pub struct ProofOfImpactContract;

#[contractimpl]
impl ProofOfImpactContract {
    /// Initialize the contract with an owner and the token held in escrow
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ImpactError> {
        // Check if already initialized
        if storage::has_owner(&env) {
            return Err(ImpactError::AlreadyInitialized);
        }

        // Require owner authorization
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_token(&env, &token);
        storage::set_next_campaign_id(&env, 1);
        storage::set_donation_policy(&env, &DonationPolicy::default());

        InitializedEvent { owner, token }.publish(&env);

        Ok(())
    }

    /// Create a campaign for `ngo` with milestones given as parallel
    /// description / amount lists (owner only)
    pub fn create_campaign(
        env: Env,
        caller: Address,
        ngo: Address,
        title: String,
        descriptions: Vec<String>,
        amounts: Vec<i128>,
    ) -> Result<u64, ImpactError> {
        require_owner(&env, &caller)?;

        if title.is_empty() || descriptions.is_empty() || descriptions.len() != amounts.len() {
            return Err(ImpactError::InvalidInput);
        }

        let mut milestones = Vec::new(&env);
        let mut target_amount: i128 = 0;
        for (description, required_amount) in descriptions.iter().zip(amounts.iter()) {
            if description.is_empty() || required_amount <= 0 {
                return Err(ImpactError::InvalidInput);
            }
            target_amount = target_amount
                .checked_add(required_amount)
                .ok_or(ImpactError::Overflow)?;
            milestones.push_back(Milestone {
                description,
                required_amount,
                state: MilestoneState::Pending,
            });
        }

        let campaign_id = storage::get_next_campaign_id(&env);
        let campaign = Campaign {
            id: campaign_id,
            ngo: ngo.clone(),
            title: title.clone(),
            milestones,
            target_amount,
            amount_raised: 0,
            funds_released: 0,
            next_milestone_index: 0,
            donor_count: 0,
        };
        storage::set_campaign(&env, &campaign);
        storage::set_next_campaign_id(&env, campaign_id + 1);

        log!(&env, "campaign {} created, target {}", campaign_id, target_amount);
        CampaignCreatedEvent {
            campaign_id,
            ngo,
            title,
        }
        .publish(&env);

        Ok(campaign_id)
    }

    /// Donate `amount` of the escrow token to a campaign
    pub fn donate(
        env: Env,
        donor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), ImpactError> {
        let token = storage::get_token(&env).ok_or(ImpactError::NotInitialized)?;

        // Require donor authorization
        donor.require_auth();

        let mut campaign =
            storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;

        if amount <= 0 {
            return Err(ImpactError::InvalidInput);
        }

        let policy = storage::get_donation_policy(&env);
        if campaign.is_completed() && !policy.accept_after_completion {
            return Err(ImpactError::AlreadyCompleted);
        }

        let amount_raised = campaign
            .amount_raised
            .checked_add(amount)
            .ok_or(ImpactError::Overflow)?;
        if policy.cap_at_target && amount_raised > campaign.target_amount {
            return Err(ImpactError::TargetExceeded);
        }
        let receipt_id = campaign
            .donor_count
            .checked_add(1)
            .ok_or(ImpactError::Overflow)?;

        // Transfer tokens from donor into escrow
        token::receive(&env, &token, &donor, &amount);

        campaign.amount_raised = amount_raised;
        campaign.donor_count = receipt_id;
        storage::set_campaign(&env, &campaign);
        storage::set_receipt(
            &env,
            &Receipt {
                campaign_id,
                receipt_id,
                donor: donor.clone(),
                amount,
            },
        );

        DonationReceivedEvent {
            campaign_id,
            donor,
            amount,
            receipt_id,
        }
        .publish(&env);

        Ok(())
    }

    /// Attach a proof reference to the campaign's current milestone (NGO only)
    pub fn submit_proof(
        env: Env,
        caller: Address,
        campaign_id: u64,
        proof_ref: String,
    ) -> Result<(), ImpactError> {
        if !storage::has_owner(&env) {
            return Err(ImpactError::NotInitialized);
        }

        let mut campaign =
            storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;

        if caller != campaign.ngo {
            return Err(ImpactError::Unauthorized);
        }
        caller.require_auth();

        if campaign.is_completed() {
            return Err(ImpactError::AlreadyCompleted);
        }

        let milestone_index = campaign.next_milestone_index;
        let mut milestone = campaign
            .milestones
            .get(milestone_index)
            .ok_or(ImpactError::NotFound)?;
        if milestone.state != MilestoneState::Pending {
            return Err(ImpactError::AlreadySubmitted);
        }
        if proof_ref.is_empty() {
            return Err(ImpactError::InvalidInput);
        }

        milestone.state = MilestoneState::ProofSubmitted(proof_ref.clone());
        campaign.milestones.set(milestone_index, milestone);
        storage::set_campaign(&env, &campaign);

        ProofSubmittedEvent {
            campaign_id,
            milestone_index,
            proof_ref,
        }
        .publish(&env);

        Ok(())
    }

    /// Grant or revoke the oracle role (owner only). Idempotent.
    pub fn set_oracle(
        env: Env,
        caller: Address,
        oracle: Address,
        enabled: bool,
    ) -> Result<(), ImpactError> {
        require_owner(&env, &caller)?;

        storage::set_oracle(&env, &oracle, enabled);

        OracleUpdatedEvent { oracle, enabled }.publish(&env);

        Ok(())
    }

    /// Verify the proof of the campaign's current milestone and release its
    /// required amount from escrow to the NGO (oracle only).
    ///
    /// All checks run before the payout, and the campaign record is only
    /// written after the payout succeeded. A failed payout traps and the
    /// invocation leaves no trace.
    pub fn verify_milestone_and_release(
        env: Env,
        caller: Address,
        campaign_id: u64,
        milestone_index: u32,
    ) -> Result<i128, ImpactError> {
        let token = storage::get_token(&env).ok_or(ImpactError::NotInitialized)?;

        if !storage::is_oracle(&env, &caller) {
            return Err(ImpactError::Unauthorized);
        }
        caller.require_auth();

        let mut campaign =
            storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;
        let mut milestone = campaign
            .milestones
            .get(milestone_index)
            .ok_or(ImpactError::NotFound)?;

        // Every milestone below the gate is already verified, so a repeat
        // lands here rather than on the ordering check.
        if milestone.is_verified() {
            return Err(ImpactError::AlreadyVerified);
        }
        if milestone_index != campaign.next_milestone_index {
            return Err(ImpactError::OutOfOrder);
        }
        let proof_ref = match milestone.state {
            MilestoneState::ProofSubmitted(proof_ref) => proof_ref,
            _ => return Err(ImpactError::ProofMissing),
        };

        let release = milestone.required_amount;
        let funds_released = campaign
            .funds_released
            .checked_add(release)
            .ok_or(ImpactError::Overflow)?;
        if funds_released > campaign.amount_raised {
            return Err(ImpactError::InsufficientEscrow);
        }

        // Transfer tokens from escrow to the NGO
        token::send(&env, &token, &campaign.ngo, &release);

        milestone.state = MilestoneState::Verified(proof_ref);
        campaign.milestones.set(milestone_index, milestone);
        campaign.funds_released = funds_released;
        campaign.next_milestone_index += 1;
        storage::set_campaign(&env, &campaign);

        log!(
            &env,
            "campaign {} milestone {} released {}",
            campaign_id,
            milestone_index,
            release
        );
        MilestoneReleasedEvent {
            campaign_id,
            milestone_index,
            amount: release,
            recipient: campaign.ngo,
        }
        .publish(&env);

        Ok(release)
    }

    /// Hand the owner role to `new_owner` (owner only)
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ImpactError> {
        require_owner(&env, &caller)?;

        storage::set_owner(&env, &new_owner);

        OwnershipTransferredEvent {
            old_owner: caller,
            new_owner,
        }
        .publish(&env);

        Ok(())
    }

    /// Replace the donation policy (owner only)
    pub fn set_donation_policy(
        env: Env,
        caller: Address,
        policy: DonationPolicy,
    ) -> Result<(), ImpactError> {
        require_owner(&env, &caller)?;

        storage::set_donation_policy(&env, &policy);

        DonationPolicyUpdatedEvent {
            owner: caller,
            accept_after_completion: policy.accept_after_completion,
            cap_at_target: policy.cap_at_target,
        }
        .publish(&env);

        Ok(())
    }

    /// Get campaign summary
    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<CampaignSummary, ImpactError> {
        let campaign = storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;
        Ok(campaign.summary())
    }

    /// Get every milestone of a campaign as index-aligned columns
    pub fn get_all_milestones(
        env: Env,
        campaign_id: u64,
    ) -> Result<MilestoneArrays, ImpactError> {
        let campaign = storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;

        let mut arrays = MilestoneArrays {
            descriptions: Vec::new(&env),
            required_amounts: Vec::new(&env),
            proof_submitted: Vec::new(&env),
            verified: Vec::new(&env),
            proof_refs: Vec::new(&env),
        };
        for milestone in campaign.milestones.iter() {
            arrays.proof_submitted.push_back(milestone.is_proof_submitted());
            arrays.verified.push_back(milestone.is_verified());
            arrays.proof_refs.push_back(
                milestone
                    .proof_ref()
                    .unwrap_or_else(|| String::from_str(&env, "")),
            );
            arrays.required_amounts.push_back(milestone.required_amount);
            arrays.descriptions.push_back(milestone.description);
        }

        Ok(arrays)
    }

    /// Get a single milestone
    pub fn get_milestone(
        env: Env,
        campaign_id: u64,
        milestone_index: u32,
    ) -> Result<Milestone, ImpactError> {
        let campaign = storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;
        campaign
            .milestones
            .get(milestone_index)
            .ok_or(ImpactError::NotFound)
    }

    /// Get funds raised but not yet released
    pub fn get_escrow_balance(env: Env, campaign_id: u64) -> Result<i128, ImpactError> {
        let campaign = storage::get_campaign(&env, campaign_id).ok_or(ImpactError::NotFound)?;
        Ok(campaign.escrow_balance())
    }

    /// Get the impact receipt minted by a donation
    pub fn get_receipt(
        env: Env,
        campaign_id: u64,
        receipt_id: u32,
    ) -> Result<Receipt, ImpactError> {
        storage::get_receipt(&env, campaign_id, receipt_id).ok_or(ImpactError::NotFound)
    }

    pub fn is_oracle(env: Env, principal: Address) -> bool {
        storage::is_oracle(&env, &principal)
    }

    /// Get owner address
    pub fn get_owner(env: Env) -> Result<Address, ImpactError> {
        storage::get_owner(&env).ok_or(ImpactError::NotInitialized)
    }

    /// Get token address
    pub fn get_token(env: Env) -> Result<Address, ImpactError> {
        storage::get_token(&env).ok_or(ImpactError::NotInitialized)
    }

    /// Id the next campaign will receive; existing ids are `1..next`
    pub fn get_next_campaign_id(env: Env) -> u64 {
        storage::get_next_campaign_id(&env)
    }

    pub fn get_donation_policy(env: Env) -> DonationPolicy {
        storage::get_donation_policy(&env)
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), ImpactError> {
    let owner = storage::get_owner(env).ok_or(ImpactError::NotInitialized)?;

    // Verify owner identity
    if *caller != owner {
        return Err(ImpactError::Unauthorized);
    }

    caller.require_auth();
    Ok(())
}
