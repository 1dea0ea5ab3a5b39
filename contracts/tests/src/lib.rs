#![cfg(test)]
extern crate std;


use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, String,
};

use impact_escrow::{
    ImpactError, ProofOfImpactContract, ProofOfImpactContractClient as EscrowClient,
};

#[test]
fn test_proof_of_impact_e2e() {
    let env = Env::default();

    // Automatically handles authorizations for all contract calls in the test
    env.mock_all_auths();

    // Identities
    let owner = Address::generate(&env);
    let oracle = Address::generate(&env);
    let water_ngo = Address::generate(&env);
    let school_ngo = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    // Token and escrow contract
    let asset = env.register_stellar_asset_contract_v2(owner.clone());
    let token = TokenClient::new(&env, &asset.address());
    let token_admin = StellarAssetClient::new(&env, &asset.address());
    let escrow_id = env.register(ProofOfImpactContract, ());
    let escrow = EscrowClient::new(&env, &escrow_id);

    token_admin.mint(&alice, &10_000);
    token_admin.mint(&bob, &10_000);

    escrow.initialize(&owner, &token.address);
    escrow.set_oracle(&owner, &oracle, &true);

    // Two campaigns with independent escrow
    let water = escrow.create_campaign(
        &owner,
        &water_ngo,
        &String::from_str(&env, "Village wells"),
        &vec![
            &env,
            String::from_str(&env, "Survey"),
            String::from_str(&env, "Drilling"),
            String::from_str(&env, "Handover"),
        ],
        &vec![&env, 1_000i128, 3_000i128, 1_000i128],
    );
    let school = escrow.create_campaign(
        &owner,
        &school_ngo,
        &String::from_str(&env, "Classroom kits"),
        &vec![&env, String::from_str(&env, "Kits delivered")],
        &vec![&env, 2_000i128],
    );
    assert_eq!((water, school), (1, 2));
    assert_eq!(escrow.get_next_campaign_id(), 3);

    escrow.donate(&alice, &water, &2_500);
    escrow.donate(&bob, &water, &2_500);
    escrow.donate(&bob, &school, &1_500);
    assert_eq!(token.balance(&escrow_id), 6_500);

    // Water: survey and drilling get paid, handover waits for proof
    escrow.submit_proof(&water_ngo, &water, &String::from_str(&env, "ipfs://survey"));
    escrow.verify_milestone_and_release(&oracle, &water, &0);
    escrow.submit_proof(&water_ngo, &water, &String::from_str(&env, "ipfs://drill"));
    escrow.verify_milestone_and_release(&oracle, &water, &1);

    let summary = escrow.get_campaign(&water);
    assert_eq!(summary.amount_raised, 5_000);
    assert_eq!(summary.funds_released, 4_000);
    assert_eq!(summary.next_milestone_index, 2);
    assert_eq!(summary.donor_count, 2);
    assert!(!summary.completed);
    assert_eq!(token.balance(&water_ngo), 4_000);

    // School: proof is in but escrow is short until another donation arrives
    escrow.submit_proof(&school_ngo, &school, &String::from_str(&env, "ipfs://kits"));
    assert_eq!(
        escrow.try_verify_milestone_and_release(&oracle, &school, &0),
        Err(Ok(ImpactError::InsufficientEscrow))
    );
    escrow.donate(&alice, &school, &500);
    assert_eq!(escrow.verify_milestone_and_release(&oracle, &school, &0), 2_000);
    assert!(escrow.get_campaign(&school).completed);
    assert_eq!(token.balance(&school_ngo), 2_000);

    // Receipts track every donor
    let receipt = escrow.get_receipt(&school, &2);
    assert_eq!(receipt.donor, alice);
    assert_eq!(receipt.amount, 500);

    // Escrow held by the contract matches the unreleased funds of all campaigns
    let held = escrow.get_escrow_balance(&water) + escrow.get_escrow_balance(&school);
    assert_eq!(token.balance(&escrow_id), held);
    assert_eq!(token.balance(&alice), 10_000 - 3_000);
    assert_eq!(token.balance(&bob), 10_000 - 4_000);
}
