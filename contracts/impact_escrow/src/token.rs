use soroban_sdk::{token, Address, Env};

/// Pull `amount` of the escrow token from `from` into the contract.
pub fn receive(env: &Env, token: &Address, from: &Address, amount: &i128) {
    let client = token::Client::new(env, token);
    client.transfer(from, &env.current_contract_address(), amount);
}

/// Pay `amount` of escrowed tokens out to `to`.
///
/// A rejected transfer traps, which rolls back the whole invocation.
pub fn send(env: &Env, token: &Address, to: &Address, amount: &i128) {
    let client = token::Client::new(env, token);
    client.transfer(&env.current_contract_address(), to, amount);
}
