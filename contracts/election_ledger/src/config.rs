use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::ElectionError;
use crate::storage;
use crate::types::LedgerConfig;

/// Set the admin and initial configuration. Can only be called once.
pub fn initialize(env: &Env, admin: Address, config: LedgerConfig) -> Result<(), ElectionError> {
    if storage::has_admin(env) {
        return Err(ElectionError::AlreadyInitialized);
    }
    admin.require_auth();
    storage::set_admin(env, &admin);
    storage::set_config(env, &config);

    env.events().publish(
        (symbol_short!("init"),),
        (admin, config.overwrite_policy),
    );

    Ok(())
}

pub fn set_config(env: &Env, config: LedgerConfig) -> Result<(), ElectionError> {
    let admin = storage::get_admin(env).ok_or(ElectionError::NotInitialized)?;
    admin.require_auth();
    storage::set_config(env, &config);

    env.events().publish(
        (symbol_short!("config"), symbol_short!("updated")),
        config.overwrite_policy,
    );

    Ok(())
}

pub fn get_config(env: &Env) -> Result<LedgerConfig, ElectionError> {
    storage::get_config(env)
}
