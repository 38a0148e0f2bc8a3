use crate::errors::Error;
use crate::storage;
use crate::types::AuctionConfig;
use soroban_sdk::{Address, Env};

pub fn require_authority(env: &Env, caller: &Address) -> Result<AuctionConfig, Error> {
    caller.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    if config.authority != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
