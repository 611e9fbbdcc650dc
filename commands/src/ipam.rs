//! `ipam config` handlers.
//!
//! Every handler reads the IPAM object once; `set` writes the whole object
//! back. Nothing guards against a concurrent writer between the two.

use errors::CommandError;
use nc_core::{IpamClient, IpamConfig, IpamConfigKey};
use nc_core::types::{MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
use strum::IntoEnumIterator;
use tracing::{debug, info};

const NAME_TABLE: &str = "config name";

async fn fetch(client: &dyn IpamClient) -> Result<IpamConfig, CommandError> {
    client
        .get_ipam_config()
        .await
        .map_err(|e| CommandError::store("failed to get IPAM config", e))
}

fn lookup(name: &str) -> Result<IpamConfigKey, CommandError> {
    IpamConfigKey::lookup(name).ok_or_else(|| CommandError::unrecognized(NAME_TABLE, name))
}

/// Parse a block size. Anything that is not an integer in
/// [`MIN_BLOCK_SIZE`, `MAX_BLOCK_SIZE`] is rejected with the raw text.
pub fn parse_block_size(value: &str) -> Result<u8, CommandError> {
    let invalid = || CommandError::InvalidValue {
        value: value.to_string()
    };
    let parsed: i64 = value.parse().map_err(|_| invalid())?;
    if parsed < i64::from(MIN_BLOCK_SIZE) || parsed > i64::from(MAX_BLOCK_SIZE) {
        return Err(invalid());
    }
    u8::try_from(parsed).map_err(|_| invalid())
}

/// Current value of the setting called `name` (case-insensitive).
pub async fn get(client: &dyn IpamClient, name: &str) -> Result<u8, CommandError> {
    let config = fetch(client).await?;
    let key = lookup(name)?;
    Ok(config.get(key))
}

/// Replace one setting and write the object back.
///
/// The value is checked before the name, so `set bogus 9` reports the
/// value.
pub async fn set(client: &dyn IpamClient, name: &str, value: &str) -> Result<(), CommandError> {
    let mut config = fetch(client).await?;
    let size = parse_block_size(value)?;
    let key = lookup(name)?;

    debug!(%key, old = config.get(key), new = size, "updating IPAM config");
    config.set(key, size);

    client
        .set_ipam_config(config)
        .await
        .map_err(|e| CommandError::store("failed to set IPAM config", e))?;
    info!(%key, value = size, "IPAM config updated");
    Ok(())
}

/// Every settable parameter with its current value.
pub async fn show(client: &dyn IpamClient) -> Result<Vec<(IpamConfigKey, u8)>, CommandError> {
    let config = fetch(client).await?;
    Ok(IpamConfigKey::iter().map(|key| (key, config.get(key))).collect())
}
