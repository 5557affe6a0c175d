/// Gateway fee paid to the serving full node when the caller sets none. No
/// JSON-RPC method exposes a canonical value, so this is policy.
pub const DEFAULT_GATEWAY_FEE: u64 = 10_000;
pub const DEFAULT_RPC_TIMEOUT: u64 = 30; // seconds
