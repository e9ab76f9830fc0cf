pub const DEFAULT_NETWORK: &str = "optimism";

pub const DEFAULT_RPC_PORT: u16 = 9545;
