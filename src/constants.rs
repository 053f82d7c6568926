//! A set of constants used by the library.

/// The interaction payload version sent by Discord. It is always `1`.
pub const INTERACTION_VERSION: u8 = 1;

/// Discord's epoch, "2015-01-01T00:00:00+00:00", in milliseconds since the UNIX epoch.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// The flag set on ephemeral messages, which only the invoking user can see.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;
