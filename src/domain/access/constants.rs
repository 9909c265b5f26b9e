//! Fixed string identifiers shared by every reader and writer of persisted data.
//!
//! Changing any of these literals requires a data migration.

/// Names of the persisted document collections.
pub mod collections {
    /// User profiles, keyed by uid.
    pub const USERS: &str = "users";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    pub const USAGE: &str = "usage";
    pub const EVENTS: &str = "events";

    /// Every collection name, in declaration order.
    pub const ALL: [&str; 4] = [USERS, SUBSCRIPTIONS, USAGE, EVENTS];
}

/// Access level literals used as subscription tiers.
pub mod access_levels {
    pub const FREE: &str = "free";
    pub const PREMIUM: &str = "premium";

    /// Every access level, in declaration order.
    pub const ALL: [&str; 2] = [FREE, PREMIUM];
}
