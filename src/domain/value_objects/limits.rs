//! Size limits shared by ingress validation and filters

/// Maximum characters in an asset name
pub const MAX_NAME_LEN: usize = 128;

/// Maximum characters in an asset description
pub const MAX_DESCRIPTION_LEN: usize = 1024;

/// Maximum characters in a user login
pub const MAX_LOGIN_LEN: usize = 64;

/// Maximum characters in a user public key
pub const MAX_PUBLIC_KEY_LEN: usize = 4096;

/// Page size used when a list request names no limit
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a list request may ask for
pub const MAX_LIMIT: u32 = 100;
