pub mod revoked_token;
pub mod user;

/*
 Accounts are created once and never deleted by this service. A login mints
 a signed session token; nothing about it is stored until the user logs out,
 at which point the exact token string lands in revoked_token and stays there
 until its natural expiry has passed.
 */
