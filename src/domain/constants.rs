/// Default portal base URL (the deployment serves the API on port 5000).
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Default per-request timeout for portal calls.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Institutional mail domain; the generation payload derives `correo`
/// as `<codigo>@` this domain.
pub const UNI_MAIL_DOMAIN: &str = "uni.pe";

/// Shown when a command needs a session and none is stored. Profiles are
/// issued by the external auth portal; this client only records them.
pub const AUTH_HINT: &str = "not signed in: run `tipuy session login` with the profile issued by the auth portal";
