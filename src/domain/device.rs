//! # Device Classification
//!
//! This module decides whether the app is running on a mobile device, which
//! is the one environment-derived input the form has: on mobile the date
//! pickers are calendar-only, on everything else free-text entry is allowed.
//!
//! ## Key Functions:
//! - `runtime_identity()` - Read the device identity string, once, at startup
//! - `classify()` - Match the identity string against the mobile token set
//!
//! ## Design:
//! Detection is an explicit initialization step in `main` producing an
//! immutable `DeviceClass` that gets injected into the app struct. Nothing
//! re-detects later; the identity string cannot change mid-session.

/// Substrings that identify a mobile platform, matched case-insensitively
const MOBILE_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Environment variable that overrides the detected identity string.
/// Lets tests and manual runs simulate a mobile device.
pub const IDENTITY_OVERRIDE_VAR: &str = "DAYS_COUNTER_USER_AGENT";

/// Two-valued device classification affecting input affordances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Mobile platform: date pickers disallow free-text entry
    Mobile,
    /// Anything else: free-text entry is allowed alongside the calendar
    Desktop,
}

impl DeviceClass {
    /// Whether the input-affordance policy should disallow free-text entry
    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

/// Classify a device identity string.
///
/// `Mobile` iff the string contains any of the known mobile-platform tokens,
/// case-insensitively. Idempotent and pure, so it is trivially testable with
/// simulated identities.
pub fn classify(identity: &str) -> DeviceClass {
    let lowered = identity.to_lowercase();
    if MOBILE_TOKENS.iter().any(|token| lowered.contains(token)) {
        DeviceClass::Mobile
    } else {
        DeviceClass::Desktop
    }
}

/// Read the device identity string for this session.
///
/// Honors the `DAYS_COUNTER_USER_AGENT` override when set; otherwise builds
/// an identity from the compile-time platform, spelling the mobile operating
/// systems with the token names `classify` expects.
pub fn runtime_identity() -> String {
    if let Ok(identity) = std::env::var(IDENTITY_OVERRIDE_VAR) {
        return identity;
    }

    match std::env::consts::OS {
        "android" => format!("Android ({})", std::env::consts::ARCH),
        "ios" => format!("iPhone OS ({})", std::env::consts::ARCH),
        os => format!("{} ({})", os, std::env::consts::ARCH),
    }
}
