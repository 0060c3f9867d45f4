//! Mobile client detection from the user agent

const MOBILE_TOKENS: [&str; 8] = [
    "Mobi",
    "Android",
    "iPhone",
    "iPad",
    "iPod",
    "Windows Phone",
    "Opera Mini",
    "IEMobile",
];

/// Whether the user agent belongs to a phone or tablet.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_TOKENS.iter().any(|token| user_agent.contains(token))
}
