pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Build-time API key for the Generative Language API. An empty key makes the
/// consultant degrade to its static fallback copy instead of calling out.
pub fn get_gemini_api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}
