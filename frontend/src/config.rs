// Set BACKEND_URL at build time to point the site at a separately hosted API.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url,
        None => default_backend_url(),
    }
}

#[cfg(debug_assertions)]
fn default_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
fn default_backend_url() -> &'static str {
    ""  // Same origin in production
}
