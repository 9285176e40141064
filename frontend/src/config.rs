use web_sys::window;

pub fn get_api_base_url() -> String {
    // Use the current hostname and port for API requests
    // This allows the app to work when accessed from other computers
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());

            // Keep the port number (if any) from the current location
            return format!("{}//{}", protocol, location);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:3000".to_string()
}
