//! Service names for well-known mail ports.

use std::collections::HashMap;
use std::sync::LazyLock;

static PORT_SERVICES: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(25, "smtp");
    m.insert(110, "pop3");
    m.insert(143, "imap");
    m.insert(465, "smtps");
    m.insert(587, "submission");
    m.insert(993, "imaps");
    m.insert(995, "pop3s");
    // Common alternate submission port offered by relay providers
    m.insert(2525, "smtp-alt");

    m
});

/// Get the service name for a port, or "unknown".
pub fn get_service_name(port: u16) -> &'static str {
    PORT_SERVICES.get(&port).copied().unwrap_or("unknown")
}
