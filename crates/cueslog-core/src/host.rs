//! Local host name, used as the default channel name

use once_cell::sync::Lazy;

/// Fallback when the host name cannot be read or is empty
const UNKNOWN_HOST: &str = "localhost";

static HOSTNAME: Lazy<String> = Lazy::new(|| {
    let name = gethostname::gethostname().to_string_lossy().trim().to_string();
    if name.is_empty() {
        UNKNOWN_HOST.to_string()
    } else {
        name
    }
});

/// The local host name, looked up once per process
pub fn hostname() -> &'static str {
    &HOSTNAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_is_stable() {
        let first = hostname();
        assert!(!first.is_empty());
        assert_eq!(first, hostname());
    }
}
