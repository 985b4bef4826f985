//! Build metadata stamped in by `build.rs`

/// Identity of the running binary
#[derive(Debug, Clone, PartialEq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_stamps(
            option_env!("NUTRISCALE_BUILD_NUMBER"),
            option_env!("NUTRISCALE_BUILD_TIMESTAMP"),
        )
    }

    /// Missing or garbled stamps fall back to build 0 / "unknown"
    fn from_stamps(number: Option<&'static str>, timestamp: Option<&'static str>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
        }
    }

    /// Log the startup banner. Hidden unless `RUST_LOG` enables `info`.
    pub fn log_startup(&self) {
        tracing::info!(
            version = self.version,
            build = self.build_number,
            compiled = self.build_timestamp,
            "starting nutriscale"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stamps() {
        let info = BuildInfo::from_stamps(Some("42"), Some("2026-01-01T00:00:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.build_timestamp, "2026-01-01T00:00:00Z");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_from_stamps_fallbacks() {
        let info = BuildInfo::from_stamps(Some("4x2"), None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");
    }
}
