//! Announcer configuration.

/// Policy switches for segmentation and composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncerConfig {
    /// Drop the clause for an express segment that directly follows a
    /// contiguous segment.
    pub elide_express_after_contiguous: bool,

    /// Give stations left unclaimed by segmentation one more pass.
    /// Stations that still can't be classified are left out either way.
    pub recover_leftovers: bool,
}

impl AnnouncerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(elide_express_after_contiguous: bool, recover_leftovers: bool) -> Self {
        Self {
            elide_express_after_contiguous,
            recover_leftovers,
        }
    }
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            elide_express_after_contiguous: false,
            recover_leftovers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AnnouncerConfig::default();

        assert!(!config.elide_express_after_contiguous);
        assert!(config.recover_leftovers);
    }

    #[test]
    fn custom_config() {
        let config = AnnouncerConfig::new(true, false);

        assert!(config.elide_express_after_contiguous);
        assert!(!config.recover_leftovers);
    }
}
