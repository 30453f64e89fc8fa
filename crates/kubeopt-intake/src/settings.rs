//! Download acknowledgment settings.

use serde::{Deserialize, Serialize};

/// Instruction line returned with every download acknowledgment.
pub const DOWNLOAD_INSTRUCTIONS: &str = "Check your email for installation instructions";

/// Where the distributed image lives.
///
/// Feeds the pull command in the download acknowledgment. The tag here
/// is the published one; the acknowledgment does not vary with the
/// version a caller asked to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSettings {
    /// Registry host, `docker.io` by default
    pub registry: String,
    /// Image name
    pub image: String,
    /// Image tag
    pub tag: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            registry: "docker.io".to_string(),
            image: "kubeopt/aks-optimizer".to_string(),
            tag: "latest".to_string(),
        }
    }
}

impl DownloadSettings {
    /// The `docker pull` command for the published image.
    ///
    /// The default registry is elided, matching how the command is
    /// advertised on the site.
    pub fn pull_command(&self) -> String {
        if self.registry == "docker.io" {
            format!("docker pull {}:{}", self.image, self.tag)
        } else {
            format!("docker pull {}/{}:{}", self.registry, self.image, self.tag)
        }
    }

    /// Builds the acknowledgment payload returned after registration.
    pub fn acknowledgment(&self) -> DownloadAck {
        DownloadAck {
            download_url: self.pull_command(),
            instructions: DOWNLOAD_INSTRUCTIONS.to_string(),
        }
    }
}

/// Acknowledgment returned to a caller who registered a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadAck {
    /// Pull command for the published image
    pub download_url: String,
    /// Human-readable follow-up instruction
    pub instructions: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pull_command_elides_registry() {
        let settings = DownloadSettings::default();
        assert_eq!(
            settings.pull_command(),
            "docker pull kubeopt/aks-optimizer:latest"
        );
    }

    #[test]
    fn test_custom_registry_is_included() {
        let settings = DownloadSettings {
            registry: "ghcr.io".to_string(),
            ..DownloadSettings::default()
        };
        assert_eq!(
            settings.pull_command(),
            "docker pull ghcr.io/kubeopt/aks-optimizer:latest"
        );
    }

    #[test]
    fn test_acknowledgment_is_populated() {
        let ack = DownloadSettings::default().acknowledgment();
        assert!(!ack.download_url.is_empty());
        assert_eq!(ack.instructions, DOWNLOAD_INSTRUCTIONS);
    }
}
