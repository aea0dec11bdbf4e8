//! Platform inspection: OS family and privilege checks.

/// OS identifiers accepted by the installer.
pub const SUPPORTED_FAMILIES: [&str; 2] = ["debian", "ubuntu"];

/// Fields of interest from the os-release file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsRelease {
    /// `ID=` field, lowercased (e.g. "ubuntu").
    pub id: String,

    /// `ID_LIKE=` field, lowercased and split (e.g. ["debian"]).
    pub id_like: Vec<String>,

    /// `PRETTY_NAME=` field, verbatim.
    pub pretty_name: Option<String>,
}

impl OsRelease {
    /// Whether this OS belongs to a supported family, either directly
    /// (`ID`) or by derivation (`ID_LIKE`).
    pub fn is_supported(&self) -> bool {
        SUPPORTED_FAMILIES
            .iter()
            .any(|family| self.id == *family || self.id_like.iter().any(|like| like == family))
    }

    /// Human-readable name for reports.
    pub fn describe(&self) -> &str {
        match &self.pretty_name {
            Some(name) => name,
            None if !self.id.is_empty() => &self.id,
            None => "unknown",
        }
    }
}

/// Read OS identification metadata from the standard locations.
pub fn read_os_release() -> Option<OsRelease> {
    ["/etc/os-release", "/usr/lib/os-release"]
        .iter()
        .find_map(|path| std::fs::read_to_string(path).ok())
        .map(|content| parse_os_release(&content))
}

/// Parse os-release KEY=VALUE lines, stripping surrounding quotes.
fn parse_os_release(content: &str) -> OsRelease {
    let mut os = OsRelease::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');

        match key {
            "ID" => os.id = value.to_lowercase(),
            "ID_LIKE" => {
                os.id_like = value
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
            }
            "PRETTY_NAME" => os.pretty_name = Some(value.to_string()),
            _ => {}
        }
    }

    os
}

/// Check if running as root.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UBUNTU: &str = r#"
PRETTY_NAME="Ubuntu 22.04.4 LTS"
NAME="Ubuntu"
VERSION_ID="22.04"
ID=ubuntu
ID_LIKE=debian
"#;

    const DEBIAN: &str = r#"
PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"
NAME="Debian GNU/Linux"
ID=debian
"#;

    const MINT: &str = r#"
NAME="Linux Mint"
ID=linuxmint
ID_LIKE="ubuntu debian"
"#;

    const FEDORA: &str = r#"
NAME="Fedora Linux"
ID=fedora
PRETTY_NAME="Fedora Linux 40 (Workstation Edition)"
"#;

    #[test]
    fn parses_ubuntu_fields() {
        let os = parse_os_release(UBUNTU);
        assert_eq!(os.id, "ubuntu");
        assert_eq!(os.id_like, vec!["debian".to_string()]);
        assert_eq!(os.pretty_name.as_deref(), Some("Ubuntu 22.04.4 LTS"));
    }

    #[test]
    fn debian_is_supported_by_id() {
        assert!(parse_os_release(DEBIAN).is_supported());
    }

    #[test]
    fn mint_is_supported_via_id_like() {
        let os = parse_os_release(MINT);
        assert_eq!(os.id, "linuxmint");
        assert!(os.is_supported());
    }

    #[test]
    fn fedora_is_not_supported() {
        assert!(!parse_os_release(FEDORA).is_supported());
    }

    #[test]
    fn quoted_id_like_is_split() {
        let os = parse_os_release(MINT);
        assert_eq!(
            os.id_like,
            vec!["ubuntu".to_string(), "debian".to_string()]
        );
    }

    #[test]
    fn describe_prefers_pretty_name() {
        let os = parse_os_release(UBUNTU);
        assert_eq!(os.describe(), "Ubuntu 22.04.4 LTS");
    }

    #[test]
    fn describe_falls_back_to_id() {
        let os = parse_os_release("ID=alpine\n");
        assert_eq!(os.describe(), "alpine");
    }

    #[test]
    fn describe_handles_empty_input() {
        let os = parse_os_release("");
        assert_eq!(os.describe(), "unknown");
    }

    #[test]
    fn malformed_lines_are_ignored() {
        let os = parse_os_release("# comment\nnot a kv line\nID=debian\n");
        assert_eq!(os.id, "debian");
    }

    #[test]
    fn is_elevated_does_not_panic() {
        let _ = is_elevated();
    }
}
