//! Package manager detection from the invoking user agent

use std::fmt;

/// Manager assumed when no user agent is available
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Package manager that launched the scaffolder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerInfo {
    pub name: String,
    /// Opaque version label, never validated
    pub version: String,
}

impl PackageManagerInfo {
    /// Parse `"<name>/<version> <platform-info>"`.
    /// Returns None when the user agent is absent or blank.
    pub fn from_user_agent(user_agent: Option<&str>) -> Option<Self> {
        let token = user_agent?.split_whitespace().next()?;
        let (name, version) = token.split_once('/').unwrap_or((token, ""));

        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }

    /// Detect from the user agent, falling back to npm
    pub fn detect(user_agent: Option<&str>) -> Self {
        Self::from_user_agent(user_agent).unwrap_or_else(|| Self {
            name: DEFAULT_PACKAGE_MANAGER.to_string(),
            version: String::new(),
        })
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Yarn classic does not understand `@version` specifiers or `dlx`
    pub fn is_yarn1(&self) -> bool {
        self.is("yarn") && self.version.starts_with("1.")
    }

    /// Commands the user runs after files are copied
    pub fn next_step_commands(&self) -> Vec<String> {
        if self.is("yarn") {
            vec!["yarn".to_string(), "yarn dev".to_string()]
        } else {
            vec![
                format!("{} install", self.name),
                format!("{} run dev", self.name),
            ]
        }
    }
}

impl fmt::Display for PackageManagerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}@{}", self.name, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_name_and_version() {
        let info =
            PackageManagerInfo::from_user_agent(Some("pnpm/8.15.1 npm/? node/v20.11.0 linux x64"))
                .unwrap();
        assert_eq!(info.name, "pnpm");
        assert_eq!(info.version, "8.15.1");
    }

    #[test]
    fn test_absent_or_blank_is_undetected() {
        assert!(PackageManagerInfo::from_user_agent(None).is_none());
        assert!(PackageManagerInfo::from_user_agent(Some("")).is_none());
        assert!(PackageManagerInfo::from_user_agent(Some("   ")).is_none());
    }

    #[test]
    fn test_detect_defaults_to_npm() {
        let info = PackageManagerInfo::detect(None);
        assert_eq!(info.name, "npm");
        assert!(!info.is_yarn1());
    }

    #[test]
    fn test_version_is_opaque() {
        let info = PackageManagerInfo::from_user_agent(Some("bun/canary darwin")).unwrap();
        assert_eq!(info.name, "bun");
        assert_eq!(info.version, "canary");

        let info = PackageManagerInfo::from_user_agent(Some("cnpm")).unwrap();
        assert_eq!(info.name, "cnpm");
        assert_eq!(info.version, "");
    }

    #[test]
    fn test_yarn_major_detection() {
        let classic = PackageManagerInfo::detect(Some("yarn/1.22.19 npm/? node/v18.0.0"));
        let berry = PackageManagerInfo::detect(Some("yarn/4.1.0 npm/? node/v18.0.0"));
        assert!(classic.is_yarn1());
        assert!(!berry.is_yarn1());
    }

    #[test]
    fn test_next_step_commands() {
        assert_eq!(
            PackageManagerInfo::detect(Some("yarn/1.22.19")).next_step_commands(),
            vec!["yarn", "yarn dev"]
        );
        assert_eq!(
            PackageManagerInfo::detect(Some("pnpm/9.0.0")).next_step_commands(),
            vec!["pnpm install", "pnpm run dev"]
        );
    }
}
