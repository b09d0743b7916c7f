//! Value objects for cards.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

// ════════════════════════════════════════════════════════════════════════════════
// CardContent - The markdown body with integrity checking
// ════════════════════════════════════════════════════════════════════════════════

/// The raw markdown body of a card with a checksum for change detection.
///
/// Change detection is exact byte equality of the raw content; no whitespace
/// or markdown normalization is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardContent {
    raw: String,
    checksum: String,
}

impl CardContent {
    /// Creates new content, computing the checksum.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let checksum = Self::compute_checksum(&raw);
        Self { raw, checksum }
    }

    /// Computes SHA-256 checksum of content.
    fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Returns the raw markdown content.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the content checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Returns the content size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.raw.len()
    }

    /// Checks if content differs from another string (exact equality).
    pub fn has_changed(&self, other: &str) -> bool {
        self.raw != other
    }

    /// Replaces the content with new raw markdown.
    pub fn update(&mut self, new_raw: impl Into<String>) {
        let new_raw = new_raw.into();
        self.checksum = Self::compute_checksum(&new_raw);
        self.raw = new_raw;
    }
}

impl Default for CardContent {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for CardContent {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CardContent {}

// ════════════════════════════════════════════════════════════════════════════════
// CardVersion - Monotonically increasing version number
// ════════════════════════════════════════════════════════════════════════════════

/// Version of a card's published content.
///
/// Starts at 1 on creation and only ever increases. Also used as the
/// optimistic-lock token for conditional persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardVersion(u32);

impl CardVersion {
    /// Creates the initial version (1).
    pub fn initial() -> Self {
        Self(1)
    }

    /// Creates a version from a raw value.
    pub fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw version number.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the next version.
    pub fn increment(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for CardVersion {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for CardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// CardStatus - Lifecycle state
// ════════════════════════════════════════════════════════════════════════════════

/// Lifecycle status of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    /// Editable, not visible in the catalog.
    Draft,
    /// Visible in the catalog; content passed the publication gate.
    Published,
}

impl CardStatus {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Draft => "DRAFT",
            CardStatus::Published => "PUBLISHED",
        }
    }
}

impl Default for CardStatus {
    fn default() -> Self {
        CardStatus::Draft
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(CardStatus::Draft),
            "PUBLISHED" => Ok(CardStatus::Published),
            _ => Err(format!("Invalid card status: {}", s)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// CardType - What kind of knowledge product this is
// ════════════════════════════════════════════════════════════════════════════════

/// Kind of knowledge product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Guide,
    Playbook,
    Template,
    CaseStudy,
}

impl CardType {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Guide => "GUIDE",
            CardType::Playbook => "PLAYBOOK",
            CardType::Template => "TEMPLATE",
            CardType::CaseStudy => "CASE_STUDY",
        }
    }
}

impl Default for CardType {
    fn default() -> Self {
        CardType::Guide
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GUIDE" => Ok(CardType::Guide),
            "PLAYBOOK" => Ok(CardType::Playbook),
            "TEMPLATE" => Ok(CardType::Template),
            "CASE_STUDY" => Ok(CardType::CaseStudy),
            _ => Err(format!("Invalid card type: {}", s)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// LicenseType - Usage rights granted to buyers
// ════════════════════════════════════════════════════════════════════════════════

/// License granted to a buyer on acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseType {
    Personal,
    Team,
    Commercial,
}

impl LicenseType {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Personal => "PERSONAL",
            LicenseType::Team => "TEAM",
            LicenseType::Commercial => "COMMERCIAL",
        }
    }
}

impl Default for LicenseType {
    fn default() -> Self {
        LicenseType::Personal
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LicenseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERSONAL" => Ok(LicenseType::Personal),
            "TEAM" => Ok(LicenseType::Team),
            "COMMERCIAL" => Ok(LicenseType::Commercial),
            _ => Err(format!("Invalid license type: {}", s)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────────────────────────────────────────────
    // CardContent Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn card_content_computes_checksum() {
        let content = CardContent::new("# Hello World");
        assert_eq!(content.checksum().len(), 64); // SHA-256 hex string
    }

    #[test]
    fn card_content_change_detection_is_exact() {
        let content = CardContent::new("# Original");
        assert!(!content.has_changed("# Original"));
        assert!(content.has_changed("# Original ")); // trailing space counts
        assert!(content.has_changed("# original")); // case counts
    }

    #[test]
    fn card_content_equality_uses_raw_bytes() {
        let content1 = CardContent::new("# Same");
        let content2 = CardContent::new("# Same");
        let content3 = CardContent::new("# Different");

        assert_eq!(content1, content2);
        assert_ne!(content1, content3);
    }

    #[test]
    fn card_content_update_changes_checksum() {
        let mut content = CardContent::new("# Original");
        let original_checksum = content.checksum().to_string();

        content.update("# Updated");

        assert_ne!(content.checksum(), original_checksum);
        assert_eq!(content.raw(), "# Updated");
    }

    // ───────────────────────────────────────────────────────────────
    // CardVersion Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn card_version_starts_at_one() {
        assert_eq!(CardVersion::initial().as_u32(), 1);
    }

    #[test]
    fn card_version_increments_by_one() {
        let v1 = CardVersion::initial();
        let v2 = v1.increment();
        assert_eq!(v2.as_u32(), 2);
        assert_eq!(v2.increment().as_u32(), 3);
    }

    #[test]
    fn card_version_displays_with_prefix() {
        assert_eq!(format!("{}", CardVersion::from_raw(7)), "v7");
    }

    #[test]
    fn card_version_ordering_works() {
        assert!(CardVersion::from_raw(1) < CardVersion::from_raw(2));
    }

    // ───────────────────────────────────────────────────────────────
    // Enum storage string Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn card_status_round_trips_through_str() {
        for status in [CardStatus::Draft, CardStatus::Published] {
            assert_eq!(status.as_str().parse::<CardStatus>().unwrap(), status);
        }
        assert!("ARCHIVED".parse::<CardStatus>().is_err());
    }

    #[test]
    fn card_type_round_trips_through_str() {
        for ty in [
            CardType::Guide,
            CardType::Playbook,
            CardType::Template,
            CardType::CaseStudy,
        ] {
            assert_eq!(ty.as_str().parse::<CardType>().unwrap(), ty);
        }
    }

    #[test]
    fn license_type_round_trips_through_str() {
        for license in [
            LicenseType::Personal,
            LicenseType::Team,
            LicenseType::Commercial,
        ] {
            assert_eq!(license.as_str().parse::<LicenseType>().unwrap(), license);
        }
    }

    #[test]
    fn card_status_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&CardStatus::Published).unwrap(),
            "\"PUBLISHED\""
        );
        assert_eq!(
            serde_json::to_string(&CardType::CaseStudy).unwrap(),
            "\"CASE_STUDY\""
        );
    }
}
