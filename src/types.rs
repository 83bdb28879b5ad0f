//! Shared data types for the NebulaAI brand name generator.
//!
//! These are data-transfer types only. They serialize with camelCase field
//! names so they line up with the JSON the web front end exchanges.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// A generated brand name candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResult {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub domain: String,
    pub domain_status: DomainStatus,
    pub vibe: String,
}

/// Registration status of a candidate's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Available,
    Premium,
    Taken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoSuggestion {
    pub style: String,
    pub colors: Vec<String>,
    pub icon_suggestion: String,
    pub description: String,
}

/// Market data for an industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryInsight {
    pub id: String,
    pub industry: String,
    pub trend_score: f64,
    pub market_cap: String,
    pub growth_rate: String,
    pub competitor_count: u32,
    pub ai_recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    pub similar_names: Vec<String>,
    pub differentiation_score: f64,
    pub market_positioning: String,
}

/// Availability of a handle on one social platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaHandle {
    pub platform: String,
    pub handle: String,
    pub available: bool,
}

/// Preferred length of generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    Tech,
    Friendly,
    Professional,
    Creative,
    Premium,
}

/// Target market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    B2b,
    B2c,
    Enterprise,
    Consumer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Memorability {
    High,
    Medium,
    Low,
}

/// Knobs for name generation. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<NameLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<NameStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<Market>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memorability: Option<Memorability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_friendly: Option<bool>,
}

/// Model-assigned scores for a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiScores {
    pub ai_score: f64,
    pub memorability_score: f64,
    pub branding_potential: f64,
    pub international_appeal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub memorability: f64,
    pub pronunciation: f64,
    pub brandability: f64,
    pub suggestions: Vec<String>,
}

/// Industry a name is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndustryType {
    AiPowered,
    Fintech,
    Saas,
    Web3,
    Ecommerce,
    Social,
    Creative,
}

/// Vibes and industries share one vocabulary.
pub type VibeType = IndustryType;

impl IndustryType {
    /// Every industry, in display order.
    pub const ALL: [IndustryType; 7] = [
        IndustryType::AiPowered,
        IndustryType::Fintech,
        IndustryType::Saas,
        IndustryType::Web3,
        IndustryType::Ecommerce,
        IndustryType::Social,
        IndustryType::Creative,
    ];

    /// The wire name, e.g. `"ai-powered"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryType::AiPowered => "ai-powered",
            IndustryType::Fintech => "fintech",
            IndustryType::Saas => "saas",
            IndustryType::Web3 => "web3",
            IndustryType::Ecommerce => "ecommerce",
            IndustryType::Social => "social",
            IndustryType::Creative => "creative",
        }
    }
}

impl fmt::Display for IndustryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndustryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        IndustryType::ALL
            .into_iter()
            .find(|industry| industry.as_str() == s)
            .ok_or_else(|| CoreError::validation(format!("Unknown vibe: {}", s)))
    }
}

/// Produces name candidates for a vibe.
///
/// `count` and `options` fall back to implementation defaults when `None`.
pub trait NameGenerator<T> {
    fn generate(
        &self,
        vibe: &str,
        count: Option<usize>,
        options: Option<&GenerationOptions>,
    ) -> Vec<T>;
}

/// Analyzes a name or phrase asynchronously.
#[async_trait]
pub trait Analyzer<T>: Send + Sync {
    async fn analyze(&self, input: &str) -> Result<T>;
}
