//! Wire model of the hybrid face-analysis HTTP API.
//!
//! Every field the tester only inspects opportunistically is optional or
//! defaulted, so a sparse response still decodes.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;

/// Backend selectable through the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Aws,
    Python,
    Hybrid,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Aws => "aws",
            Provider::Python => "python",
            Provider::Hybrid => "hybrid",
        })
    }
}

/// Provider name as the service reports it.
///
/// The service takes its provider from unchecked configuration, so names
/// outside [`Provider`] are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReportedProvider {
    Known(Provider),
    Other(String),
}

impl ReportedProvider {
    pub fn known(&self) -> Option<Provider> {
        match self {
            ReportedProvider::Known(p) => Some(*p),
            ReportedProvider::Other(_) => None,
        }
    }
}

impl fmt::Display for ReportedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportedProvider::Known(p) => p.fmt(f),
            ReportedProvider::Other(name) => f.write_str(name),
        }
    }
}

/// Common `{success, data}` response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

/// Whether a payload carries nothing: `null`, `false`, `0`, `""`, `[]` or `{}`.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

impl Envelope<Value> {
    /// Decode `data` as `T`, treating an empty payload as absent.
    pub fn payload<T: DeserializeOwned>(self) -> serde_json::Result<Option<T>> {
        match self.data {
            Some(value) if !is_empty_payload(&value) => serde_json::from_value(value).map(Some),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderStatus {
    #[serde(default)]
    pub aws: Availability,
    #[serde(default)]
    pub python: Availability,
}

/// Active routing configuration as reported by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridConfig {
    pub provider: ReportedProvider,
    #[serde(default)]
    pub primary_provider: Option<ReportedProvider>,
}

impl HybridConfig {
    /// The subset of this configuration the update action accepts, if the
    /// active provider is one the action can name.
    pub fn to_update(&self) -> Option<ConfigUpdate> {
        Some(ConfigUpdate {
            provider: self.provider.known()?,
            primary_provider: self.primary_provider.as_ref().and_then(ReportedProvider::known),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusData {
    pub providers: ProviderStatus,
    pub config: HybridConfig,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Body of `POST /api/hybrid/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum StatusAction {
    UpdateConfig { config: ConfigUpdate },
    TestProviders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_provider: Option<Provider>,
}

impl ConfigUpdate {
    pub fn only(provider: Provider) -> Self {
        Self {
            provider,
            primary_provider: None,
        }
    }

    /// Combined mode preferring the local provider.
    pub fn hybrid_default() -> Self {
        Self {
            provider: Provider::Hybrid,
            primary_provider: Some(Provider::Python),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdateData {
    pub new_config: HybridConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderTestData {
    #[serde(default)]
    pub message: Option<String>,
    pub providers: ProviderStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub source_image: String,
    pub target_image: String,
    pub similarity_threshold: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareData {
    #[serde(default)]
    pub similarity: f64,
    #[serde(default)]
    pub face_matches: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectRequest {
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRequest {
    pub parent_image: String,
    pub child_image: String,
    pub parent_age: u32,
    pub child_age: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FamilyData {
    #[serde(default)]
    pub similarity: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_action_is_tagged() {
        let body = serde_json::to_value(StatusAction::UpdateConfig {
            config: ConfigUpdate::hybrid_default(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"action": "update-config", "config": {"provider": "hybrid", "primaryProvider": "python"}})
        );
    }

    #[test]
    fn single_provider_update_omits_primary() {
        let body = serde_json::to_value(StatusAction::UpdateConfig {
            config: ConfigUpdate::only(Provider::Python),
        })
        .unwrap();
        assert_eq!(body, json!({"action": "update-config", "config": {"provider": "python"}}));
    }

    #[test]
    fn test_providers_action_has_no_payload() {
        let body = serde_json::to_value(StatusAction::TestProviders).unwrap();
        assert_eq!(body, json!({"action": "test-providers"}));
    }

    #[test]
    fn sparse_status_decodes() {
        let env: Envelope<StatusData> = serde_json::from_value(json!({
            "success": true,
            "data": {"providers": {"aws": {"available": true}, "python": {}}, "config": {"provider": "aws"}}
        }))
        .unwrap();
        let data = env.data.unwrap();
        assert!(data.providers.aws.available);
        assert!(!data.providers.python.available);
        assert_eq!(data.config.primary_provider, None);
        assert!(data.recommendations.is_empty());
    }

    #[test]
    fn empty_payloads_decode_as_absent() {
        for data in [json!(null), json!({}), json!([]), json!(false), json!(0), json!("")] {
            let env: Envelope<Value> =
                serde_json::from_value(json!({"success": true, "data": data.clone()})).unwrap();
            assert!(env.success);
            assert!(env.payload::<CompareData>().unwrap().is_none(), "{data}");
        }
    }

    #[test]
    fn populated_payload_decodes() {
        let env: Envelope<Value> =
            serde_json::from_value(json!({"success": true, "data": {"similarity": 0.5}})).unwrap();
        let data = env.payload::<CompareData>().unwrap().unwrap();
        assert_eq!(data.similarity, 0.5);
    }

    #[test]
    fn missing_success_defaults_false() {
        let env: Envelope<Value> = serde_json::from_value(json!({})).unwrap();
        assert!(!env.success);
    }

    #[test]
    fn unknown_provider_is_kept_verbatim() {
        let config: HybridConfig = serde_json::from_value(json!({
            "provider": "rekognition-v2",
            "primaryProvider": "python"
        }))
        .unwrap();
        assert_eq!(config.provider.to_string(), "rekognition-v2");
        assert_eq!(config.primary_provider.unwrap().known(), Some(Provider::Python));
    }

    #[test]
    fn update_requires_a_known_provider() {
        let known: HybridConfig =
            serde_json::from_value(json!({"provider": "aws", "primaryProvider": "local"})).unwrap();
        assert_eq!(known.to_update(), Some(ConfigUpdate::only(Provider::Aws)));
        let unknown: HybridConfig = serde_json::from_value(json!({"provider": "local"})).unwrap();
        assert_eq!(unknown.to_update(), None);
    }
}
