//! Individual endpoint probes.
//!
//! Each probe issues its requests, narrates what it saw to the console and
//! returns a [`ProbeReport`]. Transport faults and unreadable bodies are
//! returned as [`ProbeError`] for the runner to isolate.

use std::io::Write;

use fixture::create_test_image;
use serde_json::Value;
use tracing::warn;

use crate::api::{
    CompareData, CompareRequest, ConfigUpdate, ConfigUpdateData, DetectRequest, FamilyData,
    FamilyRequest, HybridConfig, Provider, ProviderStatus, ProviderTestData, ReportedProvider,
    StatusAction, StatusData,
};
use crate::client::{HybridClient, Reply};
use crate::console::{Console, flag};
use crate::error::{ProbeError, Result};
use crate::report::{Outcome, Probe, ProbeReport};

const NO_FACE: &str = "⚠️ 얼굴이 감지되지 않음 (정상 - 단순한 그림)";

/// How an HTTP 200 carrying no faces is judged.
///
/// Flat-color fixtures contain no faces, so tolerating an empty answer is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoftPolicy {
    #[default]
    Tolerate,
    Require,
}

impl SoftPolicy {
    fn judge(self, probe: Probe) -> ProbeReport {
        match self {
            SoftPolicy::Tolerate => ProbeReport::new(probe, Outcome::Soft, "no face detected"),
            SoftPolicy::Require => ProbeReport::failed(probe, "no face detected"),
        }
    }
}

fn no_face<W: Write>(out: &mut Console<W>, policy: SoftPolicy, probe: Probe) -> ProbeReport {
    out.line(NO_FACE);
    policy.judge(probe)
}

fn status_line<W: Write>(out: &mut Console<W>, reply: &Reply) {
    out.line(format!("Status: {}", reply.status.as_u16()));
}

fn http_failure(probe: Probe, reply: &Reply) -> ProbeReport {
    ProbeReport::failed(probe, format!("HTTP {}", reply.status.as_u16()))
}

/// Print the parsed error body of a rejected request.
fn dump_response<W: Write>(out: &mut Console<W>, probe: Probe, reply: &Reply) -> Result<ProbeReport> {
    let body: Value = reply.json()?;
    out.line(format!("응답: {body}"));
    Ok(http_failure(probe, reply))
}

fn availability<W: Write>(out: &mut Console<W>, providers: &ProviderStatus) {
    out.line(format!("AWS 사용 가능: {}", flag(providers.aws.available)));
    out.line(format!("Python 사용 가능: {}", flag(providers.python.available)));
}

/// `GET /api/hybrid/status`. Also returns the configuration in effect.
pub async fn status<W: Write>(
    client: &HybridClient,
    out: &mut Console<W>,
) -> Result<(ProbeReport, Option<HybridConfig>)> {
    let reply = client.status().await?;
    status_line(out, &reply);
    if !reply.is_ok() {
        out.line(format!("❌ 상태 확인 실패: {}", reply.body));
        return Ok((http_failure(Probe::Status, &reply), None));
    }

    let env = reply.envelope::<StatusData>()?;
    out.line(format!("성공: {}", flag(env.success)));
    let data = env.data.ok_or(ProbeError::MissingField("data"))?;

    availability(out, &data.providers);
    out.line(format!("현재 설정: {}", data.config.provider));
    let primary = data
        .config
        .primary_provider
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".into());
    out.line(format!("주 공급자: {primary}"));
    if let Some(err) = &data.providers.aws.error {
        out.line(format!("  AWS 오류: {err}"));
    }
    if let Some(err) = &data.providers.python.error {
        out.line(format!("  Python 오류: {err}"));
    }
    for tip in &data.recommendations {
        out.line(format!("  추천: {tip}"));
    }
    out.line("✅ 하이브리드 상태 확인 성공");

    let report = ProbeReport::passed(Probe::Status, format!("provider {}", data.config.provider));
    Ok((report, Some(data.config)))
}

/// `POST /api/rekognition/compare-faces` with two differently colored fixtures.
pub async fn compare<W: Write>(
    client: &HybridClient,
    out: &mut Console<W>,
    threshold: f64,
    policy: SoftPolicy,
) -> Result<ProbeReport> {
    let req = CompareRequest {
        source_image: create_test_image("blue", None)?,
        target_image: create_test_image("green", None)?,
        similarity_threshold: threshold,
    };
    let reply = client.compare_faces(&req).await?;
    status_line(out, &reply);
    if !reply.is_ok() {
        return dump_response(out, Probe::Compare, &reply);
    }

    let env = reply.envelope::<Value>()?;
    out.line(format!("성공: {}", flag(env.success)));
    let Some(data) = env.payload::<CompareData>()? else {
        return Ok(no_face(out, policy, Probe::Compare));
    };
    out.line(format!("유사도: {:.3}", data.similarity));
    if !data.face_matches.is_empty() {
        out.line(format!("  일치 얼굴 수: {}", data.face_matches.len()));
    }
    out.line("✅ 하이브리드 얼굴 비교 성공");
    Ok(ProbeReport::passed(
        Probe::Compare,
        format!("similarity {:.3}", data.similarity),
    ))
}

/// `POST /api/rekognition/detect-faces` with a single fixture.
pub async fn detect<W: Write>(
    client: &HybridClient,
    out: &mut Console<W>,
    policy: SoftPolicy,
) -> Result<ProbeReport> {
    let req = DetectRequest {
        image: create_test_image("yellow", None)?,
    };
    let reply = client.detect_faces(&req).await?;
    status_line(out, &reply);
    if !reply.is_ok() {
        return dump_response(out, Probe::Detect, &reply);
    }

    let env = reply.envelope::<Value>()?;
    out.line(format!("성공: {}", flag(env.success)));
    let Some(faces) = env.payload::<Vec<Value>>()? else {
        return Ok(no_face(out, policy, Probe::Detect));
    };
    out.line(format!("감지된 얼굴 수: {}", faces.len()));
    out.line("✅ 하이브리드 얼굴 감지 성공");
    Ok(ProbeReport::passed(
        Probe::Detect,
        format!("{} face(s)", faces.len()),
    ))
}

/// Switch the service to the python provider, then put `restore` back.
///
/// The restore request is sent whenever the switch was accepted, even if the
/// echoed configuration is unexpected or unreadable.
pub async fn config_change<W: Write>(
    client: &HybridClient,
    out: &mut Console<W>,
    restore: ConfigUpdate,
) -> Result<ProbeReport> {
    let target = Provider::Python;
    let reply = client
        .status_action(&StatusAction::UpdateConfig {
            config: ConfigUpdate::only(target),
        })
        .await?;
    status_line(out, &reply);
    if !reply.is_ok() {
        out.line(format!("❌ 설정 변경 실패: {}", reply.body));
        return Ok(http_failure(Probe::ConfigChange, &reply));
    }

    let echoed = match reply.envelope::<ConfigUpdateData>() {
        Ok(env) => {
            out.line(format!("설정 변경 성공: {}", flag(env.success)));
            match env.data {
                Some(data) => {
                    out.line(format!("새 설정: {}", data.new_config.provider));
                    Some(data.new_config.provider)
                }
                None => {
                    out.line("⚠️ 새 설정이 응답에 없음");
                    None
                }
            }
        }
        Err(e) => {
            out.line(format!("⚠️ 응답 해석 실패: {e}"));
            None
        }
    };
    let switched = echoed.as_ref().and_then(ReportedProvider::known) == Some(target);
    if !switched {
        warn!(?echoed, %target, "service did not echo the requested provider");
    }

    let reply = client
        .status_action(&StatusAction::UpdateConfig { config: restore })
        .await?;
    if !reply.is_ok() {
        out.line("❌ 하이브리드 복원 실패");
        return Ok(ProbeReport::failed(
            Probe::ConfigChange,
            format!("restore returned HTTP {}", reply.status.as_u16()),
        ));
    }
    out.line("✅ 설정 변경 테스트 성공");
    let detail = match echoed {
        Some(_) if switched => format!("switched to {target} and restored {}", restore.provider),
        Some(p) => format!("service echoed {p} instead of {target}; restored {}", restore.provider),
        None => format!("switch not echoed; restored {}", restore.provider),
    };
    Ok(ProbeReport::passed(Probe::ConfigChange, detail))
}

/// `POST /api/hybrid/status` with the `test-providers` action.
pub async fn provider_test<W: Write>(
    client: &HybridClient,
    out: &mut Console<W>,
) -> Result<ProbeReport> {
    let reply = client.status_action(&StatusAction::TestProviders).await?;
    status_line(out, &reply);
    if !reply.is_ok() {
        out.line(format!("❌ 공급자 점검 실패: {}", reply.body));
        return Ok(http_failure(Probe::ProviderTest, &reply));
    }

    let env = reply.envelope::<ProviderTestData>()?;
    out.line(format!("성공: {}", flag(env.success)));
    let data = env.data.ok_or(ProbeError::MissingField("data"))?;
    if let Some(message) = &data.message {
        out.line(format!("메시지: {message}"));
    }
    availability(out, &data.providers);
    out.line("✅ 공급자 점검 성공");
    Ok(ProbeReport::passed(
        Probe::ProviderTest,
        format!(
            "aws {}, python {}",
            data.providers.aws.available, data.providers.python.available
        ),
    ))
}

/// `POST /api/family-similarity` with parent/child fixtures.
pub async fn family_similarity<W: Write>(
    client: &HybridClient,
    out: &mut Console<W>,
    policy: SoftPolicy,
) -> Result<ProbeReport> {
    let req = FamilyRequest {
        parent_image: create_test_image("black", None)?,
        child_image: create_test_image("white", None)?,
        parent_age: 35,
        child_age: 8,
    };
    let reply = client.family_similarity(&req).await?;
    status_line(out, &reply);
    if !reply.is_ok() {
        return dump_response(out, Probe::FamilySimilarity, &reply);
    }

    let env = reply.envelope::<Value>()?;
    out.line(format!("성공: {}", flag(env.success)));
    let Some(data) = env.payload::<FamilyData>()? else {
        return Ok(no_face(out, policy, Probe::FamilySimilarity));
    };
    out.line(format!("가족 유사도: {:.3}", data.similarity));
    if let Some(confidence) = data.confidence {
        out.line(format!("신뢰도: {confidence:.3}"));
    }
    out.line("✅ 가족 유사도 분석 성공");
    Ok(ProbeReport::passed(
        Probe::FamilySimilarity,
        format!("similarity {:.3}", data.similarity),
    ))
}
