use std::io::Write;

use tracing::{info, warn};

use crate::api::ConfigUpdate;
use crate::client::HybridClient;
use crate::console::Console;
use crate::probe::{self, SoftPolicy};
use crate::report::{Probe, ProbeReport, RunReport};

pub const BANNER: &str = "🔗 하이브리드 얼굴 분석 시스템 통합 테스트";
pub const DONE: &str = "✨ 하이브리드 통합 테스트 완료!";

/// Knobs for a run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub similarity_threshold: f64,
    pub soft_policy: SoftPolicy,
    /// Also run [`Probe::EXTENDED`] after the core sequence.
    pub extended: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            similarity_threshold: 1.0,
            soft_policy: SoftPolicy::Tolerate,
            extended: false,
        }
    }
}

impl Settings {
    pub fn plan(&self) -> Vec<Probe> {
        let mut plan = Probe::CORE.to_vec();
        if self.extended {
            plan.extend(Probe::EXTENDED);
        }
        plan
    }
}

/// Run every planned probe in order and collect the outcomes.
///
/// A probe that errors is reported and skipped over; the rest still run.
pub async fn run<W: Write>(
    client: &HybridClient,
    settings: &Settings,
    out: &mut Console<W>,
) -> RunReport {
    info!(base = client.base_url(), "starting hybrid integration run");
    out.line(BANNER);
    out.blank();

    let mut report = RunReport::default();
    // restore target for the config probe, taken from the status probe
    let mut observed: Option<ConfigUpdate> = None;

    for (i, step) in settings.plan().into_iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        out.line(format!("=== {} ===", step.title()));

        let result = match step {
            Probe::Status => probe::status(client, out).await.map(|(entry, config)| {
                observed = config.and_then(|c| c.to_update());
                entry
            }),
            Probe::Compare => {
                probe::compare(client, out, settings.similarity_threshold, settings.soft_policy)
                    .await
            }
            Probe::Detect => probe::detect(client, out, settings.soft_policy).await,
            Probe::ConfigChange => {
                let restore = observed.unwrap_or_else(ConfigUpdate::hybrid_default);
                probe::config_change(client, out, restore).await
            }
            Probe::ProviderTest => probe::provider_test(client, out).await,
            Probe::FamilySimilarity => {
                probe::family_similarity(client, out, settings.soft_policy).await
            }
        };

        let entry = result.unwrap_or_else(|e| {
            out.line(format!("❌ 오류: {e}"));
            ProbeReport::errored(step, e.to_string())
        });
        if entry.outcome.is_failure() {
            warn!(probe = %step, outcome = ?entry.outcome, detail = %entry.detail, "probe failed");
        }
        report.push(entry);
        out.flush();
    }

    out.blank();
    out.line(DONE);
    out.flush();
    report
}
