//! Ordered ledger of probe outcomes.

use std::fmt;

/// One self-contained request/response check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Status,
    Compare,
    Detect,
    ConfigChange,
    ProviderTest,
    FamilySimilarity,
}

impl Probe {
    /// Core sequence, always run in this order.
    pub const CORE: [Probe; 4] = [
        Probe::Status,
        Probe::Compare,
        Probe::Detect,
        Probe::ConfigChange,
    ];

    pub const EXTENDED: [Probe; 2] = [Probe::ProviderTest, Probe::FamilySimilarity];

    pub fn name(self) -> &'static str {
        match self {
            Probe::Status => "status",
            Probe::Compare => "compare-faces",
            Probe::Detect => "detect-faces",
            Probe::ConfigChange => "config-change",
            Probe::ProviderTest => "provider-test",
            Probe::FamilySimilarity => "family-similarity",
        }
    }

    /// Section header printed before the probe runs.
    pub fn title(self) -> &'static str {
        match self {
            Probe::Status => "하이브리드 상태 테스트",
            Probe::Compare => "하이브리드 얼굴 비교 테스트",
            Probe::Detect => "하이브리드 얼굴 감지 테스트",
            Probe::ConfigChange => "공급자 설정 변경 테스트",
            Probe::ProviderTest => "공급자 점검 테스트",
            Probe::FamilySimilarity => "가족 유사도 테스트",
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// HTTP 200 with an empty result.
    Soft,
    Failed,
    /// Transport fault or unreadable response.
    Errored,
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::Failed | Outcome::Errored)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub probe: Probe,
    pub outcome: Outcome,
    pub detail: String,
}

impl ProbeReport {
    pub fn new(probe: Probe, outcome: Outcome, detail: impl Into<String>) -> Self {
        Self {
            probe,
            outcome,
            detail: detail.into(),
        }
    }

    pub fn passed(probe: Probe, detail: impl Into<String>) -> Self {
        Self::new(probe, Outcome::Passed, detail)
    }

    pub fn failed(probe: Probe, detail: impl Into<String>) -> Self {
        Self::new(probe, Outcome::Failed, detail)
    }

    pub fn errored(probe: Probe, detail: impl Into<String>) -> Self {
        Self::new(probe, Outcome::Errored, detail)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    entries: Vec<ProbeReport>,
}

impl RunReport {
    pub fn push(&mut self, entry: ProbeReport) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ProbeReport] {
        &self.entries
    }

    pub fn get(&self, probe: Probe) -> Option<&ProbeReport> {
        self.entries.iter().find(|e| e.probe == probe)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_failure())
    }

    /// `결과: 성공 N, 경고 M, 실패 K`, where failures include errors.
    pub fn summary(&self) -> String {
        format!(
            "결과: 성공 {}, 경고 {}, 실패 {}",
            self.count(Outcome::Passed),
            self.count(Outcome::Soft),
            self.count(Outcome::Failed) + self.count(Outcome::Errored),
        )
    }
}
