#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub rule_id: String,
    pub status: RenderableStatus,
    pub matches: Vec<String>,
    pub rationale: String,
    pub suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableScan {
    pub overall_score: u32,
    pub pass_count: u32,
    pub fail_count: u32,
    /// Rules whose judgment call failed and were folded into fail results.
    pub judge_failures: u32,
    pub results: Vec<RenderableResult>,
}
