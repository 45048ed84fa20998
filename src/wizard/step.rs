//! Closed step set and the per-variant transition table

use serde::{Deserialize, Serialize};

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Who is writing the letter
    Writer,
    /// Which character receives it
    Recipient,
    /// What happened, and how the character felt
    Event,
    /// What the student wants to share
    Feelings,
    /// Free-form letter in a single field (short flow)
    Letter,
    /// Sectioned letter with self-review checklist (full flow)
    Compose,
}

impl Step {
    /// Title used by the navigation bar and step header
    pub fn title(&self) -> &'static str {
        match self {
            Step::Writer => "편지를 쓰는 '나'는 누구인가요?",
            Step::Recipient => "마음을 전하고 싶은 등장인물을 선택해요",
            Step::Event => "일어난 사건을 떠올려요",
            Step::Feelings => "나누려는 마음을 생각해요",
            Step::Letter | Step::Compose => "나누려는 마음을 담아 글을 써보세요",
        }
    }

    /// Short instruction printed under the step header
    pub fn instruction(&self) -> &'static str {
        match self {
            Step::Writer => "편지를 쓰는 주체를 선택하세요.",
            Step::Recipient => "편지를 받을 대상(등장인물)을 선택하세요.",
            Step::Event => "등장인물이 겪은 상황이나 사건을 떠올려 적어주세요.",
            Step::Feelings => {
                "등장인물에게 어떤 마음을 나누고자 하는지, 어떤 마음을 전달하고 싶은지 작성해 보세요."
            }
            Step::Letter | Step::Compose => "나누려는 마음을 담아 편지를 써 보세요.",
        }
    }

    /// Whether this step carries the export control
    pub fn is_final(&self) -> bool {
        matches!(self, Step::Letter | Step::Compose)
    }
}

/// Which flow the wizard runs
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Four steps ending in one free-form letter field
    Short,
    /// Five steps ending in a sectioned letter and checklist
    #[default]
    Full,
}

const SHORT_STEPS: &[Step] = &[Step::Recipient, Step::Event, Step::Feelings, Step::Letter];

const FULL_STEPS: &[Step] = &[
    Step::Writer,
    Step::Recipient,
    Step::Event,
    Step::Feelings,
    Step::Compose,
];

impl Variant {
    /// Steps in order; index 0 is step 1
    pub fn steps(&self) -> &'static [Step] {
        match self {
            Variant::Short => SHORT_STEPS,
            Variant::Full => FULL_STEPS,
        }
    }

    /// Number of steps (N)
    pub fn step_count(&self) -> usize {
        self.steps().len()
    }

    /// Step at a 1-based index
    pub fn step_at(&self, index: usize) -> Option<Step> {
        index
            .checked_sub(1)
            .and_then(|i| self.steps().get(i))
            .copied()
    }

    /// 1-based index of a step, if the variant has it
    pub fn index_of(&self, step: Step) -> Option<usize> {
        self.steps().iter().position(|s| *s == step).map(|i| i + 1)
    }

    /// Whether a 1-based index names a defined step
    pub fn contains_index(&self, index: usize) -> bool {
        (1..=self.step_count()).contains(&index)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Short => "short (4 steps)",
            Variant::Full => "full (5 steps)",
        }
    }
}
