//! Embedded wizard content: characters, emotions, checklist copy
//!
//! Everything the student picks from is fixed at compile time. The lists
//! follow the picture book 「까만 달걀」.

use serde::{Deserialize, Serialize};

/// Characters that can write the letter (the "me" of step 1)
pub const WRITER_CHARACTERS: &[&str] = &[
    "나",
    "아랑이",
    "아랑이의 어머니",
    "재현",
    "재현이의 아버지",
    "성구",
    "달이",
    "운철이",
    "달이의 아버지",
];

/// Characters that can receive the letter.
/// "달이의 아버지" is only offered as a writer.
pub const RECIPIENT_CHARACTERS: &[&str] = &[
    "아랑",
    "아랑이의 어머니",
    "재현",
    "재현이의 아버지",
    "성구",
    "달이",
    "운철이",
];

/// An emotion the student can attach to the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emotion {
    pub label: &'static str,
    pub glyph: &'static str,
}

const fn emotion(label: &'static str, glyph: &'static str) -> Emotion {
    Emotion { label, glyph }
}

/// All selectable emotions in display order
pub const EMOTIONS: &[Emotion] = &[
    emotion("무섭다", "😨"),
    emotion("슬프다", "😢"),
    emotion("외롭다", "😔"),
    emotion("짜증나다", "😤"),
    emotion("화나다", "😡"),
    emotion("신나다", "🤩"),
    emotion("행복하다", "😊"),
    emotion("당황하다", "😳"),
    emotion("미안하다", "🙏"),
    emotion("창피하다", "😳"),
    emotion("억울하다", "😩"),
    emotion("즐겁다", "😄"),
    emotion("답답하다", "😐"),
    emotion("걱정되다", "😟"),
    emotion("설레다", "💖"),
    emotion("샘나다", "😒"),
    emotion("실망하다", "😞"),
    emotion("울고싶다", "😭"),
    emotion("부끄럽다", "😳"),
    emotion("재미있다", "😂"),
    emotion("편안하다", "😌"),
    emotion("기쁘다", "🥳"),
    emotion("얄밉다", "😠"),
    emotion("속상하다", "💔"),
    emotion("뿌듯하다", "👍"),
    emotion("우울하다", "😔"),
    emotion("서운하다", "😔"),
    emotion("만족하다", "😌"),
    emotion("불안하다", "😬"),
    emotion("놀라다", "😲"),
    emotion("쓸쓸하다", "🍂"),
    emotion("신경질나다", "😠"),
    emotion("아쉽다", "😟"),
    emotion("약오르다", "😤"),
    emotion("후회되다", "🤦‍♀️"),
];

impl Emotion {
    /// Look up an emotion by its label
    pub fn find(label: &str) -> Option<Emotion> {
        EMOTIONS.iter().copied().find(|e| e.label == label)
    }

    /// Position in [`EMOTIONS`]
    pub fn index_of(label: &str) -> Option<usize> {
        EMOTIONS.iter().position(|e| e.label == label)
    }

    /// "label glyph", as shown in the picker and the PDF footer
    pub fn display(&self) -> String {
        format!("{} {}", self.label, self.glyph)
    }
}

/// A selected emotion stored in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTag {
    pub label: String,
    pub glyph: String,
}

impl EmotionTag {
    pub fn display(&self) -> String {
        format!("{} {}", self.label, self.glyph)
    }
}

impl From<Emotion> for EmotionTag {
    fn from(e: Emotion) -> Self {
        Self {
            label: e.label.to_string(),
            glyph: e.glyph.to_string(),
        }
    }
}

/// Placeholder copy for the free-text fields
pub const EVENT_PLACEHOLDER: &str = "예: 아랑이가 낱말 카드를 만들어 엄마에게 한국말을 알려줬을 때";
pub const SHARED_FEELINGS_PLACEHOLDER: &str =
    "예: 아랑이가 엄마를 향한 자신의 마음을 깨닫고 한국말을 가르쳐준 행동에 잘했다고 칭찬을 해주고 싶어요.";
pub const WRITER_NAME_PLACEHOLDER: &str = "예: OO이가,OOO 드림";

/// Scaffold the short flow pre-fills the letter with
pub const LETTER_TEMPLATE: &str = "첫인사를 써 보세요.

일어난 사건을 자세히 써 보세요.

사건에 대한 나의 생각이나 행동을 써 보세요.

나누려는 마음을 써 보세요.

끝인사를 써 보세요.";

/// Shown after the save action; values already live in the session
pub const SAVED_MESSAGE: &str =
    "편지 내용이 앱 내에 임시 저장되었습니다. (앱을 닫으면 내용이 사라질 수 있습니다.)";

/// Shown instead of the export control while any check is not "예"
pub const CHECKS_PENDING_MESSAGE: &str =
    "답변한 내용을 참고해 글을 고쳐 써 봅시다. 모든 점검 항목을 '예'로 선택해야 PDF를 출력할 수 있습니다.";

/// Shown instead of the export control while required fields are empty
pub const INCOMPLETE_MESSAGE: &str =
    "PDF 출력을 위해 모든 필수 항목을 작성하고 점검 사항을 확인해주세요.";

/// Shown in the short flow until the letter scaffold has been edited
pub const UNTOUCHED_LETTER_MESSAGE: &str = "편지 내용을 직접 작성하면 PDF 출력 버튼이 나타납니다.";
