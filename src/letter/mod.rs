//! Letter assembler
//!
//! Turns a [`Session`] into an ordered document body:
//! salutation, body paragraphs, optional signature, and a reference
//! footer echoing the raw answers. The result is plain data; layout and
//! serialization live in [`crate::export`].

pub mod templates;

use thiserror::Error;

use crate::wizard::{Section, Session, Variant};
pub use templates::LetterTemplates;

/// Points per inch, for the gaps below
const INCH: f32 = 72.0;

/// Heading of the reference footer
pub const FOOTER_HEADING: &str = "--- 편지 작성 참고 정보 ---";

/// Footer labels in print order
pub const FOOTER_WRITER: &str = "편지를 쓰는 사람";
pub const FOOTER_RECIPIENT: &str = "편지를 받는 사람";
pub const FOOTER_EVENT: &str = "일어난 사건 요약";
pub const FOOTER_EMOTIONS: &str = "등장인물의 감정";
pub const FOOTER_FEELINGS: &str = "나누고자 하는 마음 요약";

#[derive(Error, Debug)]
pub enum LetterError {
    #[error("invalid letter template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render letter text: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Role of a block in the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Salutation,
    Paragraph,
    Signature,
    FooterHeading,
    FooterLine,
}

/// One paragraph-level element of the letter
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
    /// Vertical gap after the block, in points
    pub space_after: f32,
}

impl Block {
    fn new(kind: BlockKind, text: impl Into<String>, space_after: f32) -> Self {
        Self {
            kind,
            text: text.into(),
            space_after,
        }
    }

    /// Salutation and signature are set in bold
    pub fn is_emphasized(&self) -> bool {
        matches!(self.kind, BlockKind::Salutation | BlockKind::Signature)
    }
}

/// Assembled letter, ready for layout
#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub recipient: String,
    pub file_name: String,
    pub blocks: Vec<Block>,
}

impl Letter {
    /// Blocks of one kind, in document order
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }

    /// Body paragraph texts in order
    pub fn paragraphs(&self) -> Vec<&str> {
        self.blocks_of(BlockKind::Paragraph)
            .map(|b| b.text.as_str())
            .collect()
    }
}

/// Builds [`Letter`]s from sessions
pub struct LetterAssembler {
    templates: LetterTemplates,
}

impl LetterAssembler {
    pub fn new() -> Result<Self, LetterError> {
        Ok(Self {
            templates: LetterTemplates::new()?,
        })
    }

    /// Assemble the document body for a session.
    ///
    /// Deterministic: equal sessions produce equal letters.
    pub fn assemble(&self, session: &Session) -> Result<Letter, LetterError> {
        let recipient = session.selected_character().to_string();
        let mut blocks = vec![Block::new(
            BlockKind::Salutation,
            self.templates.salutation(&recipient)?,
            0.3 * INCH,
        )];

        match session.variant() {
            Variant::Short => blocks.extend(free_form_paragraphs(session.letter_content())),
            Variant::Full => blocks.extend(sectioned_paragraphs(session)),
        }

        if session.variant() == Variant::Full {
            let signature = session.sections().writer_name.trim();
            if !signature.is_empty() {
                blocks.push(Block::new(BlockKind::Signature, signature, 0.5 * INCH));
            }
        }

        blocks.push(Block::new(
            BlockKind::FooterHeading,
            FOOTER_HEADING,
            0.15 * INCH,
        ));
        for (label, value) in footer_entries(session) {
            blocks.push(Block::new(
                BlockKind::FooterLine,
                self.templates.footer_line(label, &value)?,
                0.0,
            ));
        }

        tracing::debug!(
            recipient = %recipient,
            blocks = blocks.len(),
            "Assembled letter"
        );

        Ok(Letter {
            file_name: self.templates.file_name(&recipient)?,
            recipient,
            blocks,
        })
    }
}

/// Short flow: one paragraph per line; blank lines become a single space
/// so the gap survives layout.
fn free_form_paragraphs(content: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = content
        .lines()
        .map(|line| {
            let text = if line.trim().is_empty() { " " } else { line };
            Block::new(BlockKind::Paragraph, text, 0.0)
        })
        .collect();
    if let Some(last) = blocks.last_mut() {
        last.space_after = 0.5 * INCH;
    }
    blocks
}

/// Full flow: the five body sections in fixed order, empty ones skipped
fn sectioned_paragraphs(session: &Session) -> Vec<Block> {
    Section::body()
        .iter()
        .filter_map(|section| {
            let text = session.sections().get(*section).trim();
            if text.is_empty() {
                return None;
            }
            let gap = if *section == Section::Closing {
                0.2 * INCH
            } else {
                0.1 * INCH
            };
            Some(Block::new(BlockKind::Paragraph, text, gap))
        })
        .collect()
}

fn footer_entries(session: &Session) -> Vec<(&'static str, String)> {
    let mut entries = Vec::with_capacity(5);
    if session.variant() == Variant::Full {
        entries.push((FOOTER_WRITER, session.writer_character().to_string()));
    }
    let emotions: Vec<String> = session
        .selected_emojis()
        .iter()
        .map(crate::wizard::EmotionTag::display)
        .collect();
    entries.push((FOOTER_RECIPIENT, session.selected_character().to_string()));
    entries.push((FOOTER_EVENT, session.event_description().to_string()));
    entries.push((FOOTER_EMOTIONS, emotions.join(" ")));
    entries.push((FOOTER_FEELINGS, session.shared_feelings().to_string()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{reduce, Action};

    fn apply(session: Session, actions: Vec<Action>) -> Session {
        actions
            .into_iter()
            .fold(session, |s, a| reduce(&s, a).unwrap())
    }

    fn full_session() -> Session {
        apply(
            Session::new(Variant::Full),
            vec![
                Action::SetWriter("나".to_string()),
                Action::SetRecipient("아랑".to_string()),
                Action::SetEvent("낱말 카드".to_string()),
                Action::ToggleEmotion("행복하다".to_string()),
                Action::ToggleEmotion("미안하다".to_string()),
                Action::SetSharedFeelings("칭찬".to_string()),
                Action::SetSection(Section::Intro, "안녕, 아랑아.".to_string()),
                Action::SetSection(Section::Thoughts, "멋졌어.".to_string()),
                Action::SetSection(Section::Closing, "잘 지내.".to_string()),
                Action::SetSection(Section::WriterName, "OO이가".to_string()),
            ],
        )
    }

    #[test]
    fn test_full_letter_block_order() {
        let letter = LetterAssembler::new()
            .unwrap()
            .assemble(&full_session())
            .unwrap();
        let kinds: Vec<BlockKind> = letter.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Salutation,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Signature,
                BlockKind::FooterHeading,
                BlockKind::FooterLine,
                BlockKind::FooterLine,
                BlockKind::FooterLine,
                BlockKind::FooterLine,
                BlockKind::FooterLine,
            ]
        );
        assert_eq!(letter.blocks[0].text, "아랑에게");
        assert_eq!(letter.file_name, "아랑_편지.pdf");
    }

    #[test]
    fn test_full_letter_skips_empty_sections() {
        let letter = LetterAssembler::new()
            .unwrap()
            .assemble(&full_session())
            .unwrap();
        assert_eq!(letter.paragraphs(), vec!["안녕, 아랑아.", "멋졌어.", "잘 지내."]);
        // closing gets the wider gap
        let closing = letter.blocks_of(BlockKind::Paragraph).last().unwrap();
        assert!((closing.space_after - 14.4).abs() < 1e-3);
    }

    #[test]
    fn test_footer_lists_answers_with_space_joined_emotions() {
        let letter = LetterAssembler::new()
            .unwrap()
            .assemble(&full_session())
            .unwrap();
        let footer: Vec<&str> = letter
            .blocks_of(BlockKind::FooterLine)
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(
            footer,
            vec![
                "편지를 쓰는 사람: 나",
                "편지를 받는 사람: 아랑",
                "일어난 사건 요약: 낱말 카드",
                "등장인물의 감정: 행복하다 😊 미안하다 🙏",
                "나누고자 하는 마음 요약: 칭찬",
            ]
        );
    }

    #[test]
    fn test_missing_signature_is_omitted() {
        let session = reduce(
            &full_session(),
            Action::SetSection(Section::WriterName, "  ".to_string()),
        )
        .unwrap();
        let letter = LetterAssembler::new().unwrap().assemble(&session).unwrap();
        assert_eq!(letter.blocks_of(BlockKind::Signature).count(), 0);
    }

    #[test]
    fn test_short_letter_splits_lines_and_keeps_blank_lines() {
        let session = apply(
            Session::new(Variant::Short),
            vec![
                Action::SetRecipient("재현".to_string()),
                Action::SetEvent("테스트".to_string()),
                Action::SetLetterContent("안녕\n\n잘 지내".to_string()),
            ],
        );
        let letter = LetterAssembler::new().unwrap().assemble(&session).unwrap();
        assert_eq!(letter.paragraphs(), vec!["안녕", " ", "잘 지내"]);
        assert_eq!(letter.blocks_of(BlockKind::Signature).count(), 0);
        // short flow has no writer line
        assert!(letter
            .blocks_of(BlockKind::FooterLine)
            .all(|b| !b.text.starts_with(FOOTER_WRITER)));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let assembler = LetterAssembler::new().unwrap();
        let a = assembler.assemble(&full_session()).unwrap();
        let b = assembler.assemble(&full_session()).unwrap();
        assert_eq!(a, b);
    }
}
