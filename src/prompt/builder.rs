use std::io;
use std::path::Path;
use serde::Serialize;
use serde_json::ser::Formatter;
use crate::errors::ChatbenchError;
use crate::faq::FaqData;
use tracing::{debug, warn};

pub const FAQ_PLACEHOLDER: &str = "{faq_data}";

pub const DEFAULT_TEMPLATE: &str = "당신은 슈퍼멤버스 플랫폼 전용 고객지원 AI 챗봇이다.

당신의 역할은 사용자의 질문에 대해 슈퍼멤버스 플랫폼 전용 FAQ 데이터만을 기반으로 정확하고 간결한 응답을 생성하는 것이다.

질문자는 '광고주(소상공인)' 또는 '블로거' 두 유형 중 하나이다.

응답을 생성하기 전, 다음 절차에 따라 판단하라:

[1] 이 질문이 슈퍼멤버스만의 고유한 질문인지 확인하라.
- 슈퍼멤버스의 서비스나 운영 정책과 무관한 일반적인 질문은 답변하지 않는다.
- FAQ JSON에 명시적으로 존재하지 않으면 반드시 [null]로 응답한다.

[2] 질문자가 '광고주'인지 '블로거'인지 문맥을 통해 분류하라.
- '블로거', '포인트', '등급', '리뷰', '캠페인 제안', '앱', '환급' 등의 단어가 포함된 경우: 블로거
- '광고', '매장', '체험단', '방문 인원', '세금계산서', '리뷰 미작성', '광고 해지' 등은 광고주

[3] 질문이 FAQ JSON의 question 필드와 의미적으로 일치하는지 확인하라.
- 핵심 의미가 같아야 일치로 간주한다.
- 의미가 일치하면 해당 answer를 그대로 출력한다.
- 일치하지 않으면 반드시 [null]을 출력한다.

FAQ 데이터:
{faq_data}";

/// Instruction template the FAQ data is embedded into.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self { text: DEFAULT_TEMPLATE.to_string() }
    }
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if !text.contains(FAQ_PLACEHOLDER) {
            warn!("Prompt template has no {} placeholder, appending FAQ block", FAQ_PLACEHOLDER);
            text.push_str("\n\nFAQ 데이터:\n");
            text.push_str(FAQ_PLACEHOLDER);
        }
        Self { text }
    }

    pub async fn from_file(path: &Path) -> Result<Self, ChatbenchError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            ChatbenchError::Config(format!("Failed to read prompt template {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), chars = text.chars().count(), "Loaded prompt template");
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn render(&self, faq: &FaqData) -> String {
        render(&self.text, faq)
    }
}

/// Single-line JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn faq_json(faq: &FaqData) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    faq.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Substitute the FAQ data, as single-line JSON with non-ASCII kept
/// literal, into `template`.
pub fn render(template: &str, faq: &FaqData) -> String {
    let faq_json = faq_json(faq).unwrap_or_else(|_| "{}".to_string());
    template.replace(FAQ_PLACEHOLDER, &faq_json)
}
