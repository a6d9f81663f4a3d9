use crate::models::{DocumentType, UiState, MAX_TEXT_CHARS};
use crate::services::renderer::{render, Block, Section};
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// What the output panel shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPanel {
    Placeholder,
    Loading,
    Sections(Vec<Section>),
    Error(String),
}

impl From<&UiState> for OutputPanel {
    fn from(state: &UiState) -> Self {
        match state {
            UiState::Idle => OutputPanel::Placeholder,
            UiState::Loading => OutputPanel::Loading,
            UiState::Success(raw) => {
                let sections = render(raw);
                if sections.is_empty() {
                    OutputPanel::Placeholder
                } else {
                    OutputPanel::Sections(sections)
                }
            }
            UiState::Error(message) => OutputPanel::Error(message.clone()),
        }
    }
}

pub struct SelectOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub options: Vec<SelectOption>,
    pub text: String,
    pub text_chars: usize,
    pub max_chars: usize,
    pub busy: bool,
    pub panel: OutputPanel,
}

impl IndexTemplate {
    pub fn new(state: &UiState, document_type: DocumentType, text: String) -> Self {
        let options = DocumentType::ALL
            .iter()
            .map(|doc_type| SelectOption {
                label: doc_type.label(),
                selected: *doc_type == document_type,
            })
            .collect();

        Self {
            options,
            text_chars: text.chars().count(),
            text,
            max_chars: MAX_TEXT_CHARS,
            busy: state.is_loading(),
            panel: OutputPanel::from(state),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Simplifying..."
        } else {
            "Simplify Text"
        }
    }
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let ui_state = state.workbench.state();
    IndexTemplate::new(&ui_state, DocumentType::default(), String::new())
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "legal-simplifier",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_placeholder() {
        assert_eq!(OutputPanel::from(&UiState::Idle), OutputPanel::Placeholder);
    }

    #[test]
    fn success_without_headings_shows_placeholder() {
        let state = UiState::Success("no headings here".to_string());
        assert_eq!(OutputPanel::from(&state), OutputPanel::Placeholder);
    }

    #[test]
    fn success_renders_sections() {
        let state = UiState::Success("### Summary\nShort.".to_string());
        match OutputPanel::from(&state) {
            OutputPanel::Sections(sections) => {
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].blocks, vec![Block::Paragraph("Short.".to_string())]);
            }
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[test]
    fn loading_page_disables_submit() {
        let page = IndexTemplate::new(&UiState::Loading, DocumentType::Nda, String::new());
        assert!(page.busy);
        assert_eq!(page.submit_label(), "Simplifying...");

        let html = page.render().unwrap();
        assert!(html.contains("Analyzing your document..."));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn busy_page_with_text_keeps_form_locked() {
        let page = IndexTemplate::new(&UiState::Loading, DocumentType::Nda, "Clause".to_string());
        let html = page.render().unwrap();
        assert!(html.contains("data-busy=\"true\""));
        assert!(html.contains(">Clause</textarea>"));

        let idle = IndexTemplate::new(&UiState::Idle, DocumentType::Nda, "Clause".to_string())
            .render()
            .unwrap();
        assert!(idle.contains("data-busy=\"false\""));
    }

    #[test]
    fn selected_document_type_is_marked() {
        let page = IndexTemplate::new(&UiState::Idle, DocumentType::Nda, String::new());
        let selected: Vec<&str> = page
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(selected, vec!["NDA"]);
        assert_eq!(page.submit_label(), "Simplify Text");
    }

    #[test]
    fn rendered_output_is_html_escaped() {
        let state = UiState::Success("### <script>alert(1)</script>\n* <b>risk</b>".to_string());
        let html = IndexTemplate::new(&state, DocumentType::Other, String::new())
            .render()
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;b&gt;risk"));
    }

    #[test]
    fn each_bullet_renders_as_its_own_list() {
        let state = UiState::Success("### Risks\n* one\n* two".to_string());
        let html = IndexTemplate::new(&state, DocumentType::Other, String::new())
            .render()
            .unwrap();
        assert_eq!(html.matches("<ul class=\"bullet\">").count(), 2);
    }
}
