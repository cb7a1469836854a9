//! Pure mapping from an [`AnalysisResult`] to what the UI shows.

use shared::domain::{AbstractValue, AnalysisResult, Strategy, StrategyAbstracts};

pub const NO_DATA: &str = "No data";
pub const BULLET: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    Text(String),
    /// One entry per list element, already prefixed with the bullet glyph.
    Bullets(Vec<String>),
    /// A delimited keyword string split at its line breaks.
    Lines(Vec<String>),
    NoData,
}

impl FieldView {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            FieldView::Text(text) => vec![text.as_str()],
            FieldView::Bullets(items) | FieldView::Lines(items) => {
                items.iter().map(String::as_str).collect()
            }
            FieldView::NoData => vec![NO_DATA],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldView::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyView {
    pub strategy: Strategy,
    pub classic: FieldView,
    pub keywords: FieldView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub source: Option<LinkView>,
    pub neural_network: StrategyView,
    pub sentence_extraction: StrategyView,
}

impl ResultsView {
    pub fn sections(&self) -> [&StrategyView; 2] {
        [&self.neural_network, &self.sentence_extraction]
    }
}

pub fn render_results(result: &AnalysisResult) -> ResultsView {
    ResultsView {
        source: result.url().map(|url| LinkView {
            href: url.to_string(),
            text: url.to_string(),
        }),
        neural_network: render_strategy(Strategy::NeuralNetwork, result.neural_network()),
        sentence_extraction: render_strategy(
            Strategy::SentenceExtraction,
            result.sentence_extraction(),
        ),
    }
}

fn render_strategy(strategy: Strategy, abstracts: &StrategyAbstracts) -> StrategyView {
    StrategyView {
        strategy,
        classic: render_classic(abstracts.classic_abstract.as_ref()),
        keywords: render_keywords(abstracts.keyword_abstract.as_ref()),
    }
}

fn render_classic(value: Option<&AbstractValue>) -> FieldView {
    match value.and_then(AbstractValue::as_text) {
        Some(text) if !text.is_empty() => FieldView::Text(text.to_string()),
        _ => FieldView::NoData,
    }
}

fn render_keywords(value: Option<&AbstractValue>) -> FieldView {
    match value {
        Some(AbstractValue::List(items)) if !items.is_empty() => FieldView::Bullets(
            items
                .iter()
                .map(|item| format!("{BULLET} {item}"))
                .collect(),
        ),
        Some(AbstractValue::Text(text)) if !text.is_empty() => FieldView::Lines(
            text.replace('*', &BULLET.to_string())
                .split('\n')
                .map(str::to_string)
                .collect(),
        ),
        _ => FieldView::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> AnalysisResult {
        serde_json::from_value(value).expect("decode")
    }

    #[test]
    fn renders_both_strategies() {
        let view = render_results(&decode(json!({
            "url": "https://x",
            "neural_network": {"classic_abstract": "A", "keyword_abstract": ["k1", "k2"]},
            "sentence_extraction": {"classic_abstract": "B", "keyword_abstract": "k3\n*k4"}
        })));

        let link = view.source.expect("link");
        assert_eq!(link.text, "https://x");
        assert_eq!(link.href, "https://x");
        assert_eq!(view.neural_network.classic, FieldView::Text("A".into()));
        assert_eq!(
            view.neural_network.keywords,
            FieldView::Bullets(vec!["• k1".into(), "• k2".into()])
        );
        assert_eq!(view.sentence_extraction.classic, FieldView::Text("B".into()));
        assert_eq!(
            view.sentence_extraction.keywords,
            FieldView::Lines(vec!["k3".into(), "•k4".into()])
        );
    }

    #[test]
    fn missing_classic_renders_placeholder() {
        let view = render_results(&decode(json!({
            "url": "https://x",
            "neural_network": {"keyword_abstract": "k"},
            "sentence_extraction": {}
        })));

        assert_eq!(view.neural_network.classic, FieldView::NoData);
        assert_eq!(view.neural_network.classic.lines(), vec![NO_DATA]);
        assert_eq!(view.sentence_extraction.keywords, FieldView::NoData);
    }

    #[test]
    fn wrong_types_and_empty_values_render_placeholder() {
        let view = render_results(&decode(json!({
            "neural_network": {"classic_abstract": ["not", "prose"], "keyword_abstract": 7},
            "sentence_extraction": {"classic_abstract": "", "keyword_abstract": []}
        })));

        assert_eq!(view.source, None);
        for section in view.sections() {
            assert!(section.classic.is_empty(), "{:?}", section.strategy);
            assert!(section.keywords.is_empty(), "{:?}", section.strategy);
        }
    }

    #[test]
    fn null_and_non_string_values_render_placeholder() {
        let view = render_results(&decode(json!({
            "url": 42,
            "neural_network": {"classic_abstract": null, "keyword_abstract": null},
            "sentence_extraction": {"classic_abstract": "B", "keyword_abstract": ["k", 1]}
        })));

        assert_eq!(view.source, None);
        assert_eq!(view.neural_network.classic, FieldView::NoData);
        assert_eq!(view.neural_network.keywords, FieldView::NoData);
        assert_eq!(view.sentence_extraction.classic, FieldView::Text("B".into()));
        assert_eq!(view.sentence_extraction.keywords, FieldView::NoData);
    }

    #[test]
    fn link_uses_returned_url_verbatim() {
        let view = render_results(&decode(json!({"url": "https://example.com/a b?q=1"})));
        assert_eq!(view.source.expect("link").href, "https://example.com/a b?q=1");
    }
}
