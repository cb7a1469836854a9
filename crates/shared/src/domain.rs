use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    NeuralNetwork,
    SentenceExtraction,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::NeuralNetwork, Strategy::SentenceExtraction];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::NeuralNetwork => "Neural network",
            Strategy::SentenceExtraction => "Sentence extraction",
        }
    }
}

/// A single summary value as the service returned it.
///
/// The service is loosely typed: keyword abstracts arrive either as a list of
/// phrases or as one newline/asterisk delimited string. Anything else,
/// including an explicit `null`, is kept as `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum AbstractValue {
    Text(String),
    List(Vec<String>),
    Other(Value),
}

impl AbstractValue {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => AbstractValue::Text(text.clone()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(AbstractValue::List)
                .unwrap_or_else(|| AbstractValue::Other(value.clone())),
            other => AbstractValue::Other(other.clone()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AbstractValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyAbstracts {
    pub classic_abstract: Option<AbstractValue>,
    pub keyword_abstract: Option<AbstractValue>,
}

impl StrategyAbstracts {
    fn from_value(value: Option<&Value>) -> Self {
        let field = |name: &str| {
            value
                .and_then(|v| v.get(name))
                .map(AbstractValue::from_value)
        };
        Self {
            classic_abstract: field("classic_abstract"),
            keyword_abstract: field("keyword_abstract"),
        }
    }
}

/// Body of a successful `create-abstract` call.
///
/// Decoding never fails on shape: whatever JSON the service sent is kept
/// as-is and serialized back unchanged, while the typed accessors expose the
/// parts that could be understood.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    url: Option<String>,
    neural_network: StrategyAbstracts,
    sentence_extraction: StrategyAbstracts,
    raw: Value,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }
}

impl AnalysisResult {
    pub fn from_value(raw: Value) -> Self {
        Self {
            url: raw.get("url").and_then(Value::as_str).map(str::to_string),
            neural_network: StrategyAbstracts::from_value(raw.get("neural_network")),
            sentence_extraction: StrategyAbstracts::from_value(raw.get("sentence_extraction")),
            raw,
        }
    }

    /// The analyzed URL, when the service returned it as a string.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn neural_network(&self) -> &StrategyAbstracts {
        &self.neural_network
    }

    pub fn sentence_extraction(&self) -> &StrategyAbstracts {
        &self.sentence_extraction
    }

    pub fn strategy(&self, strategy: Strategy) -> &StrategyAbstracts {
        match strategy {
            Strategy::NeuralNetwork => &self.neural_network,
            Strategy::SentenceExtraction => &self.sentence_extraction,
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl<'de> Deserialize<'de> for AnalysisResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}
