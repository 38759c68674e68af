use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ModelDetails {
    pub key: &'static str,
    pub name: &'static str,
    pub tokens: u32,
    pub developer: &'static str,
}

pub const SUPPORTED_MODELS: &[ModelDetails] = &[
    ModelDetails {
        key: "llama3-8b-8192",
        name: "LLaMA3-8b-8192",
        tokens: 8192,
        developer: "Meta",
    },
    ModelDetails {
        key: "mixtral-8x7b-32768",
        name: "Mixtral-8x7b-Instruct-v0.1",
        tokens: 32768,
        developer: "Mistral",
    },
];

pub fn find_model(key: &str) -> Option<&'static ModelDetails> {
    SUPPORTED_MODELS.iter().find(|m| m.key == key)
}
