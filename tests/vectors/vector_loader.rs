/// Codec test vector loader
///
/// Vectors live in `codec_vectors.json`: a list mixing comment strings and
/// encode/decode cases with their options.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Entry {
    /// A comment line (string)
    Comment(String),
    Case(Vector),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Vector {
    Encode {
        input: String,
        #[serde(default)]
        safe: String,
        #[serde(default)]
        protected: String,
        #[serde(default)]
        qs: bool,
        #[serde(default = "default_requote")]
        requote: bool,
        expected: String,
    },
    Decode {
        input: String,
        #[serde(default)]
        ignore: String,
        #[serde(default, rename = "unsafe")]
        unsafe_chars: String,
        #[serde(default)]
        qs: bool,
        expected: String,
    },
}

fn default_requote() -> bool {
    true
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct VectorFailure {
    pub case_num: usize,
    pub vector: Vector,
    pub actual: String,
}

pub fn load_vectors() -> Vec<Vector> {
    let entries: Vec<Entry> = serde_json::from_str(include_str!("codec_vectors.json"))
        .expect("codec_vectors.json should be valid");

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Comment(_) => None,
            Entry::Case(vector) => Some(vector),
        })
        .collect()
}
