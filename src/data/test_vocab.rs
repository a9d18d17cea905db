// HashMap-backed vocabulary used by the data-layer tests.
// ID 0 is the unknown sentinel; listed words get 1, 2, 3, ...

use std::collections::HashMap;

use crate::domain::{sample::TokenId, traits::Vocabulary};

pub struct TestVocab {
    ids: HashMap<String, TokenId>,
}

impl TestVocab {
    pub fn new(words: &[&str]) -> Self {
        let ids = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.to_string(), i as TokenId + 1))
            .collect();
        Self { ids }
    }
}

impl Vocabulary for TestVocab {
    fn lookup(&self, token: &str) -> TokenId {
        self.ids.get(token).copied().unwrap_or(0)
    }

    fn unknown_id(&self) -> TokenId {
        0
    }
}
