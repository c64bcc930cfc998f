//! Test fixtures and helpers.

use mythologise_core::{derive_parts, DerivationOptions, HandleParts, DENYLIST};

use crate::vectors::UNIT_TEST_SECRET;

/// A secret plus options, for deriving many handles the same way.
pub struct HandleFixture {
    pub secret: Vec<u8>,
    pub options: DerivationOptions,
}

impl HandleFixture {
    /// The unit-test secret with default options.
    pub fn new() -> Self {
        Self::with_options(DerivationOptions::default())
    }

    pub fn legacy() -> Self {
        Self::with_options(DerivationOptions::legacy())
    }

    pub fn with_options(options: DerivationOptions) -> Self {
        Self {
            secret: UNIT_TEST_SECRET.as_bytes().to_vec(),
            options,
        }
    }

    pub fn handle(&self, stable_id: &str) -> String {
        self.parts(stable_id).render(&self.options.separator)
    }

    pub fn parts(&self, stable_id: &str) -> HandleParts {
        derive_parts(stable_id, &self.secret, &self.options, DENYLIST)
    }

    /// Deterministic ids `user-0000`, `user-0001`, ...
    pub fn sequential_ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("user-{i:04}")).collect()
    }
}

impl Default for HandleFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::UID_1;

    #[test]
    fn test_fixture_matches_vectors() {
        assert_eq!(
            HandleFixture::new().handle(UID_1),
            "spéir-mhaorga-shárláidir-6jn3v2cd6xqq"
        );
        assert_eq!(HandleFixture::legacy().handle(UID_1), "manannán-fionnuar-6jn3");
    }

    #[test]
    fn test_sequential_ids() {
        let ids = HandleFixture::sequential_ids(3);
        assert_eq!(ids, vec!["user-0000", "user-0001", "user-0002"]);
    }
}
