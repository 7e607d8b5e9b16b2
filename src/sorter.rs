use serde::Serialize;

/// Matched names in byte-wise ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<String>);

impl ResultSet {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sort accumulated matches into their published order.
pub fn finalize(mut identifiers: Vec<String>) -> ResultSet {
    identifiers.sort();
    ResultSet(identifiers)
}

/// Every adjacent pair is in byte-wise order.
pub fn is_ordered(identifiers: &[String]) -> bool {
    identifiers.windows(2).all(|w| w[0] <= w[1])
}
