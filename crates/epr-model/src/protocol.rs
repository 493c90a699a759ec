//! Clinical protocol records.

use serde::{Deserialize, Serialize};

/// Shown in place of a missing protocol attribute.
pub const MISSING_VALUE: &str = "N/A";

/// Read-only view over one entry of a protocol document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    pub condition_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    /// Number of entries in `steps`; zero when absent or not a list.
    pub step_count: usize,
}

impl ProtocolRecord {
    pub fn condition_id_or_default(&self) -> &str {
        self.condition_id.as_deref().unwrap_or(MISSING_VALUE)
    }

    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_VALUE)
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(MISSING_VALUE)
    }
}

/// All protocols of a document, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolCatalog {
    pub protocols: Vec<ProtocolRecord>,
}

impl ProtocolCatalog {
    pub fn new(protocols: Vec<ProtocolRecord>) -> Self {
        Self { protocols }
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    pub fn total_steps(&self) -> usize {
        self.protocols.iter().map(|protocol| protocol.step_count).sum()
    }
}
