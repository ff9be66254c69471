//! `.dcr` container format: header, JSON template payload, integrity hash.

use sha2::{Digest, Sha256};

use dcr_core::DcrGraph;

use crate::template::{Template, TemplateError};

/// Magic bytes: "DCR\0"
const DCR_MAGIC: [u8; 4] = [0x44, 0x43, 0x52, 0x00];

/// Current version.
const VERSION_MAJOR: u8 = 0;
const VERSION_MINOR: u8 = 1;

/// Header size (magic + version + flags + reserved + counts + payload_len).
const HEADER_SIZE: usize = 4 + 1 + 1 + 1 + 1 + 4 + 4 + 4; // 20 bytes

/// SHA-256 hash size.
const HASH_SIZE: usize = 32;

/// A `.dcr` file: header plus the graph it stores.
pub struct DcrFile {
    pub graph: DcrGraph,
}

impl DcrFile {
    /// Create a new `.dcr` file wrapper around a graph.
    pub fn new(graph: DcrGraph) -> Self {
        Self { graph }
    }

    /// Serialize to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TemplateError> {
        let template = Template::from_graph(&self.graph);
        let json = serde_json::to_vec(&template)
            .map_err(|e| TemplateError::Serialization(e.to_string()))?;

        let event_count = self.graph.events().len() as u32;
        let constraint_count = self.graph.constraint_count() as u32;
        let payload_len = json.len() as u32;

        let mut buf = Vec::with_capacity(HEADER_SIZE + json.len() + HASH_SIZE);

        // Magic
        buf.extend_from_slice(&DCR_MAGIC);
        // Version
        buf.push(VERSION_MAJOR);
        buf.push(VERSION_MINOR);
        // Flags (reserved for future use)
        buf.push(0);
        // Reserved
        buf.push(0);
        // Counts
        buf.extend_from_slice(&event_count.to_le_bytes());
        buf.extend_from_slice(&constraint_count.to_le_bytes());
        // Payload length
        buf.extend_from_slice(&payload_len.to_le_bytes());
        // JSON payload
        buf.extend_from_slice(&json);

        // SHA-256 of everything so far
        let mut hasher = Sha256::new();
        hasher.update(&buf);
        let hash = hasher.finalize();
        buf.extend_from_slice(&hash);

        Ok(buf)
    }

    /// Deserialize from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TemplateError> {
        if data.len() < HEADER_SIZE + HASH_SIZE {
            return Err(TemplateError::TooShort {
                expected: HEADER_SIZE + HASH_SIZE,
                actual: data.len(),
            });
        }

        if data[0..4] != DCR_MAGIC {
            return Err(TemplateError::InvalidMagic);
        }

        let major = data[4];
        let minor = data[5];
        if major != VERSION_MAJOR {
            return Err(TemplateError::UnsupportedVersion { major, minor });
        }

        let event_count = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        let constraint_count = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);
        let payload_len = u32::from_le_bytes([data[16], data[17], data[18], data[19]]) as usize;

        let expected_total = HEADER_SIZE + payload_len + HASH_SIZE;
        if data.len() < expected_total {
            return Err(TemplateError::TooShort {
                expected: expected_total,
                actual: data.len(),
            });
        }

        let payload_end = HEADER_SIZE + payload_len;
        let stored_hash = &data[payload_end..payload_end + HASH_SIZE];

        let mut hasher = Sha256::new();
        hasher.update(&data[..payload_end]);
        let computed_hash = hasher.finalize();

        if computed_hash.as_slice() != stored_hash {
            return Err(TemplateError::IntegrityFailed {
                expected: hex_encode(stored_hash),
                actual: hex_encode(computed_hash.as_slice()),
            });
        }

        let template: Template = serde_json::from_slice(&data[HEADER_SIZE..payload_end])
            .map_err(|e| TemplateError::Deserialization(e.to_string()))?;
        let graph = template.build()?;

        if graph.events().len() != event_count as usize {
            return Err(TemplateError::Deserialization(format!(
                "event count mismatch: header says {event_count}, payload has {}",
                graph.events().len()
            )));
        }
        if graph.constraint_count() != constraint_count as usize {
            return Err(TemplateError::Deserialization(format!(
                "constraint count mismatch: header says {constraint_count}, payload has {}",
                graph.constraint_count()
            )));
        }

        Ok(Self { graph })
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
