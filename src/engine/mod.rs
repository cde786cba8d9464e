pub mod checksum;
mod classifier;
pub mod compliance;
mod extract;
mod gate;

pub use checksum::{complete_cnpj, complete_cpf};
pub use classifier::{validate_document, validate_document_2026, DocumentClassifier};
pub use compliance::{validate_cnpj, validate_cnpj_alphanumeric, validate_cpf};
pub use extract::{find_documents, DocumentMatch};
pub use gate::{parse_flag, FeatureGate, CNPJ_2026_ENV};
