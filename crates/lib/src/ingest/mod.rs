pub mod smart_import;

pub use smart_import::{extract_qa_pairs, run_smart_import};
