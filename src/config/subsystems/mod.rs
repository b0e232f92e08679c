pub mod parser;
pub mod analysis;

pub use parser::ParserConfig;
pub use analysis::AnalysisConfig;
