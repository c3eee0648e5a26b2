//! One stage per level of the tree, outermost first

mod document;
mod expression;
mod lexeme;
mod paragraph;
mod sentence;
mod symbol;
mod word;

pub use document::DocumentStage;
pub use expression::ExpressionStage;
pub use lexeme::LexemeStage;
pub use paragraph::ParagraphStage;
pub use sentence::SentenceStage;
pub use symbol::SymbolStage;
pub use word::WordStage;
