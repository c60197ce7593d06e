// Lexical scanning: longest-match marker detection, marker/stopword
// removal, and the token counting that produces weight fields.

pub mod scanner;
pub mod strip;
pub mod tokens;
