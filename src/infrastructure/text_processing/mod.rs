mod block_parser;
mod markdown_cleaner;
mod reference_stripper;

pub use block_parser::{MAX_BLOCKS, join_wrapped_lines, parse_blocks};
pub use markdown_cleaner::clean_markdown;
pub use reference_stripper::strip_references;
