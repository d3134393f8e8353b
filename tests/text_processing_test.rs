use scriptorium::domain::ContentBlock;
use scriptorium::infrastructure::text_processing::{
    MAX_BLOCKS, clean_markdown, join_wrapped_lines, parse_blocks, strip_references,
};

mod block_parser {
    use super::*;

    #[test]
    fn given_soft_wrapped_paragraph_when_joining_then_single_newlines_become_spaces() {
        let joined = join_wrapped_lines("first line\nsecond line\n\nnext paragraph");
        assert_eq!(joined, "first line second line\n\nnext paragraph");
    }

    #[test]
    fn given_windows_line_endings_when_joining_then_normalized_first() {
        let joined = join_wrapped_lines("one\r\ntwo\r\n\r\nthree");
        assert_eq!(joined, "one two\n\nthree");
    }

    #[test]
    fn given_marker_prefixes_when_parsing_then_longest_marker_wins() {
        let blocks = parse_blocks("### Deep\n\n## Mid\n\n# Top");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Subsubheading {
                    text: "Deep".to_string(),
                    bold: true
                },
                ContentBlock::Subheading {
                    text: "Mid".to_string(),
                    bold: true
                },
                ContentBlock::Heading {
                    text: "Top".to_string(),
                    bold: true
                },
            ]
        );
    }

    #[test]
    fn given_star_and_dash_bullets_when_parsing_then_both_classify_as_bullets() {
        let blocks = parse_blocks("* first point\n\n- second point");
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Bullet {
                    text: "first point".to_string(),
                    bold: false
                },
                ContentBlock::Bullet {
                    text: "second point".to_string(),
                    bold: false
                },
            ]
        );
    }

    #[test]
    fn given_fully_bold_block_when_parsing_then_bold_paragraph() {
        let blocks = parse_blocks("**Key finding here**");
        assert_eq!(
            blocks,
            vec![ContentBlock::Paragraph {
                text: "Key finding here".to_string(),
                bold: true
            }]
        );
    }

    #[test]
    fn given_all_caps_line_when_parsing_then_heading() {
        let blocks = parse_blocks("CHAPTER OVERVIEW");
        assert_eq!(
            blocks,
            vec![ContentBlock::Heading {
                text: "CHAPTER OVERVIEW".to_string(),
                bold: true
            }]
        );
    }

    #[test]
    fn given_short_colon_terminated_line_when_parsing_then_subheading() {
        let blocks = parse_blocks("The main causes are:");
        assert_eq!(
            blocks,
            vec![ContentBlock::Subheading {
                text: "The main causes are:".to_string(),
                bold: true
            }]
        );
    }

    #[test]
    fn given_ordinary_prose_when_parsing_then_plain_paragraph() {
        let text = "Virtual memory decouples the address space a process sees from the \
                    physical frames the hardware provides, which lets the kernel overcommit.";
        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert!(matches!(
            &blocks[0],
            ContentBlock::Paragraph { bold: false, .. }
        ));
    }

    #[test]
    fn given_garbage_input_when_parsing_then_never_panics_and_never_empty_blocks() {
        for garbage in ["", "\n\n\n\n", "###", "**", "* ", "\u{0}\u{1}weird\n\n\t"] {
            let blocks = parse_blocks(garbage);
            for block in &blocks {
                assert!(!block.text().is_empty() || matches!(block, ContentBlock::Bullet { .. }));
            }
        }
    }

    #[test]
    fn given_pathological_paragraph_count_when_parsing_then_capped_at_200() {
        let text = vec!["paragraph"; MAX_BLOCKS * 2].join("\n\n");
        assert_eq!(parse_blocks(&text).len(), MAX_BLOCKS);
    }
}

mod markdown_cleaner {
    use super::*;

    #[test]
    fn given_marked_up_text_when_cleaning_then_markup_removed() {
        let cleaned = clean_markdown("# Title\n\nSome **bold** and *italic* text with `code`.");
        assert_eq!(cleaned, "Title Some bold and italic text with code.");
    }

    #[test]
    fn given_links_and_rules_when_cleaning_then_labels_survive() {
        let cleaned = clean_markdown("See [the paper](http://example.com).\n\n---\n\nDone.");
        assert_eq!(cleaned, "See the paper. Done.");
    }

    #[test]
    fn given_stray_asterisks_when_cleaning_then_all_removed() {
        let cleaned = clean_markdown("unbalanced *emphasis and a lone * star");
        assert!(!cleaned.contains('*'));
    }

    #[test]
    fn given_already_clean_text_when_cleaning_again_then_unchanged() {
        let once = clean_markdown("## Heading\n\n**Bold** _lead_ with [link](x) and ```rust\nfence\n``` tail.");
        let twice = clean_markdown(&once);
        assert_eq!(once, twice);
    }
}

mod reference_stripper {
    use super::*;

    #[test]
    fn given_reference_section_when_stripping_then_cut_from_heading() {
        let text = "Body text.\n\nReferences\nSmith, J. (2020). A book.";
        assert_eq!(strip_references(text), "Body text.");
    }

    #[test]
    fn given_markdown_wrapped_heading_when_stripping_then_still_recognized() {
        let text = "Body text.\n\n## **References:**\nSmith, J. (2020). A book.";
        assert_eq!(strip_references(text), "Body text.");
    }

    #[test]
    fn given_bibliography_variant_when_stripping_then_cut() {
        let text = "Analysis holds.\n\nBIBLIOGRAPHY\nDoe, A. (1999). Title.";
        assert_eq!(strip_references(text), "Analysis holds.");
    }

    #[test]
    fn given_trailing_citation_lines_without_heading_when_stripping_then_dropped() {
        let text = "Closing argument stands.\n\nSmith, J. (2020). Study of things.";
        assert_eq!(strip_references(text), "Closing argument stands.");
    }

    #[test]
    fn given_prose_mentioning_references_inline_when_stripping_then_untouched() {
        let text = "The references to earlier work show a trend.";
        assert_eq!(strip_references(text), text);
    }
}
