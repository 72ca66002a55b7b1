use lib_bioalign::{AlignmentResult, alignment_result::AlignmentType};

pub const MATCH_SYMBOL: char = '┃';
pub const MISMATCH_SYMBOL: char = '•';
pub const GAP_SYMBOL: char = '━';
pub const FLANK_SYMBOL: char = ' ';

/// The width of the position labels in front of each line.
const LABEL_WIDTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub spacing: usize,
    pub line_width: usize,
    pub show_sequences: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            spacing: 10,
            line_width: 30,
            show_sequences: true,
        }
    }
}

/// Renders the alignment in blocks of `line_width` columns.
///
/// Each block consists of the query line, the symbol line and the subject line,
/// followed by an empty line.
/// Sequence lines are labelled with the 1-based alignment column of their first character.
/// A spacing or line width of zero is treated as one.
pub fn render(alignment: &AlignmentResult, options: &RenderOptions) -> String {
    let spacing = options.spacing.max(1);
    let line_width = options.line_width.max(1);

    let query: Vec<_> = alignment.aligned_query.chars().collect();
    let subject: Vec<_> = alignment.aligned_subject.chars().collect();
    let symbols: Vec<_> = alignment.columns().map(symbol).collect();

    let mut result = String::new();
    for block_start in (0..symbols.len()).step_by(line_width) {
        let block = block_start..(block_start + line_width).min(symbols.len());
        let label = block_start + 1;

        if options.show_sequences {
            push_line(&mut result, &label.to_string(), &query[block.clone()], spacing);
            push_line(&mut result, "", &symbols[block.clone()], spacing);
            push_line(&mut result, &label.to_string(), &subject[block], spacing);
        } else {
            push_line(&mut result, &label.to_string(), &symbols[block], spacing);
        }
        result.push('\n');
    }

    result
}

fn symbol(column: AlignmentType) -> char {
    match column {
        AlignmentType::Match => MATCH_SYMBOL,
        AlignmentType::Substitution => MISMATCH_SYMBOL,
        AlignmentType::Insertion | AlignmentType::Deletion => GAP_SYMBOL,
        AlignmentType::Flank => FLANK_SYMBOL,
    }
}

fn push_line(result: &mut String, label: &str, characters: &[char], spacing: usize) {
    let mut line = format!("{label:>width$} ", width = LABEL_WIDTH);
    for (index, chunk) in characters.chunks(spacing).enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.extend(chunk);
    }

    result.push_str(line.trim_end());
    result.push('\n');
}
