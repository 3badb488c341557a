use super::*;

/// Insert blank lines around headings, lists, and fenced code blocks.
pub(super) fn separate_blocks(config: &Config, lines: Vec<Line>) -> Vec<Line> {
    let mut state = BlockSeparator::new(config, lines.len());
    for line in lines {
        state.push(line);
    }
    state.output
}

struct BlockSeparator<'c> {
    config: &'c Config,
    output: Vec<Line>,
    /// The last line was a heading or a closing fence, so the next non-blank
    /// line needs a blank line in front of it.
    separate_next: bool,
    /// Since the last list item we've only seen blank lines and indented
    /// lines, which still belong to the list.
    in_list: bool,
}

impl<'c> BlockSeparator<'c> {
    fn new(config: &'c Config, capacity: usize) -> Self {
        Self {
            config,
            // room for a separator every few lines
            output: Vec::with_capacity(capacity + capacity / 4),
            separate_next: false,
            in_list: false,
        }
    }

    fn push(&mut self, line: Line) {
        if line.kind == LineKind::FenceBody {
            self.output.push(line);
            return;
        }
        if whitespace::is_blank(&line.text) {
            self.separate_next = false;
            self.output.push(line);
            return;
        }

        let text = line.text.as_str();
        let is_text = line.kind == LineKind::Text;
        let is_heading = is_text && heading::is_heading(text);
        let is_list_item = is_text && list::is_list_item(text);
        let indented = text.starts_with([' ', '\t']);

        let headings = self.config.is_enabled(Rule::HeadingBlankLines);
        let lists = self.config.is_enabled(Rule::ListBlankLines);
        let fences = self.config.is_enabled(Rule::FenceBlankLines);

        let starts_list = lists && is_list_item && !self.in_list && !self.previous_is_heading();
        let ends_list = lists
            && is_text
            && !is_list_item
            && self.in_list
            && !indented
            && !is_table_row(text);
        let separate = self.separate_next
            || (is_heading && headings)
            || (line.kind == LineKind::FenceOpen && fences)
            || starts_list
            || ends_list;
        if separate {
            self.ensure_blank_line();
        }

        if is_list_item {
            self.in_list = true;
        } else if !indented {
            self.in_list = false;
        }
        self.separate_next =
            (is_heading && headings) || (line.kind == LineKind::FenceClose && fences);
        self.output.push(line);
    }

    fn previous_is_heading(&self) -> bool {
        self.output
            .last()
            .is_some_and(|line| line.kind == LineKind::Text && heading::is_heading(&line.text))
    }

    /// Push a blank line unless we're at the start of the document or right
    /// after another blank line.
    fn ensure_blank_line(&mut self) {
        let Some(previous) = self.output.last() else {
            return;
        };
        if !whitespace::is_blank(&previous.text) {
            tracing::debug!(after = previous.text.as_str(), "inserting blank line");
            self.output.push(Line::blank());
        }
    }
}

fn is_table_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separate(input: &str) -> String {
        separate_with(&Config::default(), input)
    }

    fn separate_with(config: &Config, input: &str) -> String {
        let document = Document::parse(input);
        let lines = separate_blocks(config, document.lines);
        lines
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn headings_get_blank_lines_on_both_sides() {
        assert_eq!(
            separate("para\n## Heading\npara2"),
            "para\n\n## Heading\n\npara2"
        );
        assert_eq!(separate("# First\ntext"), "# First\n\ntext");
        assert_eq!(separate("text\n# Last"), "text\n\n# Last");
        assert_eq!(separate("# A\n## B"), "# A\n\n## B");
    }

    #[test]
    fn existing_blank_lines_are_not_duplicated() {
        let input = "para\n\n## Heading\n\npara2";
        assert_eq!(separate(input), input);
    }

    #[test]
    fn lists_get_blank_lines_on_both_sides() {
        assert_eq!(
            separate("Intro:\n- a\n- b\nOutro"),
            "Intro:\n\n- a\n- b\n\nOutro"
        );
        assert_eq!(separate("## List\n- a"), "## List\n\n- a");
    }

    #[test]
    fn list_continuations_stay_attached() {
        let input = "- a\n  more about a\n- b\n\n  b's second paragraph\n- c";
        assert_eq!(separate(input), input);
        assert_eq!(separate("- a\n| x | y |"), "- a\n| x | y |");
    }

    #[test]
    fn thematic_breaks_are_not_lists() {
        for input in ["* * *\ntext", "text\n- - -\nmore", "___\n* * *"] {
            assert_eq!(separate(input), input);
        }
    }

    #[test]
    fn fences_get_blank_lines_on_both_sides() {
        assert_eq!(
            separate("text\n```rust\nlet x = 1;\n\n```\nmore"),
            "text\n\n```rust\nlet x = 1;\n\n```\n\nmore"
        );
        assert_eq!(
            separate("- item\n  ```sh\n  ls\n  ```\n- next"),
            "- item\n\n  ```sh\n  ls\n  ```\n\n- next"
        );
    }

    #[test]
    fn fence_bodies_never_get_separators() {
        let input = "```md\n# heading\n- item\ntext\n```";
        assert_eq!(separate(input), input);
    }

    #[test]
    fn disabled_rules_insert_nothing() {
        let mut config = Config::default();
        config.disable(Rule::HeadingBlankLines);
        config.disable(Rule::FenceBlankLines);
        assert_eq!(
            separate_with(&config, "para\n# H\n```\nx\n```\npara"),
            "para\n# H\n```\nx\n```\npara"
        );
        // the end of a list still separates it from a heading
        assert_eq!(separate_with(&config, "- a\n# H"), "- a\n\n# H");
    }
}
