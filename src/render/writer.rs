//! Output writer with indentation tracking

use super::config::RenderConfig;

/// Writer that tracks the current tree depth and builds indented output
pub struct TreeWriter<'c> {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    config: &'c RenderConfig,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl<'c> TreeWriter<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_empty_output() {
        let config = RenderConfig::default();
        assert_eq!(TreeWriter::new(&config).finish(), "");
    }

    #[test]
    fn test_write_empty_string_emits_no_indent() {
        let config = RenderConfig::default();
        let mut writer = TreeWriter::new(&config);
        writer.indent();
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_indent_applies_once_per_line() {
        let config = RenderConfig::new().with_indent_width(3);
        let mut writer = TreeWriter::new(&config);
        writer.writeln("root");
        writer.indent();
        writer.write("a");
        writer.writeln("b");
        writer.dedent();
        writer.writeln("c");
        assert_eq!(writer.finish(), "root\n   ab\nc\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let config = RenderConfig::default();
        let mut writer = TreeWriter::new(&config);
        writer.dedent();
        writer.writeln("x");
        assert_eq!(writer.finish(), "x\n");
    }
}
