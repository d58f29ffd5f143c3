use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::core::data::text_buffer::TextBuffer;
use crate::storage::write_text::write_text;
use std::io::BufWriter;

pub struct StdoutPresenter {}

impl TextPresenterPort for StdoutPresenter {
    fn present(&self, buffer: &TextBuffer) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        write_text(buffer, &mut out)
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutPresenter {
    pub fn new() -> Self {
        Self {}
    }
}
