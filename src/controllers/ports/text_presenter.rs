use crate::core::data::text_buffer::TextBuffer;

pub trait TextPresenterPort {
    fn present(&self, buffer: &TextBuffer) -> std::io::Result<()>;
}
