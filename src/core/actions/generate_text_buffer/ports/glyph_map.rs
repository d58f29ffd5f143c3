use std::error::Error;

pub trait GlyphMap<T> {
    type Failure: Error;

    fn map(&self, value: T) -> Result<char, Self::Failure>;

    fn display_name(&self) -> &str;
}
